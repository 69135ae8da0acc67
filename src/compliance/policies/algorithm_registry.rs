use crate::compliance::domain::CheckOutcome;
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use std::collections::BTreeSet;

/// Algorithms approved under the default FIPS 140-3 policy
pub const DEFAULT_APPROVED_ALGORITHMS: [&str; 4] = ["AES-GCM", "SHA-256", "RSA-2048", "ECDSA-P256"];

/// AlgorithmRegistry policy holding the allowlist of FIPS-approved algorithms
///
/// The allowlist is fixed at construction time. Identifiers are compared
/// exactly (case-sensitive): `aes-gcm` is not `AES-GCM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmRegistry {
    approved: BTreeSet<String>,
}

/// Split of a declared algorithm list into approved and rejected identifiers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlgorithmAssessment {
    approved: Vec<String>,
    rejected: Vec<String>,
}

impl AlgorithmAssessment {
    /// Approved identifiers, deduplicated, in declaration order
    pub fn approved(&self) -> &[String] {
        &self.approved
    }

    /// Identifiers outside the allowlist, deduplicated, in declaration order
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    pub fn outcome(&self) -> CheckOutcome {
        if self.rejected.is_empty() {
            CheckOutcome::Pass
        } else {
            CheckOutcome::fail(format!(
                "unapproved algorithms: {}",
                self.rejected.join(", ")
            ))
        }
    }
}

impl AlgorithmRegistry {
    /// Creates a registry from an explicit allowlist.
    ///
    /// # Errors
    /// Returns a validation error if any identifier is blank
    pub fn new<I, S>(approved: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for (i, algorithm) in approved.into_iter().enumerate() {
            let algorithm: String = algorithm.into();
            if algorithm.trim().is_empty() {
                return Err(ComplianceError::Validation {
                    message: format!("approved algorithm at index {} must not be empty", i),
                }
                .into());
            }
            set.insert(algorithm);
        }
        Ok(Self { approved: set })
    }

    /// Registry loaded with [`DEFAULT_APPROVED_ALGORITHMS`]
    pub fn fips_default() -> Self {
        Self {
            approved: DEFAULT_APPROVED_ALGORITHMS
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }

    pub fn is_approved(&self, algorithm: &str) -> bool {
        self.approved.contains(algorithm)
    }

    pub fn approved_algorithms(&self) -> impl Iterator<Item = &str> {
        self.approved.iter().map(String::as_str)
    }

    /// Partitions the declared algorithms against the allowlist
    pub fn assess(&self, declared: &[String]) -> AlgorithmAssessment {
        let mut assessment = AlgorithmAssessment::default();
        let mut seen = BTreeSet::new();

        for algorithm in declared {
            if !seen.insert(algorithm.as_str()) {
                continue;
            }
            if self.is_approved(algorithm) {
                assessment.approved.push(algorithm.clone());
            } else {
                assessment.rejected.push(algorithm.clone());
            }
        }

        assessment
    }

    /// PASS when every declared algorithm is approved (an empty list passes),
    /// otherwise FAIL naming each offending identifier.
    pub fn validate_algorithms(&self, declared: &[String]) -> CheckOutcome {
        self.assess(declared).outcome()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::fips_default()
    }
}
