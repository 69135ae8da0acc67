use super::check::{CheckName, CheckOutcome, ComplianceCheckResult};
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Aggregate verdict of a compliance run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallStatus {
    Compliant,
    NonCompliant,
}

impl OverallStatus {
    /// `Compliant` iff every outcome is PASS.
    ///
    /// An empty set of outcomes is vacuously compliant; a report never holds one.
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a CheckOutcome>) -> Self {
        if outcomes.into_iter().all(CheckOutcome::is_pass) {
            OverallStatus::Compliant
        } else {
            OverallStatus::NonCompliant
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Compliant => "COMPLIANT",
            OverallStatus::NonCompliant => "NON-COMPLIANT",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverallStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "COMPLIANT" => Ok(OverallStatus::Compliant),
            "NON-COMPLIANT" => Ok(OverallStatus::NonCompliant),
            _ => Err(format!(
                "Invalid overall status: {}. Expected 'COMPLIANT' or 'NON-COMPLIANT'",
                s
            )),
        }
    }
}

/// ComplianceReport aggregate produced once per compliance run
///
/// Holds exactly one outcome per [`CheckName`]. The overall status is derived
/// from the results at construction time and cannot drift from them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceReport {
    timestamp: DateTime<Utc>,
    certificate_number: String,
    results: BTreeMap<CheckName, CheckOutcome>,
    overall_status: OverallStatus,
}

impl ComplianceReport {
    /// Builds a report from individual check results in any order.
    ///
    /// # Errors
    /// Returns a validation error if a check is reported twice or any known
    /// check is missing
    pub fn new(
        timestamp: DateTime<Utc>,
        certificate_number: String,
        results: Vec<ComplianceCheckResult>,
    ) -> Result<Self> {
        let mut by_name = BTreeMap::new();
        for result in results {
            let (name, outcome) = result.into_parts();
            if by_name.insert(name, outcome).is_some() {
                return Err(ComplianceError::Validation {
                    message: format!("check '{}' is reported more than once", name),
                }
                .into());
            }
        }

        let missing: Vec<&str> = CheckName::ALL
            .iter()
            .filter(|name| !by_name.contains_key(*name))
            .map(CheckName::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(ComplianceError::Validation {
                message: format!("missing results for checks: {}", missing.join(", ")),
            }
            .into());
        }

        Ok(Self::from_map(timestamp, certificate_number, by_name))
    }

    /// Builds a report from one outcome per check, ordered as [`CheckName::ALL`].
    pub fn from_outcomes(
        timestamp: DateTime<Utc>,
        certificate_number: String,
        outcomes: [CheckOutcome; 4],
    ) -> Self {
        let results = CheckName::ALL.into_iter().zip(outcomes).collect();
        Self::from_map(timestamp, certificate_number, results)
    }

    fn from_map(
        timestamp: DateTime<Utc>,
        certificate_number: String,
        results: BTreeMap<CheckName, CheckOutcome>,
    ) -> Self {
        let overall_status = OverallStatus::from_outcomes(results.values());
        Self {
            timestamp,
            certificate_number,
            results,
            overall_status,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn certificate_number(&self) -> &str {
        &self.certificate_number
    }

    /// Results keyed by check name, iterated in execution order
    pub fn results(&self) -> &BTreeMap<CheckName, CheckOutcome> {
        &self.results
    }

    pub fn outcome(&self, name: CheckName) -> Option<&CheckOutcome> {
        self.results.get(&name)
    }

    pub fn overall_status(&self) -> OverallStatus {
        self.overall_status
    }

    pub fn is_compliant(&self) -> bool {
        self.overall_status == OverallStatus::Compliant
    }

    /// Names of checks whose outcome is FAIL
    pub fn failed_checks(&self) -> Vec<CheckName> {
        self.results
            .iter()
            .filter(|(_, outcome)| !outcome.is_pass())
            .map(|(name, _)| *name)
            .collect()
    }
}
