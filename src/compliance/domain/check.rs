use crate::shared::error::ComplianceError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Name of one compliance check.
///
/// Variants are declared in execution order, so ordered collections keyed
/// by `CheckName` iterate in the order the orchestrator runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckName {
    Certificate,
    Module,
    Algorithms,
    Sbom,
}

impl CheckName {
    /// Every known check, in execution order
    pub const ALL: [CheckName; 4] = [
        CheckName::Certificate,
        CheckName::Module,
        CheckName::Algorithms,
        CheckName::Sbom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::Certificate => "certificate",
            CheckName::Module => "module",
            CheckName::Algorithms => "algorithms",
            CheckName::Sbom => "sbom",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CheckName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown check name: {}", s))
    }
}

/// Outcome of a single check: PASS, or FAIL with a human-readable reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Pass,
    Fail(String),
}

const FAIL_PREFIX: &str = "FAIL: ";

impl CheckOutcome {
    pub fn fail(reason: impl Into<String>) -> Self {
        CheckOutcome::Fail(reason.into())
    }

    /// Converts a fallible check into an outcome.
    ///
    /// The full error chain is kept in the reason (`outer: inner: ...`).
    pub fn from_result(result: Result<()>) -> Self {
        match result {
            Ok(()) => CheckOutcome::Pass,
            Err(e) => CheckOutcome::Fail(format!("{:#}", e)),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            CheckOutcome::Pass => None,
            CheckOutcome::Fail(reason) => Some(reason),
        }
    }

    /// Parses the wire form written by [`fmt::Display`]: `PASS` or `FAIL: <reason>`
    pub fn parse(value: &str) -> Result<Self> {
        if value == "PASS" {
            return Ok(CheckOutcome::Pass);
        }
        if let Some(reason) = value.strip_prefix(FAIL_PREFIX) {
            return Ok(CheckOutcome::Fail(reason.to_string()));
        }
        if value == "FAIL" {
            return Ok(CheckOutcome::Fail(String::new()));
        }
        Err(ComplianceError::Validation {
            message: format!(
                "Invalid check outcome '{}': expected 'PASS' or 'FAIL: <reason>'",
                value
            ),
        }
        .into())
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Pass => f.write_str("PASS"),
            CheckOutcome::Fail(reason) => write!(f, "{}{}", FAIL_PREFIX, reason),
        }
    }
}

/// ComplianceCheckResult value object pairing a check with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceCheckResult {
    name: CheckName,
    outcome: CheckOutcome,
}

impl ComplianceCheckResult {
    pub fn new(name: CheckName, outcome: CheckOutcome) -> Self {
        Self { name, outcome }
    }

    pub fn name(&self) -> CheckName {
        self.name
    }

    pub fn outcome(&self) -> &CheckOutcome {
        &self.outcome
    }

    pub fn into_parts(self) -> (CheckName, CheckOutcome) {
        (self.name, self.outcome)
    }
}
