use crate::compliance::domain::{
    CertificateRecord, CheckName, CheckOutcome, ComplianceCheckResult, ComplianceReport,
    OverallStatus,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use anyhow::Context;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Wire form of the compliance report artifact
#[derive(Debug, Serialize, Deserialize)]
struct ReportDocument {
    timestamp: String,
    certificate_number: String,
    validation_results: BTreeMap<String, String>,
    overall_status: String,
}

/// ReportJsonFormatter adapter for the machine-readable compliance report
///
/// Produces `{timestamp, certificate_number, validation_results, overall_status}`
/// where every result is `"PASS"` or `"FAIL: <reason>"`. The same adapter can
/// parse a report back for auditing.
pub struct ReportJsonFormatter;

impl ReportJsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn to_json(&self, report: &ComplianceReport) -> Result<String> {
        let document = ReportDocument {
            timestamp: report
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            certificate_number: report.certificate_number().to_string(),
            validation_results: report
                .results()
                .iter()
                .map(|(name, outcome)| (name.as_str().to_string(), outcome.to_string()))
                .collect(),
            overall_status: report.overall_status().as_str().to_string(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }

    /// Parses a serialized report
    ///
    /// # Errors
    /// Returns an error if the JSON is invalid, a check name or outcome is not
    /// recognised, a known check has no result, or `overall_status`
    /// contradicts the individual results
    pub fn parse(&self, content: &str) -> Result<ComplianceReport> {
        let document: ReportDocument =
            serde_json::from_str(content).context("Failed to parse compliance report")?;

        let timestamp = parse_timestamp(&document.timestamp)?;

        let mut results = Vec::with_capacity(document.validation_results.len());
        for (name, outcome) in &document.validation_results {
            let name = CheckName::from_str(name).map_err(|message| ComplianceError::Validation {
                message,
            })?;
            let outcome = CheckOutcome::parse(outcome)
                .with_context(|| format!("Invalid result for check '{}'", name))?;
            results.push(ComplianceCheckResult::new(name, outcome));
        }

        let declared = OverallStatus::from_str(&document.overall_status)
            .map_err(|message| ComplianceError::Validation { message })?;

        let report = ComplianceReport::new(timestamp, document.certificate_number, results)
            .context("Incomplete compliance report")?;
        if report.overall_status() != declared {
            return Err(ComplianceError::Validation {
                message: format!(
                    "overall_status '{}' contradicts the validation results ('{}')",
                    declared,
                    report.overall_status()
                ),
            }
            .into());
        }

        Ok(report)
    }
}

impl Default for ReportJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for ReportJsonFormatter {
    fn format(&self, report: &ComplianceReport, _certificate: &CertificateRecord) -> Result<String> {
        self.to_json(report)
    }
}

/// RFC 3339, or a naive ISO-8601 timestamp interpreted as UTC
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            ComplianceError::Validation {
                message: format!("Invalid report timestamp: {}", value),
            }
            .into()
        })
}
