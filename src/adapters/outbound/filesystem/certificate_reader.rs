use crate::compliance::domain::{CertificateRecord, CertificateStatus};
use crate::ports::outbound::{CertificateOrigin, CertificateSource, LoadedCertificate};
use crate::shared::error::ComplianceError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// On-disk certificate document.
///
/// Only `certificate_number`, `status` and `expiry_date` are required; the
/// descriptive fields default to empty.
#[derive(Debug, Deserialize)]
struct CertificateDocument {
    certificate_number: String,
    status: String,
    expiry_date: String,
    #[serde(default)]
    validation_date: Option<String>,
    #[serde(default)]
    module_name: Option<String>,
    #[serde(default)]
    module_version: Option<String>,
    #[serde(default)]
    security_level: Option<String>,
    #[serde(default)]
    algorithms: Vec<String>,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    validation_lab: Option<String>,
}

/// FileSystemCertificateSource adapter reading certificate JSON documents
///
/// This adapter implements the CertificateSource port. A missing file is not
/// an error: the built-in fallback record is returned and its origin is
/// marked so the caller can warn about it or reject it.
pub struct FileSystemCertificateSource;

impl FileSystemCertificateSource {
    pub fn new() -> Self {
        Self
    }

    /// Parses certificate JSON into a record
    ///
    /// # Errors
    /// Returns `MalformedCertificate` if the JSON is invalid, a required field
    /// is missing or has the wrong type, or a date cannot be parsed
    pub fn parse_certificate(content: &str, path: &Path) -> Result<CertificateRecord> {
        let malformed = |details: String| ComplianceError::MalformedCertificate {
            path: path.to_path_buf(),
            details,
        };

        let document: CertificateDocument =
            serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;

        let expiry_date = parse_date(&document.expiry_date)
            .map_err(|e| malformed(format!("invalid expiry_date: {}", e)))?;

        let mut record = CertificateRecord::new(
            document.certificate_number,
            CertificateStatus::parse(&document.status),
            expiry_date,
        )
        .map_err(|e| malformed(e.to_string()))?;

        if let Some(validation_date) = document.validation_date.as_deref() {
            let validation_date = parse_date(validation_date)
                .map_err(|e| malformed(format!("invalid validation_date: {}", e)))?;
            record = record.with_validation_date(validation_date);
        }

        Ok(record
            .with_module(
                document.module_name.unwrap_or_default(),
                document.module_version.unwrap_or_default(),
            )
            .with_vendor(document.vendor.unwrap_or_default())
            .with_validation_lab(document.validation_lab.unwrap_or_default())
            .with_security_level(document.security_level.unwrap_or_default())
            .with_algorithms(document.algorithms))
    }
}

impl Default for FileSystemCertificateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateSource for FileSystemCertificateSource {
    fn load_certificate(&self, path: Option<&Path>) -> Result<LoadedCertificate> {
        let Some(path) = path else {
            return Ok(LoadedCertificate::new(
                CertificateRecord::fallback(),
                CertificateOrigin::Fallback { requested: None },
            ));
        };

        // symlink_metadata so that a dangling symlink is reported, not skipped
        match fs::symlink_metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(LoadedCertificate::new(
                    CertificateRecord::fallback(),
                    CertificateOrigin::Fallback {
                        requested: Some(path.to_path_buf()),
                    },
                ));
            }
            _ => {}
        }

        let content = read_regular_file(path, "certificate").map_err(|e| {
            ComplianceError::CertificateReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let record = Self::parse_certificate(&content, path)?;
        Ok(LoadedCertificate::new(
            record,
            CertificateOrigin::File(path.to_path_buf()),
        ))
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and naive ISO-8601 timestamps;
/// only the calendar date is kept.
fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime.date());
    }

    Err(format!(
        "'{}' is not an ISO-8601 date (expected YYYY-MM-DD)",
        value
    ))
}
