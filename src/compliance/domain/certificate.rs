use crate::shared::error::ComplianceError;
use crate::shared::Result;
use chrono::NaiveDate;
use std::fmt;

/// Status of a FIPS validation certificate as published by the validation program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateStatus {
    Valid,
    Expired,
    Revoked,
    Unknown,
}

impl CertificateStatus {
    /// Parses a status string case-insensitively.
    ///
    /// Values outside the known set map to [`CertificateStatus::Unknown`]
    /// rather than failing, so a certificate with a novel status still loads
    /// and is then rejected by the validator.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "valid" => CertificateStatus::Valid,
            "expired" => CertificateStatus::Expired,
            "revoked" => CertificateStatus::Revoked,
            _ => CertificateStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStatus::Valid => "valid",
            CertificateStatus::Expired => "expired",
            CertificateStatus::Revoked => "revoked",
            CertificateStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CertificateRecord value object describing one FIPS 140-3 certificate
///
/// A record is a read-only snapshot: it is built once per compliance run and
/// never mutated afterwards. `validation_date <= expiry_date` is expected but
/// not enforced here; the validator rejects records that break it.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateRecord {
    certificate_number: String,
    validation_date: Option<NaiveDate>,
    expiry_date: NaiveDate,
    status: CertificateStatus,
    module_name: String,
    module_version: String,
    vendor: String,
    validation_lab: String,
    security_level: String,
    algorithms: Vec<String>,
}

impl CertificateRecord {
    /// Creates a record from its required fields.
    ///
    /// # Errors
    /// Returns a validation error if the certificate number is blank
    pub fn new(
        certificate_number: String,
        status: CertificateStatus,
        expiry_date: NaiveDate,
    ) -> Result<Self> {
        if certificate_number.trim().is_empty() {
            return Err(ComplianceError::Validation {
                message: "certificate number must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            certificate_number,
            validation_date: None,
            expiry_date,
            status,
            module_name: String::new(),
            module_version: String::new(),
            vendor: String::new(),
            validation_lab: String::new(),
            security_level: String::new(),
            algorithms: Vec::new(),
        })
    }

    pub fn with_validation_date(mut self, validation_date: NaiveDate) -> Self {
        self.validation_date = Some(validation_date);
        self
    }

    pub fn with_module(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.module_name = name.into();
        self.module_version = version.into();
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn with_validation_lab(mut self, validation_lab: impl Into<String>) -> Self {
        self.validation_lab = validation_lab.into();
        self
    }

    pub fn with_security_level(mut self, security_level: impl Into<String>) -> Self {
        self.security_level = security_level.into();
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<String>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// The built-in record used when no certificate source is available.
    ///
    /// Describes certificate #4985 for the OpenSSL FIPS Provider 3.0.8.
    pub fn fallback() -> Self {
        let validation_date =
            NaiveDate::from_ymd_opt(2023, 1, 15).expect("fallback validation date is valid");
        let expiry_date =
            NaiveDate::from_ymd_opt(2028, 1, 15).expect("fallback expiry date is valid");

        Self {
            certificate_number: "4985".to_string(),
            validation_date: Some(validation_date),
            expiry_date,
            status: CertificateStatus::Valid,
            module_name: "OpenSSL FIPS Provider".to_string(),
            module_version: "3.0.8".to_string(),
            vendor: "OpenSSL Software Foundation".to_string(),
            validation_lab: "NIST Cryptographic Module Validation Program".to_string(),
            security_level: "Level 1".to_string(),
            algorithms: ["AES-GCM", "SHA-256", "RSA-2048", "ECDSA-P256"]
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }

    pub fn certificate_number(&self) -> &str {
        &self.certificate_number
    }

    pub fn validation_date(&self) -> Option<NaiveDate> {
        self.validation_date
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn status(&self) -> CertificateStatus {
        self.status
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn module_version(&self) -> &str {
        &self.module_version
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn validation_lab(&self) -> &str {
        &self.validation_lab
    }

    pub fn security_level(&self) -> &str {
        &self.security_level
    }

    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// True when the validation date is known and falls after the expiry date
    pub fn has_inverted_validity_window(&self) -> bool {
        self.validation_date
            .map(|validated| validated > self.expiry_date)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_parse_known_values() {
        assert_eq!(CertificateStatus::parse("valid"), CertificateStatus::Valid);
        assert_eq!(CertificateStatus::parse("expired"), CertificateStatus::Expired);
        assert_eq!(CertificateStatus::parse("revoked"), CertificateStatus::Revoked);
        assert_eq!(CertificateStatus::parse("unknown"), CertificateStatus::Unknown);
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(CertificateStatus::parse("VALID"), CertificateStatus::Valid);
        assert_eq!(CertificateStatus::parse(" Revoked "), CertificateStatus::Revoked);
    }

    #[test]
    fn test_status_parse_unrecognized_is_unknown() {
        assert_eq!(CertificateStatus::parse("historical"), CertificateStatus::Unknown);
        assert_eq!(CertificateStatus::parse(""), CertificateStatus::Unknown);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CertificateStatus::Valid.to_string(), "valid");
        assert_eq!(CertificateStatus::Revoked.to_string(), "revoked");
    }

    #[test]
    fn test_new_rejects_blank_number() {
        let result = CertificateRecord::new(
            "  ".to_string(),
            CertificateStatus::Valid,
            date(2030, 1, 1),
        );
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("certificate number must not be empty"));
    }

    #[test]
    fn test_builder_methods() {
        let record = CertificateRecord::new(
            "1234".to_string(),
            CertificateStatus::Valid,
            date(2030, 1, 1),
        )
        .unwrap()
        .with_validation_date(date(2025, 1, 1))
        .with_module("Test Provider", "1.0.0")
        .with_vendor("Test Vendor")
        .with_validation_lab("Test Lab")
        .with_security_level("Level 2")
        .with_algorithms(vec!["SHA-256".to_string()]);

        assert_eq!(record.certificate_number(), "1234");
        assert_eq!(record.validation_date(), Some(date(2025, 1, 1)));
        assert_eq!(record.expiry_date(), date(2030, 1, 1));
        assert_eq!(record.status(), CertificateStatus::Valid);
        assert_eq!(record.module_name(), "Test Provider");
        assert_eq!(record.module_version(), "1.0.0");
        assert_eq!(record.vendor(), "Test Vendor");
        assert_eq!(record.validation_lab(), "Test Lab");
        assert_eq!(record.security_level(), "Level 2");
        assert_eq!(record.algorithms(), &["SHA-256".to_string()]);
    }

    #[test]
    fn test_fallback_record() {
        let record = CertificateRecord::fallback();
        assert_eq!(record.certificate_number(), "4985");
        assert_eq!(record.status(), CertificateStatus::Valid);
        assert_eq!(record.validation_date(), Some(date(2023, 1, 15)));
        assert_eq!(record.expiry_date(), date(2028, 1, 15));
        assert_eq!(record.module_name(), "OpenSSL FIPS Provider");
        assert_eq!(record.module_version(), "3.0.8");
        assert_eq!(
            record.algorithms(),
            &["AES-GCM", "SHA-256", "RSA-2048", "ECDSA-P256"]
        );
        assert!(!record.has_inverted_validity_window());
    }

    #[test]
    fn test_inverted_validity_window() {
        let record = CertificateRecord::new(
            "1".to_string(),
            CertificateStatus::Valid,
            date(2024, 1, 1),
        )
        .unwrap()
        .with_validation_date(date(2025, 1, 1));
        assert!(record.has_inverted_validity_window());
    }

    #[test]
    fn test_missing_validation_date_is_not_inverted() {
        let record = CertificateRecord::new(
            "1".to_string(),
            CertificateStatus::Valid,
            date(2024, 1, 1),
        )
        .unwrap();
        assert!(!record.has_inverted_validity_window());
    }
}
