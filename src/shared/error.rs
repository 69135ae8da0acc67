use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to gate deployments on the compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every compliance check passed
    Compliant = 0,
    /// At least one check failed, or the run could not complete
    /// (unreadable certificate, unwritable artifact, etc.)
    NonCompliant = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Compliant => write!(f, "Compliant (0)"),
            ExitCode::NonCompliant => write!(f, "Non-Compliant (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for compliance validation.
///
/// Only setup and infrastructure problems are represented here. A module
/// failing a compliance check is reported as data, never as one of these.
#[derive(Debug, Error)]
pub enum ComplianceError {
    #[error("Malformed certificate: {path}\nDetails: {details}\n\n💡 Hint: The certificate must be a JSON object with at least 'certificate_number', 'status' and 'expiry_date'")]
    MalformedCertificate { path: PathBuf, details: String },

    #[error("Failed to read certificate: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a regular, readable JSON file")]
    CertificateReadError { path: PathBuf, details: String },

    #[error("Certificate source not found: {path}\n\n💡 Hint: A certificate is required in strict mode. Provide one with --certificate or FIPS_CERTIFICATE_PATH, or drop --require-certificate")]
    FallbackRejected { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
