use crate::compliance::domain::CertificateRecord;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Where a loaded certificate record came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateOrigin {
    /// Parsed from the JSON document at this path
    File(PathBuf),
    /// The built-in record, because no path was given (`None`) or the
    /// given path does not exist
    Fallback { requested: Option<PathBuf> },
}

impl CertificateOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, CertificateOrigin::Fallback { .. })
    }
}

/// A certificate record together with its origin
#[derive(Debug, Clone)]
pub struct LoadedCertificate {
    pub record: CertificateRecord,
    pub origin: CertificateOrigin,
}

impl LoadedCertificate {
    pub fn new(record: CertificateRecord, origin: CertificateOrigin) -> Self {
        Self { record, origin }
    }
}

/// CertificateSource port for resolving the certificate under evaluation
///
/// Implementations re-read their source on every call; nothing is cached
/// between runs.
pub trait CertificateSource {
    /// Loads a certificate record
    ///
    /// # Arguments
    /// * `path` - Optional location of a certificate JSON document
    ///
    /// # Returns
    /// The parsed record, or the built-in fallback record when `path` is
    /// absent or does not exist
    ///
    /// # Errors
    /// Returns an error if:
    /// - The document exists but cannot be read safely
    /// - The document is not valid JSON or lacks required fields
    fn load_certificate(&self, path: Option<&Path>) -> Result<LoadedCertificate>;
}
