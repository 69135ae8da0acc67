use crate::compliance::domain::{CertificateRecord, ComplianceReport, SbomDocument};
use crate::shared::Result;

/// ReportFormatter port for rendering a compliance report
///
/// This port abstracts the presentation format (report JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Arguments
    /// * `report` - The aggregate result of a compliance run
    /// * `certificate` - The certificate the run evaluated
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ComplianceReport, certificate: &CertificateRecord) -> Result<String>;
}

/// SbomFormatter port for serializing an SBOM document
pub trait SbomFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format_sbom(&self, sbom: &SbomDocument) -> Result<String>;
}
