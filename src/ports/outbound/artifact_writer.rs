use crate::compliance::domain::{ComplianceReport, SbomDocument};
use crate::shared::Result;
use std::path::Path;

/// ArtifactWriter port for persisting audit evidence
///
/// A failed write never alters the in-memory report or SBOM.
pub trait ArtifactWriter {
    /// Writes the compliance report, preserving every check result and the
    /// overall status verbatim
    ///
    /// # Errors
    /// Returns a write error if the destination cannot be created or written
    fn write_report(&self, report: &ComplianceReport, destination: &Path) -> Result<()>;

    /// Writes the SBOM document
    ///
    /// # Errors
    /// Returns a write error if the destination cannot be created or written
    fn write_sbom(&self, sbom: &SbomDocument, destination: &Path) -> Result<()>;
}
