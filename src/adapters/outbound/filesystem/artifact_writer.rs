use super::file_writer::FileSystemWriter;
use crate::adapters::outbound::formatters::{CycloneDxFormatter, ReportJsonFormatter};
use crate::compliance::domain::{ComplianceReport, SbomDocument};
use crate::ports::outbound::{ArtifactWriter, OutputPresenter, SbomFormatter};
use crate::shared::Result;
use std::path::Path;

/// FileSystemArtifactWriter adapter persisting the report and SBOM as JSON files
///
/// The report is written in its wire form and the SBOM as CycloneDX 1.6.
/// Serialization happens before the destination is touched, so a formatting
/// failure never leaves a truncated artifact behind.
pub struct FileSystemArtifactWriter {
    report_formatter: ReportJsonFormatter,
    sbom_formatter: CycloneDxFormatter,
}

impl FileSystemArtifactWriter {
    pub fn new() -> Self {
        Self {
            report_formatter: ReportJsonFormatter::new(),
            sbom_formatter: CycloneDxFormatter::new(),
        }
    }
}

impl Default for FileSystemArtifactWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactWriter for FileSystemArtifactWriter {
    fn write_report(&self, report: &ComplianceReport, destination: &Path) -> Result<()> {
        let content = self.report_formatter.to_json(report)?;
        FileSystemWriter::new(destination.to_path_buf()).present(&content)
    }

    fn write_sbom(&self, sbom: &SbomDocument, destination: &Path) -> Result<()> {
        let content = self.sbom_formatter.format_sbom(sbom)?;
        FileSystemWriter::new(destination.to_path_buf()).present(&content)
    }
}
