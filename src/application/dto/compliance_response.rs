use crate::compliance::domain::{CertificateRecord, ComplianceReport, SbomDocument};
use crate::ports::outbound::CertificateOrigin;

/// ComplianceResponse - Internal response DTO from the compliance run use case
///
/// Carries the report together with everything adapters need to render
/// and persist it.
#[derive(Debug, Clone)]
pub struct ComplianceResponse {
    pub report: ComplianceReport,
    /// The certificate the run was evaluated against
    pub certificate: CertificateRecord,
    /// Where the certificate came from
    pub origin: CertificateOrigin,
    /// Present only when the `sbom` check passed
    pub sbom: Option<SbomDocument>,
}

impl ComplianceResponse {
    pub fn new(
        report: ComplianceReport,
        certificate: CertificateRecord,
        origin: CertificateOrigin,
        sbom: Option<SbomDocument>,
    ) -> Self {
        Self {
            report,
            certificate,
            origin,
            sbom,
        }
    }

    pub fn fallback_used(&self) -> bool {
        self.origin.is_fallback()
    }
}
