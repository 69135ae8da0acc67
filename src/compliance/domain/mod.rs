pub mod certificate;
pub mod check;
pub mod module_descriptor;
pub mod report;
pub mod sbom_document;
pub mod settings;

pub use certificate::{CertificateRecord, CertificateStatus};
pub use check::{CheckName, CheckOutcome, ComplianceCheckResult};
pub use module_descriptor::ModuleDescriptor;
pub use report::{ComplianceReport, OverallStatus};
pub use sbom_document::{SbomComponent, SbomDocument, SbomProperty};
pub use settings::ComplianceSettings;
