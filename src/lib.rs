//! fips-compliance - FIPS 140-3 compliance validation for cryptographic modules
//!
//! This library decides whether a cryptographic module may be declared
//! FIPS 140-3 compliant and emits audit evidence: a compliance report and a
//! CycloneDX SBOM. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): Certificates, checks, reports, policies and services
//! - **Application Layer** (`application`): The compliance run use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Config** (`config`): YAML configuration file support
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use fips_compliance::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = RunComplianceUseCase::new(
//!     FileSystemCertificateSource::new(),
//!     PassthroughIntegrityChecker::new(),
//!     StderrProgressReporter::new(),
//!     AlgorithmRegistry::fips_default(),
//!     CertificateValidator::default(),
//!     ComplianceSettings::default(),
//! );
//!
//! let request = ComplianceRequest::new(
//!     Some(PathBuf::from("fips-140-3/certificates/certificate-4985.json")),
//!     None,
//!     ModuleDescriptor::default(),
//!     false,
//! );
//! let response = use_case.execute(request)?;
//!
//! let writer = FileSystemArtifactWriter::new();
//! writer.write_report(&response.report, &PathBuf::from("fips-compliance-report.json"))?;
//! println!("{}", response.report.overall_status());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemArtifactWriter, FileSystemCertificateSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CycloneDxFormatter, MarkdownFormatter, ReportJsonFormatter,
    };
    pub use crate::adapters::outbound::integrity::{
        PassthroughIntegrityChecker, Sha256IntegrityChecker,
    };
    pub use crate::application::dto::{ComplianceRequest, ComplianceResponse, OutputFormat};
    pub use crate::application::use_cases::RunComplianceUseCase;
    pub use crate::compliance::domain::{
        CertificateRecord, CertificateStatus, CheckName, CheckOutcome, ComplianceCheckResult,
        ComplianceReport, ComplianceSettings, ModuleDescriptor, OverallStatus, SbomDocument,
    };
    pub use crate::compliance::policies::{AlgorithmRegistry, ExpiryPolicy};
    pub use crate::compliance::services::{CertificateValidator, SbomGenerator};
    pub use crate::ports::outbound::{
        ArtifactWriter, CertificateOrigin, CertificateSource, IntegrityChecker, LoadedCertificate,
        OutputPresenter, ProgressReporter, ReportFormatter, SbomFormatter,
    };
    pub use crate::shared::Result;
}
