/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, module artifacts).
pub mod artifact_writer;
pub mod certificate_source;
pub mod formatter;
pub mod integrity_checker;
pub mod output_presenter;
pub mod progress_reporter;

pub use artifact_writer::ArtifactWriter;
pub use certificate_source::{CertificateOrigin, CertificateSource, LoadedCertificate};
pub use formatter::{ReportFormatter, SbomFormatter};
pub use integrity_checker::IntegrityChecker;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
