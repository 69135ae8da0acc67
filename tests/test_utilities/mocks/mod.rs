/// Mock implementations for testing
mod mock_certificate_source;
mod mock_integrity_checker;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_certificate_source::MockCertificateSource;
#[allow(unused_imports)]
pub use mock_integrity_checker::MockIntegrityChecker;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
