/// Integrity checker adapters for the evaluated module
mod passthrough;
mod sha256;

pub use passthrough::PassthroughIntegrityChecker;
pub use sha256::Sha256IntegrityChecker;
