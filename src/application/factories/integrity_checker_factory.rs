use crate::adapters::outbound::integrity::{PassthroughIntegrityChecker, Sha256IntegrityChecker};
use crate::compliance::domain::ModuleDescriptor;
use crate::ports::outbound::IntegrityChecker;

/// Factory selecting the integrity checker for a module
///
/// A module with an artifact path or an expected SHA-256 digest is verified
/// against its artifact, so a half-configured module fails the check. A
/// module with neither gets the passthrough checker.
pub struct IntegrityCheckerFactory;

impl IntegrityCheckerFactory {
    pub fn create(module: &ModuleDescriptor) -> Box<dyn IntegrityChecker> {
        if module.artifact_path().is_some() || module.expected_sha256().is_some() {
            Box::new(Sha256IntegrityChecker::new())
        } else {
            Box::new(PassthroughIntegrityChecker::new())
        }
    }
}
