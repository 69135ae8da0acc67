use crate::compliance::domain::ModuleDescriptor;
use crate::shared::Result;

/// IntegrityChecker port for verifying the module binary or package
///
/// The orchestrator treats any `Err` as a FAIL outcome of the `module` check,
/// so implementations can use `?` freely.
pub trait IntegrityChecker {
    /// Verifies the integrity of the described module
    ///
    /// # Errors
    /// Returns an error describing why the module could not be verified
    fn check_integrity(&self, module: &ModuleDescriptor) -> Result<()>;
}

impl<T: IntegrityChecker + ?Sized> IntegrityChecker for Box<T> {
    fn check_integrity(&self, module: &ModuleDescriptor) -> Result<()> {
        (**self).check_integrity(module)
    }
}
