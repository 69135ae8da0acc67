use crate::compliance::domain::ModuleDescriptor;
use std::path::PathBuf;

/// ComplianceRequest - Internal request DTO for the compliance run use case
#[derive(Debug, Clone, Default)]
pub struct ComplianceRequest {
    /// Certificate JSON to load; `None` uses the built-in record
    pub certificate_path: Option<PathBuf>,
    /// Algorithms the module declares. When `None`, the certificate's own
    /// algorithm list is checked.
    pub declared_algorithms: Option<Vec<String>>,
    /// Module under evaluation
    pub module: ModuleDescriptor,
    /// Refuse to fall back to the built-in certificate
    pub require_certificate: bool,
}

impl ComplianceRequest {
    pub fn new(
        certificate_path: Option<PathBuf>,
        declared_algorithms: Option<Vec<String>>,
        module: ModuleDescriptor,
        require_certificate: bool,
    ) -> Self {
        Self {
            certificate_path,
            declared_algorithms,
            module,
            require_certificate,
        }
    }
}
