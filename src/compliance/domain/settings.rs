use std::path::{Path, PathBuf};

/// Explicit FIPS mode configuration for one compliance run.
///
/// Passed into the orchestrator instead of being read from process-wide
/// environment variables, so concurrent runs cannot observe each other's mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceSettings {
    fips_mode_enabled: bool,
    config_path: Option<PathBuf>,
}

impl ComplianceSettings {
    pub fn new(fips_mode_enabled: bool, config_path: Option<PathBuf>) -> Self {
        Self {
            fips_mode_enabled,
            config_path,
        }
    }

    pub fn fips_mode_enabled(&self) -> bool {
        self.fips_mode_enabled
    }

    /// Path of the provider configuration (e.g. an OpenSSL `fips.cnf`)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl Default for ComplianceSettings {
    fn default() -> Self {
        Self::new(true, None)
    }
}
