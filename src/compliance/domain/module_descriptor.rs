use std::path::{Path, PathBuf};

/// ModuleDescriptor value object identifying the cryptographic module under evaluation
///
/// The same descriptor feeds the integrity check (artifact location and
/// expected digest) and the SBOM component entry (name, version, purl).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    name: String,
    version: String,
    purl: Option<String>,
    artifact_path: Option<PathBuf>,
    expected_sha256: Option<String>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            purl: None,
            artifact_path: None,
            expected_sha256: None,
        }
    }

    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = Some(purl.into());
        self
    }

    pub fn with_artifact_path(mut self, path: PathBuf) -> Self {
        self.artifact_path = Some(path);
        self
    }

    pub fn with_expected_sha256(mut self, digest: impl Into<String>) -> Self {
        self.expected_sha256 = Some(digest.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Package URL, derived as `pkg:conan/<name>@<version>` when not set explicitly
    pub fn purl(&self) -> String {
        self.purl
            .clone()
            .unwrap_or_else(|| format!("pkg:conan/{}@{}", self.name, self.version))
    }

    pub fn artifact_path(&self) -> Option<&Path> {
        self.artifact_path.as_deref()
    }

    pub fn expected_sha256(&self) -> Option<&str> {
        self.expected_sha256.as_deref()
    }
}

impl Default for ModuleDescriptor {
    /// The OpenSSL package evaluated by default
    fn default() -> Self {
        Self::new("openssl", "4.0.0")
    }
}
