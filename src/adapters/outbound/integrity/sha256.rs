use crate::compliance::domain::ModuleDescriptor;
use crate::ports::outbound::IntegrityChecker;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use anyhow::{bail, Context};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUFFER_SIZE: usize = 64 * 1024;

/// Sha256IntegrityChecker adapter comparing the module artifact against a known digest
///
/// Both the artifact path and the expected SHA-256 must be present on the
/// [`ModuleDescriptor`]. The expected digest is matched case-insensitively.
pub struct Sha256IntegrityChecker;

impl Sha256IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    /// Streams the file through SHA-256 and returns the lowercase hex digest
    pub fn digest_file(path: &Path) -> Result<String> {
        validate_regular_file(path, "module artifact")?;

        let mut file =
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; BUFFER_SIZE];
        loop {
            let n = file
                .read(&mut buf)
                .with_context(|| format!("cannot read {}", path.display()))?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(hex::encode(hasher.finalize()))
    }
}

impl Default for Sha256IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegrityChecker for Sha256IntegrityChecker {
    fn check_integrity(&self, module: &ModuleDescriptor) -> Result<()> {
        let Some(path) = module.artifact_path() else {
            bail!("no artifact path configured for module {}", module.name());
        };
        let Some(expected) = module.expected_sha256() else {
            bail!("no expected SHA-256 configured for module {}", module.name());
        };

        let actual = Self::digest_file(path).context("integrity check failed")?;
        if !actual.eq_ignore_ascii_case(expected.trim()) {
            bail!(
                "integrity check failed: SHA-256 mismatch for {} (expected {}, got {})",
                path.display(),
                expected.trim(),
                actual
            );
        }
        Ok(())
    }
}
