//! Configuration file support for fips-compliance.
//!
//! Provides YAML-based configuration through `fips-compliance.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::compliance::policies::ExpiryPolicy;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "fips-compliance.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub certificate_path: Option<PathBuf>,
    pub fips_mode: Option<bool>,
    /// Provider configuration recorded in the SBOM (e.g. an OpenSSL `fips.cnf`)
    pub openssl_config: Option<PathBuf>,
    pub require_certificate: Option<bool>,
    pub approved_algorithms: Option<Vec<String>>,
    /// Declared algorithms; the certificate's own list is used when absent
    pub algorithms: Option<Vec<String>>,
    pub expiry_timezone: Option<String>,
    pub module: Option<ModuleConfig>,
    pub report_output: Option<PathBuf>,
    pub sbom_output: Option<PathBuf>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The module under evaluation.
#[derive(Debug, Deserialize, Default)]
pub struct ModuleConfig {
    pub name: Option<String>,
    pub version: Option<String>,
    pub purl: Option<String>,
    pub path: Option<PathBuf>,
    pub sha256: Option<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<(PathBuf, ConfigFile)>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some((config_path, config)))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, algorithms) in [
        ("approved_algorithms", &config.approved_algorithms),
        ("algorithms", &config.algorithms),
    ] {
        if let Some(algorithms) = algorithms {
            for (i, algorithm) in algorithms.iter().enumerate() {
                if algorithm.trim().is_empty() {
                    bail!(
                        "Invalid config: {}[{}] must not be empty.\n\n\
                         💡 Hint: Use algorithm identifiers such as \"AES-GCM\" or \"SHA-256\".",
                        field,
                        i
                    );
                }
            }
        }
    }

    if let Some(ref timezone) = config.expiry_timezone {
        if let Err(e) = ExpiryPolicy::from_str(timezone) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref digest) = config.module.as_ref().and_then(|m| m.sha256.as_ref()) {
        validate_sha256(digest)?;
    }

    Ok(())
}

/// A SHA-256 digest is 64 hexadecimal characters, in either case.
pub fn validate_sha256(digest: &str) -> Result<()> {
    let digest = digest.trim();
    if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!(
            "Invalid SHA-256 digest: '{}'.\n\n\
             💡 Hint: Expected 64 hexadecimal characters.",
            digest
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
