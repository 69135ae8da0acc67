use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

use fips_compliance::application::dto::{ComplianceRequest, OutputFormat};
use fips_compliance::compliance::domain::{ComplianceSettings, ModuleDescriptor};
use fips_compliance::compliance::policies::ExpiryPolicy;
use fips_compliance::config::{validate_sha256, ConfigFile, ModuleConfig};
use fips_compliance::shared::Result;
use std::str::FromStr;

pub const DEFAULT_REPORT_PATH: &str = "fips-compliance-report.json";
pub const DEFAULT_SBOM_PATH: &str = "openssl-fips-sbom.json";

/// Validate FIPS 140-3 compliance of a cryptographic module
#[derive(Parser, Debug)]
#[command(name = "fips-compliance")]
#[command(version)]
#[command(
    about = "Validate FIPS 140-3 compliance of a cryptographic module and emit a compliance report and SBOM",
    long_about = None
)]
pub struct Args {
    /// Format of the summary printed to stdout: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Certificate JSON document (falls back to the built-in certificate when missing)
    #[arg(short, long, env = "FIPS_CERTIFICATE_PATH")]
    pub certificate: Option<PathBuf>,

    /// Configuration file (defaults to ./fips-compliance.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Whether FIPS mode is enabled (true/false, 1/0, yes/no)
    #[arg(long, env = "OPENSSL_FIPS", value_parser = BoolishValueParser::new())]
    pub fips_mode: Option<bool>,

    /// Provider configuration file recorded in the SBOM
    #[arg(long, env = "OPENSSL_CONF", value_name = "PATH")]
    pub openssl_config: Option<PathBuf>,

    /// Fail instead of falling back to the built-in certificate
    #[arg(long)]
    pub require_certificate: bool,

    /// Algorithm declared by the module (defaults to the certificate's list).
    /// Can be specified multiple times: -a AES-GCM -a SHA-256
    #[arg(short, long = "algorithm", value_name = "NAME")]
    pub algorithms: Vec<String>,

    /// Replace the approved algorithm allowlist. Can be specified multiple times
    #[arg(long = "approved-algorithm", value_name = "NAME")]
    pub approved_algorithms: Vec<String>,

    /// Time zone in which certificate expiry is evaluated: utc or local
    #[arg(long, value_name = "ZONE")]
    pub expiry_timezone: Option<ExpiryPolicy>,

    /// Name of the evaluated module
    #[arg(long)]
    pub module_name: Option<String>,

    /// Version of the evaluated module
    #[arg(long)]
    pub module_version: Option<String>,

    /// Package URL of the evaluated module (defaults to pkg:conan/<name>@<version>)
    #[arg(long)]
    pub module_purl: Option<String>,

    /// Module artifact to verify with --module-sha256
    #[arg(long, value_name = "PATH")]
    pub module_path: Option<PathBuf>,

    /// Expected SHA-256 of the module artifact
    #[arg(long, value_name = "HEX")]
    pub module_sha256: Option<String>,

    /// Compliance report destination
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// SBOM destination
    #[arg(long, value_name = "PATH")]
    pub sbom: Option<PathBuf>,

    /// Write the summary to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Everything one run needs, after merging CLI, environment and config file
#[derive(Debug)]
pub struct RunOptions {
    pub request: ComplianceRequest,
    pub settings: ComplianceSettings,
    /// `None` keeps the default FIPS allowlist
    pub approved_algorithms: Option<Vec<String>>,
    pub expiry_policy: ExpiryPolicy,
    pub format: OutputFormat,
    pub report_path: PathBuf,
    pub sbom_path: PathBuf,
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges the arguments with an optional config file.
    ///
    /// Precedence: command line or environment, then config file, then defaults.
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<RunOptions> {
        let config = config.unwrap_or_default();
        let module_config = config.module.unwrap_or_default();

        let expiry_policy = match self.expiry_timezone {
            Some(policy) => policy,
            None => config
                .expiry_timezone
                .as_deref()
                .map(ExpiryPolicy::from_str)
                .transpose()
                .map_err(anyhow::Error::msg)?
                .unwrap_or_default(),
        };

        let format = match self.format {
            Some(format) => format,
            None => config
                .format
                .as_deref()
                .map(OutputFormat::from_str)
                .transpose()
                .map_err(anyhow::Error::msg)?
                .unwrap_or_default(),
        };

        let module = build_module(
            ModuleConfig {
                name: self.module_name.or(module_config.name),
                version: self.module_version.or(module_config.version),
                purl: self.module_purl.or(module_config.purl),
                path: self.module_path.or(module_config.path),
                sha256: self.module_sha256.or(module_config.sha256),
            },
        )?;

        let request = ComplianceRequest::new(
            self.certificate.or(config.certificate_path),
            non_empty(self.algorithms).or(config.algorithms),
            module,
            self.require_certificate || config.require_certificate.unwrap_or(false),
        );

        let settings = ComplianceSettings::new(
            self.fips_mode.or(config.fips_mode).unwrap_or(true),
            self.openssl_config.or(config.openssl_config),
        );

        Ok(RunOptions {
            request,
            settings,
            approved_algorithms: non_empty(self.approved_algorithms).or(config.approved_algorithms),
            expiry_policy,
            format,
            report_path: self
                .report
                .or(config.report_output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH)),
            sbom_path: self
                .sbom
                .or(config.sbom_output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SBOM_PATH)),
            output: self.output,
        })
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

fn build_module(module: ModuleConfig) -> Result<ModuleDescriptor> {
    let defaults = ModuleDescriptor::default();
    let mut descriptor = ModuleDescriptor::new(
        module.name.unwrap_or_else(|| defaults.name().to_string()),
        module
            .version
            .unwrap_or_else(|| defaults.version().to_string()),
    );
    if let Some(purl) = module.purl {
        descriptor = descriptor.with_purl(purl);
    }
    if let Some(path) = module.path {
        descriptor = descriptor.with_artifact_path(path);
    }
    if let Some(digest) = module.sha256 {
        validate_sha256(&digest)?;
        descriptor = descriptor.with_expected_sha256(digest.trim());
    }
    Ok(descriptor)
}
