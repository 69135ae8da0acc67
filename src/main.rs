mod cli;

use cli::{Args, RunOptions};
use fips_compliance::adapters::outbound::console::StderrProgressReporter;
use fips_compliance::adapters::outbound::filesystem::{
    FileSystemArtifactWriter, FileSystemCertificateSource,
};
use fips_compliance::application::dto::ComplianceResponse;
use fips_compliance::application::factories::{
    FormatterFactory, IntegrityCheckerFactory, PresenterFactory, PresenterType,
};
use fips_compliance::application::use_cases::RunComplianceUseCase;
use fips_compliance::compliance::policies::AlgorithmRegistry;
use fips_compliance::compliance::services::CertificateValidator;
use fips_compliance::config::{discover_config, load_config_from_path, ConfigFile};
use fips_compliance::ports::outbound::ArtifactWriter;
use fips_compliance::shared::error::ExitCode;
use fips_compliance::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::NonCompliant.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let mut args = Args::parse_args();

    // Load the config file, explicit or discovered
    let config = load_config(args.config.take())?;
    let options = args.resolve(config)?;

    // Create adapters (Dependency Injection)
    let registry = match &options.approved_algorithms {
        Some(approved) => AlgorithmRegistry::new(approved.iter().cloned())?,
        None => AlgorithmRegistry::fips_default(),
    };
    let use_case = RunComplianceUseCase::new(
        FileSystemCertificateSource::new(),
        IntegrityCheckerFactory::create(&options.request.module),
        StderrProgressReporter::new(),
        registry,
        CertificateValidator::new(options.expiry_policy),
        options.settings.clone(),
    );

    // Execute use case
    let response = use_case.execute(options.request.clone())?;

    write_artifacts(&response, &options)?;
    present_summary(&response, &options)?;

    if response.report.is_compliant() {
        Ok(ExitCode::Compliant)
    } else {
        Ok(ExitCode::NonCompliant)
    }
}

fn load_config(explicit: Option<std::path::PathBuf>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => {
            eprintln!("⚙️  Using config file: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            let found = discover_config(Path::new("."))?;
            Ok(found.map(|(path, config)| {
                eprintln!("⚙️  Using config file: {}", path.display());
                config
            }))
        }
    }
}

fn write_artifacts(response: &ComplianceResponse, options: &RunOptions) -> Result<()> {
    let writer = FileSystemArtifactWriter::new();

    writer.write_report(&response.report, &options.report_path)?;
    eprintln!(
        "💾 Compliance report written to: {}",
        options.report_path.display()
    );

    match &response.sbom {
        Some(sbom) => {
            writer.write_sbom(sbom, &options.sbom_path)?;
            eprintln!("💾 SBOM written to: {}", options.sbom_path.display());
        }
        None => eprintln!("⚠️  Warning: SBOM was not generated; see the sbom check result."),
    }

    Ok(())
}

fn present_summary(response: &ComplianceResponse, options: &RunOptions) -> Result<()> {
    eprintln!("{}", FormatterFactory::progress_message(options.format));

    let formatter = FormatterFactory::create(options.format);
    let formatted_output = formatter.format(&response.report, &response.certificate)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(options.output.clone()));
    presenter.present(&formatted_output)
}
