use crate::application::dto::{ComplianceRequest, ComplianceResponse};
use crate::compliance::domain::{
    CertificateRecord, CheckName, CheckOutcome, ComplianceReport, ComplianceSettings,
    ModuleDescriptor, SbomDocument,
};
use crate::compliance::policies::AlgorithmRegistry;
use crate::compliance::services::{CertificateValidator, SbomGenerator};
use crate::ports::outbound::{
    CertificateOrigin, CertificateSource, IntegrityChecker, LoadedCertificate, ProgressReporter,
};
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use chrono::Utc;

/// Report of one run together with the SBOM it produced, if any
///
/// Used to simplify complex return types and satisfy clippy::type_complexity
type RunOutcome = (ComplianceReport, Option<SbomDocument>);

/// RunComplianceUseCase - Compliance orchestrator
///
/// Runs the certificate, module, algorithms and sbom checks in that order.
/// Every check yields a [`CheckOutcome`]; errors raised inside a check are
/// converted to FAIL at the check boundary, so one failing check never stops
/// the others and the report always holds exactly one result per check.
///
/// # Type Parameters
/// * `CS` - CertificateSource implementation
/// * `IC` - IntegrityChecker implementation
/// * `PR` - ProgressReporter implementation
pub struct RunComplianceUseCase<CS, IC, PR> {
    certificate_source: CS,
    integrity_checker: IC,
    progress_reporter: PR,
    registry: AlgorithmRegistry,
    validator: CertificateValidator,
    settings: ComplianceSettings,
}

impl<CS, IC, PR> RunComplianceUseCase<CS, IC, PR>
where
    CS: CertificateSource,
    IC: IntegrityChecker,
    PR: ProgressReporter,
{
    /// Creates a new RunComplianceUseCase with injected dependencies
    pub fn new(
        certificate_source: CS,
        integrity_checker: IC,
        progress_reporter: PR,
        registry: AlgorithmRegistry,
        validator: CertificateValidator,
        settings: ComplianceSettings,
    ) -> Self {
        Self {
            certificate_source,
            integrity_checker,
            progress_reporter,
            registry,
            validator,
            settings,
        }
    }

    /// Executes a full compliance run
    ///
    /// # Returns
    /// ComplianceResponse holding the report, the evaluated certificate and
    /// its origin, and the SBOM when the `sbom` check passed
    ///
    /// # Errors
    /// Only setup errors propagate: a certificate that exists but cannot be
    /// read or parsed, or fallback usage when a certificate is required.
    /// A non-compliant module is a normal `Ok` response.
    pub fn execute(&self, request: ComplianceRequest) -> Result<ComplianceResponse> {
        // Step 1: Resolve the certificate
        let loaded = self.load_certificate(&request)?;

        // Step 2: Announce the FIPS mode this run is evaluated under
        self.report_settings();

        // Step 3: Run every check
        let declared = request
            .declared_algorithms
            .clone()
            .unwrap_or_else(|| loaded.record.algorithms().to_vec());
        let (report, sbom) = self.run(&loaded.record, &declared, &request.module);

        self.progress_reporter.report_completion(&format!(
            "Compliance status: {}",
            report.overall_status()
        ));

        Ok(ComplianceResponse::new(
            report,
            loaded.record,
            loaded.origin,
            sbom,
        ))
    }

    /// Runs all checks against an already loaded certificate
    ///
    /// Never fails. Each check runs exactly once.
    pub fn run(
        &self,
        record: &CertificateRecord,
        declared_algorithms: &[String],
        module: &ModuleDescriptor,
    ) -> RunOutcome {
        let certificate =
            self.record_outcome(CheckName::Certificate, self.validator.validate(record));

        let module_outcome =
            CheckOutcome::from_result(self.integrity_checker.check_integrity(module));
        let module_outcome = self.record_outcome(CheckName::Module, module_outcome);

        let algorithms = self.record_outcome(
            CheckName::Algorithms,
            self.check_algorithms(declared_algorithms),
        );

        let (outcome, sbom) = match SbomGenerator::generate(record, module, &self.settings) {
            Ok(sbom) => (CheckOutcome::Pass, Some(sbom)),
            Err(e) => (CheckOutcome::from_result(Err(e)), None),
        };
        let sbom_outcome = self.record_outcome(CheckName::Sbom, outcome);

        let report = ComplianceReport::from_outcomes(
            Utc::now(),
            record.certificate_number().to_string(),
            [certificate, module_outcome, algorithms, sbom_outcome],
        );
        (report, sbom)
    }

    fn load_certificate(&self, request: &ComplianceRequest) -> Result<LoadedCertificate> {
        match &request.certificate_path {
            Some(path) => self.progress_reporter.report(&format!(
                "📖 Loading certificate from: {}",
                path.display()
            )),
            None => self
                .progress_reporter
                .report("📖 No certificate path configured"),
        }

        let loaded = self
            .certificate_source
            .load_certificate(request.certificate_path.as_deref())?;

        match &loaded.origin {
            CertificateOrigin::File(path) => {
                self.progress_reporter.report(&format!(
                    "✅ Loaded certificate #{} from {}",
                    loaded.record.certificate_number(),
                    path.display()
                ));
            }
            CertificateOrigin::Fallback { requested } => {
                if request.require_certificate {
                    return Err(ComplianceError::FallbackRejected {
                        path: requested.clone().unwrap_or_default(),
                    }
                    .into());
                }
                let location = requested
                    .as_ref()
                    .map(|p| format!(" at {}", p.display()))
                    .unwrap_or_default();
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: No certificate found{}. Using built-in certificate #{}.",
                    location,
                    loaded.record.certificate_number()
                ));
            }
        }

        Ok(loaded)
    }

    fn report_settings(&self) {
        let state = if self.settings.fips_mode_enabled() {
            "enabled"
        } else {
            "disabled"
        };
        self.progress_reporter
            .report(&format!("🔐 FIPS mode: {}", state));
        if let Some(config_path) = self.settings.config_path() {
            self.progress_reporter.report(&format!(
                "   Provider configuration: {}",
                config_path.display()
            ));
        }
    }

    fn check_algorithms(&self, declared: &[String]) -> CheckOutcome {
        let assessment = self.registry.assess(declared);
        for algorithm in assessment.approved() {
            self.progress_reporter
                .report(&format!("   ✓ Approved algorithm: {}", algorithm));
        }
        assessment.outcome()
    }

    fn record_outcome(&self, name: CheckName, outcome: CheckOutcome) -> CheckOutcome {
        match &outcome {
            CheckOutcome::Pass => self
                .progress_reporter
                .report(&format!("   ✅ {}: PASS", name)),
            CheckOutcome::Fail(reason) => self
                .progress_reporter
                .report_error(&format!("   ❌ {}: FAIL: {}", name, reason)),
        }
        // Variants are declared in execution order
        self.progress_reporter.report_progress(
            name as usize + 1,
            CheckName::ALL.len(),
            Some(name.as_str()),
        );
        outcome
    }
}
