use crate::compliance::domain::{
    CertificateRecord, ComplianceSettings, ModuleDescriptor, SbomComponent, SbomDocument,
    SbomProperty,
};
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const PROPERTY_FIPS_ENABLED: &str = "fips:enabled";
pub const PROPERTY_FIPS_CERTIFICATE: &str = "fips:certificate";
pub const PROPERTY_FIPS_CONFIG: &str = "fips:config";
pub const PROPERTY_FIPS_MODE: &str = "fips:mode";

/// SbomGenerator service building the FIPS-annotated SBOM for the evaluated module
///
/// This service only constructs the document; persisting it is the
/// artifact writer's job. `fips:enabled` marks the component as a FIPS
/// module and is always `true`; the runtime FIPS-mode flag is recorded
/// separately as `fips:mode`.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates an SBOM stamped with the current UTC time and a fresh serial number
    ///
    /// # Errors
    /// Returns an error if the module name or version, or the certificate
    /// number, is empty
    pub fn generate(
        record: &CertificateRecord,
        module: &ModuleDescriptor,
        settings: &ComplianceSettings,
    ) -> Result<SbomDocument> {
        Self::generate_at(record, module, settings, Utc::now())
    }

    /// Same as [`SbomGenerator::generate`] with an explicit timestamp.
    /// Apart from the serial number, the output is fully determined by the inputs.
    pub fn generate_at(
        record: &CertificateRecord,
        module: &ModuleDescriptor,
        settings: &ComplianceSettings,
        timestamp: DateTime<Utc>,
    ) -> Result<SbomDocument> {
        Self::require_non_empty("module name", module.name())?;
        Self::require_non_empty("module version", module.version())?;
        Self::require_non_empty("certificate number", record.certificate_number())?;

        let mut properties = vec![
            SbomProperty::new(PROPERTY_FIPS_ENABLED, "true"),
            SbomProperty::new(PROPERTY_FIPS_CERTIFICATE, record.certificate_number()),
            SbomProperty::new(
                PROPERTY_FIPS_MODE,
                if settings.fips_mode_enabled() {
                    "enabled"
                } else {
                    "disabled"
                },
            ),
        ];
        if let Some(config_path) = settings.config_path() {
            properties.push(SbomProperty::new(
                PROPERTY_FIPS_CONFIG,
                config_path.display().to_string(),
            ));
        }

        let component = SbomComponent::new(
            module.name().to_string(),
            module.version().to_string(),
            module.purl(),
            properties,
        );

        Ok(SbomDocument::new(
            format!("urn:uuid:{}", Uuid::new_v4()),
            timestamp,
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            component,
        ))
    }

    fn require_non_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ComplianceError::Validation {
                message: format!("cannot generate SBOM: {} is empty", field),
            }
            .into());
        }
        Ok(())
    }
}
