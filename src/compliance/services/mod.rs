mod certificate_validator;
mod sbom_generator;

pub use certificate_validator::{CertificateValidator, REASON_EXPIRED, REASON_STATUS_NOT_VALID};
pub use sbom_generator::{
    SbomGenerator, PROPERTY_FIPS_CERTIFICATE, PROPERTY_FIPS_CONFIG, PROPERTY_FIPS_ENABLED,
    PROPERTY_FIPS_MODE,
};
