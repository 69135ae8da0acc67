/// Compliance domain - pure decision logic with no I/O
///
/// - `domain`: value objects (certificates, check outcomes, reports, SBOMs)
/// - `policies`: approved-algorithm allowlist and expiry time zone policy
/// - `services`: certificate validation and SBOM construction
pub mod domain;
pub mod policies;
pub mod services;
