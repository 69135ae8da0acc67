/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod compliance_request;
mod compliance_response;
mod output_format;

pub use compliance_request::ComplianceRequest;
pub use compliance_response::ComplianceResponse;
pub use output_format::OutputFormat;
