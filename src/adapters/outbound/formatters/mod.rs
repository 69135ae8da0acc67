/// Formatter adapters for the compliance report and SBOM artifacts
mod cyclonedx_formatter;
mod markdown_formatter;
mod report_json_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use report_json_formatter::ReportJsonFormatter;
