use crate::compliance::domain::{CertificateRecord, CheckOutcome, ComplianceReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use chrono::SecondsFormat;

/// Markdown table header for certificate details
const CERTIFICATE_TABLE_HEADER: &str = "| Field | Value |\n";

/// Markdown table separator line for certificate details
const CERTIFICATE_TABLE_SEPARATOR: &str = "|-------|-------|\n";

/// Markdown table header for check results
const CHECK_TABLE_HEADER: &str = "| Check | Result | Details |\n";

/// Markdown table separator line for check results
const CHECK_TABLE_SEPARATOR: &str = "|-------|--------|---------|\n";

/// MarkdownFormatter adapter for a human-readable compliance summary
///
/// This adapter implements the ReportFormatter port for Markdown format,
/// combining certificate details with the per-check results.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn or_na(value: &str) -> &str {
        if value.trim().is_empty() {
            "N/A"
        } else {
            value
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &ComplianceReport) {
        output.push_str("# FIPS 140-3 Compliance Report\n\n");
        output.push_str(&format!(
            "Generated: {}\n\n",
            report.timestamp().to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
    }

    fn render_certificate(&self, output: &mut String, certificate: &CertificateRecord) {
        output.push_str("## Certificate\n\n");
        output.push_str(CERTIFICATE_TABLE_HEADER);
        output.push_str(CERTIFICATE_TABLE_SEPARATOR);

        let validation_date = certificate
            .validation_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let expiry_date = certificate.expiry_date().to_string();
        let algorithms = certificate.algorithms().join(", ");

        let rows: [(&str, &str); 9] = [
            ("Certificate Number", certificate.certificate_number()),
            ("Module", certificate.module_name()),
            ("Module Version", certificate.module_version()),
            ("Vendor", certificate.vendor()),
            ("Validation Lab", certificate.validation_lab()),
            ("Security Level", certificate.security_level()),
            ("Validation Date", &validation_date),
            ("Expiry Date", &expiry_date),
            ("Status", certificate.status().as_str()),
        ];
        for (field, value) in rows {
            output.push_str(&format!(
                "| {} | {} |\n",
                field,
                Self::escape_markdown_table_cell(Self::or_na(value))
            ));
        }
        output.push_str(&format!(
            "| Algorithms | {} |\n",
            Self::escape_markdown_table_cell(Self::or_na(&algorithms))
        ));
        output.push('\n');
    }

    fn render_checks(&self, output: &mut String, report: &ComplianceReport) {
        output.push_str("## Validation Results\n\n");
        output.push_str(CHECK_TABLE_HEADER);
        output.push_str(CHECK_TABLE_SEPARATOR);

        for (name, outcome) in report.results() {
            let (result, details) = match outcome {
                CheckOutcome::Pass => ("✅ PASS", String::new()),
                CheckOutcome::Fail(reason) => ("❌ FAIL", Self::escape_markdown_table_cell(reason)),
            };
            output.push_str(&format!("| {} | {} | {} |\n", name, result, details));
        }
        output.push('\n');
    }

    fn render_overall(&self, output: &mut String, report: &ComplianceReport) {
        output.push_str("## Overall Status\n\n");
        output.push_str(&format!("**{}**\n", report.overall_status()));

        let failed = report.failed_checks();
        if !failed.is_empty() {
            let names: Vec<&str> = failed.iter().map(|n| n.as_str()).collect();
            output.push_str(&format!("\nFailed checks: {}\n", names.join(", ")));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ComplianceReport, certificate: &CertificateRecord) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_certificate(&mut output, certificate);
        self.render_checks(&mut output, report);
        self.render_overall(&mut output, report);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::{CertificateStatus, CheckName, ComplianceCheckResult};
    use chrono::{DateTime, NaiveDate, Utc};

    fn create_test_report(algorithms: CheckOutcome) -> ComplianceReport {
        ComplianceReport::new(
            DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            "4985".to_string(),
            vec![
                ComplianceCheckResult::new(CheckName::Certificate, CheckOutcome::Pass),
                ComplianceCheckResult::new(CheckName::Module, CheckOutcome::Pass),
                ComplianceCheckResult::new(CheckName::Algorithms, algorithms),
                ComplianceCheckResult::new(CheckName::Sbom, CheckOutcome::Pass),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        let input = "Text with | pipe and\nnewline";
        let escaped = MarkdownFormatter::escape_markdown_table_cell(input);
        assert_eq!(escaped, "Text with \\| pipe and newline");
    }

    #[test]
    fn test_format_compliant_summary() {
        let markdown = MarkdownFormatter::new()
            .format(
                &create_test_report(CheckOutcome::Pass),
                &CertificateRecord::fallback(),
            )
            .unwrap();

        assert!(markdown.contains("# FIPS 140-3 Compliance Report"));
        assert!(markdown.contains("Generated: 2026-03-01T12:00:00Z"));
        assert!(markdown.contains("| Certificate Number | 4985 |"));
        assert!(markdown.contains("| Module | OpenSSL FIPS Provider |"));
        assert!(markdown.contains("| Expiry Date | 2028-01-15 |"));
        assert!(markdown.contains("| Algorithms | AES-GCM, SHA-256, RSA-2048, ECDSA-P256 |"));
        assert!(markdown.contains("| certificate | ✅ PASS |  |"));
        assert!(markdown.contains("**COMPLIANT**"));
        assert!(!markdown.contains("Failed checks"));
    }

    #[test]
    fn test_format_failure_details() {
        let markdown = MarkdownFormatter::new()
            .format(
                &create_test_report(CheckOutcome::fail("unapproved algorithms: MD5")),
                &CertificateRecord::fallback(),
            )
            .unwrap();

        assert!(markdown.contains("| algorithms | ❌ FAIL | unapproved algorithms: MD5 |"));
        assert!(markdown.contains("**NON-COMPLIANT**"));
        assert!(markdown.contains("Failed checks: algorithms"));
    }

    #[test]
    fn test_format_missing_optional_fields() {
        let certificate = CertificateRecord::new(
            "1234".to_string(),
            CertificateStatus::Revoked,
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        )
        .unwrap();

        let markdown = MarkdownFormatter::new()
            .format(&create_test_report(CheckOutcome::Pass), &certificate)
            .unwrap();

        assert!(markdown.contains("| Vendor | N/A |"));
        assert!(markdown.contains("| Validation Date | N/A |"));
        assert!(markdown.contains("| Status | revoked |"));
        assert!(markdown.contains("| Algorithms | N/A |"));
    }

    #[test]
    fn test_format_section_ordering() {
        let markdown = MarkdownFormatter::new()
            .format(
                &create_test_report(CheckOutcome::Pass),
                &CertificateRecord::fallback(),
            )
            .unwrap();

        let certificate_pos = markdown.find("## Certificate").unwrap();
        let results_pos = markdown.find("## Validation Results").unwrap();
        let overall_pos = markdown.find("## Overall Status").unwrap();
        assert!(certificate_pos < results_pos);
        assert!(results_pos < overall_pos);

        let module_row = markdown.find("| module |").unwrap();
        let sbom_row = markdown.find("| sbom |").unwrap();
        assert!(module_row < sbom_row);
    }
}
