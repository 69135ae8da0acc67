use crate::compliance::domain::{CertificateRecord, CertificateStatus, CheckOutcome};
use crate::compliance::policies::ExpiryPolicy;
use chrono::NaiveDate;

pub const REASON_STATUS_NOT_VALID: &str = "status is not valid";
pub const REASON_EXPIRED: &str = "certificate expired";

/// CertificateValidator service checking a certificate's status and expiry
///
/// Status is checked first: a revoked certificate reports
/// "status is not valid" even if it has also expired.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateValidator {
    policy: ExpiryPolicy,
}

impl CertificateValidator {
    pub fn new(policy: ExpiryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    /// Validates the record against today's date under the configured policy
    pub fn validate(&self, record: &CertificateRecord) -> CheckOutcome {
        self.validate_on(record, self.policy.today())
    }

    /// Validates the record against an explicit "today"
    pub fn validate_on(&self, record: &CertificateRecord, today: NaiveDate) -> CheckOutcome {
        if record.status() != CertificateStatus::Valid {
            return CheckOutcome::fail(REASON_STATUS_NOT_VALID);
        }

        // A validation date after the expiry date leaves no validity window at all.
        if record.has_inverted_validity_window()
            || ExpiryPolicy::is_expired(record.expiry_date(), today)
        {
            return CheckOutcome::fail(REASON_EXPIRED);
        }

        CheckOutcome::Pass
    }
}
