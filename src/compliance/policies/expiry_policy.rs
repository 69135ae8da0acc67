use chrono::{Local, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// ExpiryPolicy selecting the time zone in which "today" is evaluated
///
/// Certificate expiry dates are calendar dates without a time zone. Whether a
/// certificate expiring on the 15th is still valid at 23:30 on the 15th in
/// Tokyo depends on which calendar "today" is read from, so the choice is
/// explicit:
/// - `Utc`: today's date in UTC (default, identical on every host)
/// - `Local`: today's date in the host's local time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpiryPolicy {
    #[default]
    Utc,
    Local,
}

impl ExpiryPolicy {
    /// Today's calendar date under this policy
    pub fn today(&self) -> NaiveDate {
        match self {
            ExpiryPolicy::Utc => Utc::now().date_naive(),
            ExpiryPolicy::Local => Local::now().date_naive(),
        }
    }

    /// A certificate is expired when its expiry date is strictly before today.
    /// The expiry day itself is still valid.
    pub fn is_expired(expiry_date: NaiveDate, today: NaiveDate) -> bool {
        expiry_date < today
    }
}

impl FromStr for ExpiryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utc" => Ok(ExpiryPolicy::Utc),
            "local" => Ok(ExpiryPolicy::Local),
            _ => Err(format!(
                "Invalid expiry timezone: {}. Please specify 'utc' or 'local'",
                s
            )),
        }
    }
}

impl fmt::Display for ExpiryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryPolicy::Utc => write!(f, "utc"),
            ExpiryPolicy::Local => write!(f, "local"),
        }
    }
}
