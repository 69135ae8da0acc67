/// ProgressReporter port for reporting progress during a compliance run
///
/// This is the run's only observability channel: certificate origin,
/// fallback usage, FIPS mode, algorithm confirmations and per-check
/// outcomes all flow through it.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the check sequence
    ///
    /// # Arguments
    /// * `current` - Number of checks completed
    /// * `total` - Total number of checks
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
