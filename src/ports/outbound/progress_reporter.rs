/// ProgressReporter port for reporting progress during an audit
///
/// This port abstracts progress reporting (e.g., to stderr) so the use
/// cases can narrate namespace iteration and per-item problems without
/// knowing where the messages go.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress across the namespace iteration
    ///
    /// # Arguments
    /// * `current` - 1-based index of the namespace being audited
    /// * `total` - Total number of namespaces
    /// * `message` - Optional context, typically the namespace name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem (degraded item, skipped namespace)
    fn report_error(&self, message: &str);
}
