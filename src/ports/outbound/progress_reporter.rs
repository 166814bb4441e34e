/// ProgressReporter port for user-facing status messages
///
/// Messages go to stderr in the console adapter so that stdout carries
/// only the generated output.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through a batch, e.g. dump files read so far
    ///
    /// # Arguments
    /// * `current` - Items processed
    /// * `total` - Items expected
    /// * `message` - Optional label for the current item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a skipped input
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
