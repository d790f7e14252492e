/// ProgressReporter port for reporting progress during operations
///
/// Progress goes to a side channel (stderr for the CLI) so that the
/// report itself can be piped.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a batch of submissions
    ///
    /// # Arguments
    /// * `current` - Number of submissions processed so far
    /// * `total` - Number of submissions in the batch
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
