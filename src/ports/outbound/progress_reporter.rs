/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts the terminal display (stderr) so use cases can be
/// exercised in tests with a capturing implementation.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports batch progress
    ///
    /// # Arguments
    /// * `current` - Number of entries processed so far
    /// * `total` - Total number of entries
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a problem that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports an error
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
