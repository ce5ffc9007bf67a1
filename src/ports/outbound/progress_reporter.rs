/// ProgressReporter port for user-facing status lines
///
/// This port abstracts where progress messages go (stderr in the
/// binaries, an in-memory buffer in tests).
pub trait ProgressReporter {
    /// Reports an informational progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);
}
