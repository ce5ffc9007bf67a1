use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Every line is prefixed with a bracketed tool tag (`[wait-for-db]`)
/// so the output stays attributable when interleaved with other
/// container entrypoint logs. Nothing is written to stdout.
#[derive(Debug, Clone)]
pub struct StderrProgressReporter {
    tag: String,
}

impl StderrProgressReporter {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
        }
    }

    fn format_line(&self, message: &str) -> String {
        format!("[{}] {}", self.tag, message)
    }

    fn format_error_line(&self, message: &str) -> String {
        format!("[{}] ERROR: {}", self.tag, message)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", self.format_line(message));
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.format_error_line(message));
    }
}
