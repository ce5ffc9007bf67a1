use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes shared by both command-line tools.
///
/// The numeric values are part of the external contract: container
/// entrypoints and CI scripts branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The operation completed (requirements pruned, database reachable)
    Success = 0,
    /// Unrecoverable error (I/O failure, signal handlers unavailable)
    Failure = 1,
    /// Missing or malformed configuration
    Misconfiguration = 2,
    /// The database did not become reachable before the deadline
    Timeout = 124,
    /// Stopped by SIGINT/SIGTERM
    Interrupted = 143,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::Misconfiguration => write!(f, "Misconfiguration (2)"),
            ExitCode::Timeout => write!(f, "Timeout (124)"),
            ExitCode::Interrupted => write!(f, "Interrupted (143)"),
        }
    }
}

/// Application-specific errors.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Missing required env: {}", .names.join(", "))]
    MissingEnv { names: Vec<String> },

    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidEnv {
        name: String,
        value: String,
        reason: String,
    },
}

impl ToolError {
    /// Exit code a binary should terminate with when this error reaches `main`
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ToolError::MissingEnv { .. } | ToolError::InvalidEnv { .. } => {
                ExitCode::Misconfiguration
            }
            ToolError::FileReadError { .. } | ToolError::FileWriteError { .. } => {
                ExitCode::Failure
            }
        }
    }
}

/// Maps an error chain to the exit code of its first typed [`ToolError`],
/// falling back to [`ExitCode::Failure`].
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ToolError>())
        .map(ToolError::exit_code)
        .unwrap_or(ExitCode::Failure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::Failure.as_i32(), 1);
        assert_eq!(ExitCode::Misconfiguration.as_i32(), 2);
        assert_eq!(ExitCode::Timeout.as_i32(), 124);
        assert_eq!(ExitCode::Interrupted.as_i32(), 143);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::Timeout), "Timeout (124)");
        assert_eq!(format!("{}", ExitCode::Interrupted), "Interrupted (143)");
    }

    #[test]
    fn test_missing_env_display_lists_all_names() {
        let error = ToolError::MissingEnv {
            names: vec!["POSTGRES_HOST".to_string(), "POSTGRES_USER".to_string()],
        };
        assert_eq!(
            format!("{}", error),
            "Missing required env: POSTGRES_HOST, POSTGRES_USER"
        );
    }

    #[test]
    fn test_invalid_env_display() {
        let error = ToolError::InvalidEnv {
            name: "WAIT_TIMEOUT".to_string(),
            value: "soon".to_string(),
            reason: "expected a number of seconds".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("WAIT_TIMEOUT"));
        assert!(display.contains("\"soon\""));
    }

    #[test]
    fn test_file_read_error_display() {
        let error = ToolError::FileReadError {
            path: PathBuf::from("/test/requirements.txt"),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/requirements.txt"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_error_exit_codes() {
        let missing = ToolError::MissingEnv { names: vec![] };
        assert_eq!(missing.exit_code(), ExitCode::Misconfiguration);

        let write = ToolError::FileWriteError {
            path: PathBuf::from("/out/requirements.txt"),
            details: "Permission denied".to_string(),
        };
        assert_eq!(write.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_exit_code_for_walks_context_chain() {
        let error = anyhow::Error::new(ToolError::MissingEnv {
            names: vec!["POSTGRES_DB".to_string()],
        })
        .context("loading configuration");
        assert_eq!(exit_code_for(&error), ExitCode::Misconfiguration);

        let untyped = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&untyped), ExitCode::Failure);
    }
}
