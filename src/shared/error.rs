use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between bad
/// invocations and failures that happened while doing the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every unit of work finished, or a batch finished with at least one output
    Success = 0,
    /// Invalid command-line arguments or configuration
    InvalidArguments = 2,
    /// Application error (scanner failure, API error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the application.
    ///
    /// Configuration problems map to [`ExitCode::InvalidArguments`]; anything
    /// else is an [`ExitCode::ApplicationError`].
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<SbomError>() {
            Some(SbomError::Configuration { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Configuration error: {message}\n\n💡 Hint: {hint}")]
    Configuration { message: String, hint: String },

    #[error("External tool '{tool}' failed\nDetails: {details}\n\n💡 Hint: {hint}")]
    ExternalTool {
        tool: String,
        details: String,
        hint: String,
    },

    #[error("{}", format_remote_api_error(repository, *status, details))]
    RemoteApi {
        repository: String,
        status: Option<u16>,
        details: String,
    },

    #[error("{}\n\n💡 Hint: Check the token permissions and the repository names listed above", format_fetch_failed(*failed, *total))]
    RemoteFetchFailed { failed: usize, total: usize },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory is writable")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl SbomError {
    /// Shorthand for building a [`SbomError::Configuration`].
    pub fn configuration(message: impl Into<String>, hint: impl Into<String>) -> Self {
        SbomError::Configuration {
            message: message.into(),
            hint: hint.into(),
        }
    }
}

fn format_fetch_failed(failed: usize, total: usize) -> String {
    match (failed, total) {
        (1, 1) => "Failed to fetch the SBOM for the requested repository".to_string(),
        (failed, total) if failed == total => {
            format!("Failed to fetch SBOMs for all {} repositories", total)
        }
        (failed, total) => format!("Failed to fetch {} of {} SBOM(s)", failed, total),
    }
}

fn format_remote_api_error(repository: &str, status: Option<u16>, details: &str) -> String {
    let summary = match status {
        Some(404) => format!(
            "SBOM not found for {}. The repository may be private, missing, or have the dependency graph disabled.",
            repository
        ),
        Some(401) | Some(403) => format!(
            "Authentication failed or insufficient permissions for {}.",
            repository
        ),
        Some(code) => format!("Failed to fetch SBOM for {}. HTTP {}", repository, code),
        None => format!("Failed to fetch SBOM for {}.", repository),
    };

    if details.is_empty() {
        summary
    } else {
        format!("{}\nDetails: {}", summary, details)
    }
}
