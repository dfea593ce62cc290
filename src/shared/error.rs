use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Per-package registry failures never change the exit code; only errors
/// that abort the whole conversion do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The CSV file was written (some lookups may have failed)
    Success = 0,
    /// Application error (lockfile, config or file I/O error)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for lockfile conversion.
///
/// `LockfileNotFound`, `LockfileParseError`, `FileReadError` and
/// `FileWriteError` abort the run. `MissingField` and `InvalidPackageName`
/// are raised by registry lookups and are downgraded to per-package warnings.
#[derive(Debug, Error)]
pub enum DepsterError {
    #[error("package-lock.json file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse lockfile: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid package-lock.json")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Registry response for '{package}' is missing field '{field}'")]
    MissingField { package: String, field: String },

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },
}
