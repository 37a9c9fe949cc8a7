use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between rule violations
/// and genuine runner failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no violations at or above the configured threshold
    Success = 0,
    /// Checkstyle ran and found violations at or above the threshold
    ViolationsFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Runner error (no matching toolchain, launch failure, unparsable report, I/O error)
    ApplicationError = 3,
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
            ExitCode::ViolationsFound => write!(f, "Violations Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Runner-specific errors.
///
/// The variants separate environment/configuration problems
/// (`ToolchainNotFound`, `InvalidConfig`) from execution problems
/// (`Launch`, `Cancelled`) and from unusable tool output
/// (`MissingReport`, `Parse`). Violations found by the tool are not an
/// error at all - they surface as a failed `TaskResult`.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("No installed JDK matches the requested toolchain ({requested}).\n\n💡 Hint: Run with --list-runtimes to see which runtimes were detected, or add the JDK to the installations manifest")]
    ToolchainNotFound { requested: String },

    #[error("Failed to launch the analysis process: {program}\nDetails: {details}\n\n💡 Hint: Check that the resolved JDK contains a 'bin/java' executable and that the tool classpath exists")]
    Launch { program: PathBuf, details: String },

    #[error("Checkstyle run for source set '{source_set}' was cancelled after {timeout_secs}s")]
    Cancelled {
        source_set: String,
        timeout_secs: u64,
    },

    #[error("Checkstyle did not write a report at: {path}\n\n💡 Hint: The tool probably crashed before producing output; re-run with --verbose to see its stderr")]
    MissingReport { path: PathBuf },

    #[error("Failed to parse Checkstyle report: {path}\nAt byte offset {offset}: {details}")]
    Parse {
        path: PathBuf,
        offset: usize,
        details: String,
    },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Check that the output directory exists and is writable")]
    ReportWrite { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
