use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// A fully specified child-process invocation.
///
/// Built by the orchestrator from the resolved toolchain and the tool
/// configuration; the runner executes it without interpreting the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Absolute path to the executable (the resolved runtime's `java`).
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Extra environment variables for the child (locale pinning lives here).
    pub env: Vec<(String, String)>,
    pub working_dir: PathBuf,
    /// Kill the child and report cancellation when it runs longer than this.
    pub timeout: Option<Duration>,
}

/// Outcome of a completed child process.
///
/// Transient: produced by the runner, consumed immediately by the parser.
/// A nonzero exit code is a legitimate outcome here - Checkstyle exits with
/// the number of errors it found.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// ProcessRunner port for executing the external analysis tool
///
/// The returned future completes only after the child has exited and both
/// output streams are fully drained - partial reads are never surfaced.
#[async_trait]
pub trait ProcessRunner {
    /// Runs the invocation to completion.
    ///
    /// # Errors
    /// - `CheckError::Launch` when the process cannot be started (binary
    ///   missing, permission denied)
    /// - `CheckError::Cancelled` when the timeout expires; the child is
    ///   killed first and no partial result is returned
    async fn run(&self, invocation: &ToolInvocation) -> Result<ProcessResult>;
}
