use crate::ports::outbound::{ProcessResult, ProcessRunner, ToolInvocation};
use crate::shared::error::CheckError;
use crate::shared::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// TokioProcessRunner adapter - runs the tool as a real child process
///
/// Blocks the calling task until the child exits and both streams are fully
/// drained. `kill_on_drop` guarantees the child does not outlive a cancelled
/// run; on timeout the child is killed and `CheckError::Cancelled` propagates
/// instead of a partial result.
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<ProcessResult> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        for (key, value) in &invocation.env {
            command.env(key, value);
        }

        let child = command.spawn().map_err(|e| CheckError::Launch {
            program: invocation.program.clone(),
            details: e.to_string(),
        })?;

        // wait_with_output drains both pipes to EOF before returning, so a
        // result here is never built from partial reads.
        let output = match invocation.timeout {
            Some(timeout) => {
                match tokio::time::timeout(timeout, child.wait_with_output()).await {
                    Ok(result) => result,
                    Err(_elapsed) => {
                        // The Child was consumed by wait_with_output; its
                        // kill_on_drop flag reaps the process as the future
                        // is dropped here.
                        return Err(CheckError::Cancelled {
                            source_set: invocation
                                .working_dir
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_else(|| "unknown".to_string()),
                            timeout_secs: timeout.as_secs(),
                        }
                        .into());
                    }
                }
            }
            None => child.wait_with_output().await,
        }
        .map_err(|e| CheckError::Launch {
            program: invocation.program.clone(),
            details: format!("Failed to collect process output: {}", e),
        })?;

        Ok(ProcessResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
