/// ConsoleReporter port for user-facing diagnostics
///
/// Console text is part of this tool's contract: the toolchain line and the
/// task-failure line have exact forms that callers assert on, so they go
/// through this port rather than ad-hoc eprintln calls.
pub trait ConsoleReporter {
    /// Reports an informational line (shown only in verbose mode).
    fn info(&self, message: &str);

    /// Reports an error or failure line.
    fn report_error(&self, message: &str);

    /// Reports the end-of-run summary line.
    fn summary(&self, message: &str, passed: bool);
}
