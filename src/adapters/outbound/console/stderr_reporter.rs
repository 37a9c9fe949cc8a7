use crate::ports::outbound::ConsoleReporter;
use owo_colors::OwoColorize;

/// StderrConsoleReporter adapter - prints diagnostics to stderr
///
/// Info-level lines (the toolchain diagnostic among them) are gated behind
/// verbose mode, matching build-tool `--info` behavior. Result and error
/// lines are always printed. stdout stays reserved for report content.
pub struct StderrConsoleReporter {
    verbose: bool,
}

impl StderrConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ConsoleReporter for StderrConsoleReporter {
    fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn summary(&self, message: &str, passed: bool) {
        if passed {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{}", message.red());
        }
    }
}
