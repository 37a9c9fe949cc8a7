/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application core uses to reach
/// external systems (installed runtimes, child processes, the filesystem,
/// the console).
pub mod console_reporter;
pub mod process_runner;
pub mod report_formatter;
pub mod report_writer;
pub mod runtime_inventory;

pub use console_reporter::ConsoleReporter;
pub use process_runner::{ProcessRunner, ProcessResult, ToolInvocation};
pub use report_formatter::ReportFormatter;
pub use report_writer::ReportWriter;
pub use runtime_inventory::RuntimeInventory;
