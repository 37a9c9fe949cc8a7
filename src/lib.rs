//! checkstyle-runner - toolchain-aware Checkstyle task runner
//!
//! This library runs Checkstyle against Java source sets under a resolved
//! JDK toolchain, parses the tool's XML output into a normalized violation
//! model and renders deterministic XML and HTML reports, following hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Analysis Core** (`analysis`): Violation/report/toolchain models and
//!   pure services (toolchain resolution, report parsing)
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use checkstyle_runner::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let inventory = FileSystemInventory::new(None, vec![PathBuf::from("/usr/lib/jvm")]);
//! let runner = TokioProcessRunner::new();
//! let writer = FileReportWriter::new();
//! let console = StderrConsoleReporter::new(false);
//!
//! // Create use case
//! let use_case = RunCheckUseCase::new(inventory, runner, writer, console);
//!
//! // Execute
//! let request = CheckRequest {
//!     project_dir: PathBuf::from("."),
//!     source_sets: vec![SourceSet::new("main", vec![PathBuf::from("src/main/java")])],
//!     toolchain: ToolchainSpec::for_version(17),
//!     config_file: PathBuf::from("config/checkstyle/checkstyle.xml"),
//!     suppressions_file: None,
//!     tool_classpath: vec![PathBuf::from("libs/checkstyle-all.jar")],
//!     output_dir: PathBuf::from("build/reports/checkstyle"),
//!     severity_threshold: Severity::Error,
//!     timeout: None,
//! };
//! let runtime = tokio::runtime::Runtime::new()?;
//! let result = runtime.block_on(use_case.execute(request))?;
//! println!("{}", result.exit_code());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod analysis;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrConsoleReporter;
    pub use crate::adapters::outbound::filesystem::FileReportWriter;
    pub use crate::adapters::outbound::formatters::{HtmlReportFormatter, XmlReportFormatter};
    pub use crate::adapters::outbound::process::{CheckstyleCommand, TokioProcessRunner};
    pub use crate::adapters::outbound::toolchain::FileSystemInventory;
    pub use crate::analysis::domain::{
        AnalysisReport, AnalysisStatus, JavaVersion, ResolvedToolchain, RuntimeMetadata, Severity,
        ToolchainSpec, Violation,
    };
    pub use crate::analysis::services::{ToolchainResolver, ViolationParser};
    pub use crate::application::dto::{CheckRequest, SourceSet, TargetReport, TaskResult, TaskStatus};
    pub use crate::application::factories::{FormatterFactory, ReportFormat};
    pub use crate::application::use_cases::RunCheckUseCase;
    pub use crate::ports::outbound::{
        ConsoleReporter, ProcessResult, ProcessRunner, ReportFormatter, ReportWriter,
        RuntimeInventory, ToolInvocation,
    };
    pub use crate::shared::{CheckError, ExitCode, Result};
}
