pub mod report;
pub mod toolchain;
pub mod violation;

pub use report::{AnalysisReport, AnalysisStatus};
pub use toolchain::{JavaVersion, ResolvedToolchain, RuntimeMetadata, ToolchainSpec};
pub use violation::{Severity, Violation};
