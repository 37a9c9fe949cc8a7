use crate::analysis::domain::{Severity, ToolchainSpec};
use std::path::PathBuf;
use std::time::Duration;

/// One analyzed unit: an identifier plus the source roots it covers.
///
/// The identifier names the report files (`<outputDir>/<id>.xml` / `.html`)
/// and the build-style task (`checkstyleMain` for id `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    pub id: String,
    pub roots: Vec<PathBuf>,
}

impl SourceSet {
    pub fn new(id: impl Into<String>, roots: Vec<PathBuf>) -> Self {
        Self {
            id: id.into(),
            roots,
        }
    }

    /// Build-style task name: `checkstyle` + capitalized id.
    pub fn task_name(&self) -> String {
        Self::task_name_of(&self.id)
    }

    pub fn task_name_of(id: &str) -> String {
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => format!("checkstyle{}{}", first.to_uppercase(), chars.as_str()),
            None => "checkstyle".to_string(),
        }
    }
}

/// CheckRequest - everything one run needs, assembled from CLI + config file.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Project directory; the child process working directory.
    pub project_dir: PathBuf,
    pub source_sets: Vec<SourceSet>,
    pub toolchain: ToolchainSpec,
    /// The Checkstyle rule configuration (`checkstyle.xml`).
    pub config_file: PathBuf,
    pub suppressions_file: Option<PathBuf>,
    /// Jars forming the tool's classpath.
    pub tool_classpath: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub severity_threshold: Severity,
    /// Per-target wall-clock limit; `None` means no limit.
    pub timeout: Option<Duration>,
}
