use crate::analysis::domain::{AnalysisReport, AnalysisStatus};
use crate::shared::ExitCode;
use std::path::PathBuf;

/// Overall task status across all analyzed source sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Passed,
    Failed,
}

/// Per-source-set outcome: the parsed report plus where its rendered views
/// were written. Both rendered paths are always populated - reports are
/// produced on the fail path too.
#[derive(Debug, Clone)]
pub struct TargetReport {
    pub source_set: String,
    pub report: AnalysisReport,
    pub xml_path: PathBuf,
    pub html_path: PathBuf,
}

impl TargetReport {
    pub fn status(&self) -> AnalysisStatus {
        self.report.status()
    }
}

/// TaskResult - outcome of one orchestrated run.
///
/// `diagnostics` holds the user-facing failure lines in emission order:
/// the task-failure line and the representative violation message, verbatim.
/// Full detail lives in the rendered reports, not here.
#[derive(Debug, Clone)]
pub struct TaskResult {
    pub status: TaskStatus,
    pub targets: Vec<TargetReport>,
    pub diagnostics: Vec<String>,
}

impl TaskResult {
    pub fn passed(&self) -> bool {
        self.status == TaskStatus::Passed
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.status {
            TaskStatus::Passed => ExitCode::Success,
            TaskStatus::Failed => ExitCode::ViolationsFound,
        }
    }

    pub fn total_violations(&self) -> usize {
        self.targets.iter().map(|t| t.report.violation_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::Severity;

    #[test]
    fn test_exit_code_mapping() {
        let passed = TaskResult {
            status: TaskStatus::Passed,
            targets: vec![],
            diagnostics: vec![],
        };
        assert_eq!(passed.exit_code(), ExitCode::Success);
        assert!(passed.passed());

        let failed = TaskResult {
            status: TaskStatus::Failed,
            targets: vec![],
            diagnostics: vec![],
        };
        assert_eq!(failed.exit_code(), ExitCode::ViolationsFound);
        assert!(!failed.passed());
    }

    #[test]
    fn test_total_violations_sums_targets() {
        let report = AnalysisReport::new(vec![], Severity::Error);
        let result = TaskResult {
            status: TaskStatus::Passed,
            targets: vec![
                TargetReport {
                    source_set: "main".to_string(),
                    report: report.clone(),
                    xml_path: PathBuf::from("out/main.xml"),
                    html_path: PathBuf::from("out/main.html"),
                },
                TargetReport {
                    source_set: "test".to_string(),
                    report,
                    xml_path: PathBuf::from("out/test.xml"),
                    html_path: PathBuf::from("out/test.html"),
                },
            ],
            diagnostics: vec![],
        };
        assert_eq!(result.total_violations(), 0);
    }
}
