use crate::analysis::domain::violation::{Severity, Violation};

/// Overall outcome of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Pass,
    Fail,
}

/// Normalized report for a single analysis run.
///
/// Violation ordering mirrors the raw tool output exactly (file order, then
/// in-file order) - callers depend on this for diffable reports. Reports are
/// created fresh per run and never merged across runs.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    violations: Vec<Violation>,
    threshold: Severity,
}

impl AnalysisReport {
    /// Build a report from violations in tool-output order.
    ///
    /// `threshold` is the severity at or above which the run fails.
    pub fn new(violations: Vec<Violation>, threshold: Severity) -> Self {
        Self {
            violations,
            threshold,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Pass iff no violation reaches the threshold.
    pub fn status(&self) -> AnalysisStatus {
        if self
            .violations
            .iter()
            .any(|v| v.severity >= self.threshold)
        {
            AnalysisStatus::Fail
        } else {
            AnalysisStatus::Pass
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn count_at(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// The first violation in tool-output order, used as the representative
    /// diagnostic on the fail path.
    pub fn first_violation(&self) -> Option<&Violation> {
        self.violations.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn violation(severity: Severity, message: &str) -> Violation {
        Violation {
            file: PathBuf::from("src/main/java/org/gradle/class1.java"),
            line: Some(1),
            column: None,
            rule: "com.puppycrawl.tools.checkstyle.checks.naming.TypeNameCheck".to_string(),
            severity,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_empty_report_passes() {
        let report = AnalysisReport::new(vec![], Severity::Error);
        assert_eq!(report.status(), AnalysisStatus::Pass);
        assert!(report.is_empty());
    }

    #[test]
    fn test_error_violation_fails_default_threshold() {
        let report = AnalysisReport::new(vec![violation(Severity::Error, "bad")], Severity::Error);
        assert_eq!(report.status(), AnalysisStatus::Fail);
    }

    #[test]
    fn test_warning_below_error_threshold_passes() {
        let report = AnalysisReport::new(
            vec![violation(Severity::Warning, "meh")],
            Severity::Error,
        );
        assert_eq!(report.status(), AnalysisStatus::Pass);
        assert_eq!(report.violation_count(), 1);
    }

    #[test]
    fn test_warning_threshold_fails_on_warning() {
        let report = AnalysisReport::new(
            vec![violation(Severity::Warning, "meh")],
            Severity::Warning,
        );
        assert_eq!(report.status(), AnalysisStatus::Fail);
    }

    #[test]
    fn test_first_violation_preserves_tool_order() {
        let report = AnalysisReport::new(
            vec![
                violation(Severity::Warning, "first"),
                violation(Severity::Error, "second"),
            ],
            Severity::Error,
        );
        assert_eq!(report.first_violation().unwrap().message, "first");
    }

    #[test]
    fn test_count_at_severity() {
        let report = AnalysisReport::new(
            vec![
                violation(Severity::Warning, "a"),
                violation(Severity::Error, "b"),
                violation(Severity::Error, "c"),
            ],
            Severity::Error,
        );
        assert_eq!(report.count_at(Severity::Error), 2);
        assert_eq!(report.count_at(Severity::Warning), 1);
        assert_eq!(report.count_at(Severity::Info), 0);
    }
}
