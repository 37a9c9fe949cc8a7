use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Violation severity as reported by Checkstyle.
///
/// Ordered from least to most severe so threshold comparisons can use `>=`.
/// Checkstyle also knows an `ignore` level, but ignored checks never appear
/// in the report, so it has no representation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// The lowercase name Checkstyle uses in its XML output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Parse a severity name from Checkstyle output. Unknown names are
    /// rejected so a corrupted report cannot silently downgrade violations.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule infraction reported by the analysis tool.
///
/// Immutable once parsed. The message text is kept verbatim - it is
/// locale-sensitive tool output that callers pattern-match against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Source file the violation was reported against.
    pub file: PathBuf,
    /// 1-based line number, when the tool reported one.
    pub line: Option<u32>,
    /// 1-based column number, when the tool reported one.
    pub column: Option<u32>,
    /// Fully qualified rule (check) name, e.g.
    /// `com.puppycrawl.tools.checkstyle.checks.naming.TypeNameCheck`.
    pub rule: String,
    pub severity: Severity,
    /// The tool's message, verbatim.
    pub message: String,
}

impl Violation {
    /// Short rule name: the last segment of the fully qualified check class.
    pub fn rule_short_name(&self) -> &str {
        self.rule.rsplit('.').next().unwrap_or(&self.rule)
    }
}
