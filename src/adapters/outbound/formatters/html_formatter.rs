use crate::analysis::domain::{AnalysisReport, AnalysisStatus, Severity, Violation};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::path::PathBuf;

const STYLE: &str = "body { font-family: sans-serif; margin: 2em; }\n\
table { border-collapse: collapse; width: 100%; margin-bottom: 2em; }\n\
th, td { border: 1px solid #ccc; padding: 4px 8px; text-align: left; }\n\
th { background: #f0f0f0; }\n\
.severity-error { color: #b00020; font-weight: bold; }\n\
.severity-warning { color: #8a6d00; }\n\
.severity-info { color: #00538a; }\n";

/// HtmlReportFormatter adapter - the human-readable view
///
/// A self-contained static page: a summary line, then one table per source
/// file with line, severity, rule and message columns. Carries exactly the
/// same information as the XML view, and is byte-deterministic for a given
/// report (no timestamps, no generated identifiers).
pub struct HtmlReportFormatter;

impl HtmlReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape_html(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '&' => out.push_str("&amp;"),
                '"' => out.push_str("&quot;"),
                _ => out.push(c),
            }
        }
        out
    }

    fn render_summary(output: &mut String, report: &AnalysisReport) {
        let status = match report.status() {
            AnalysisStatus::Pass => "PASS",
            AnalysisStatus::Fail => "FAIL",
        };
        output.push_str(&format!(
            "<p>Result: <strong>{}</strong> &mdash; {} violation(s) ({} error, {} warning, {} info)</p>\n",
            status,
            report.violation_count(),
            report.count_at(Severity::Error),
            report.count_at(Severity::Warning),
            report.count_at(Severity::Info),
        ));
    }

    fn render_file_table(output: &mut String, file: &str, violations: &[&Violation]) {
        output.push_str(&format!("<h2>{}</h2>\n", Self::escape_html(file)));
        output.push_str("<table>\n<tr><th>Line</th><th>Severity</th><th>Rule</th><th>Message</th></tr>\n");
        for violation in violations {
            let line = violation
                .line
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "<tr><td>{}</td><td class=\"severity-{}\">{}</td><td>{}</td><td>{}</td></tr>\n",
                line,
                violation.severity,
                violation.severity,
                Self::escape_html(violation.rule_short_name()),
                Self::escape_html(&violation.message),
            ));
        }
        output.push_str("</table>\n");
    }
}

impl Default for HtmlReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlReportFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        output.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n<title>Checkstyle report</title>\n");
        output.push_str(&format!("<style>\n{}</style>\n", STYLE));
        output.push_str("</head>\n<body>\n<h1>Checkstyle report</h1>\n");

        Self::render_summary(&mut output, report);

        if report.is_empty() {
            output.push_str("<p>No violations were found.</p>\n");
        } else {
            // One table per contiguous file group, preserving document order.
            let mut current_file: Option<&PathBuf> = None;
            let mut pending: Vec<&Violation> = Vec::new();
            for violation in report.violations() {
                if current_file != Some(&violation.file) {
                    if let Some(file) = current_file {
                        Self::render_file_table(
                            &mut output,
                            &file.display().to_string(),
                            &pending,
                        );
                        pending.clear();
                    }
                    current_file = Some(&violation.file);
                }
                pending.push(violation);
            }
            if let Some(file) = current_file {
                Self::render_file_table(&mut output, &file.display().to_string(), &pending);
            }
        }

        output.push_str("</body>\n</html>\n");
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(file: &str, line: u32, severity: Severity, message: &str) -> Violation {
        Violation {
            file: PathBuf::from(file),
            line: Some(line),
            column: None,
            rule: "com.puppycrawl.tools.checkstyle.checks.naming.TypeNameCheck".to_string(),
            severity,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            HtmlReportFormatter::escape_html("<b>&\"</b>"),
            "&lt;b&gt;&amp;&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_report_has_no_tables() {
        let report = AnalysisReport::new(vec![], Severity::Error);
        let html = HtmlReportFormatter::new().format(&report).unwrap();
        assert!(html.contains("No violations were found."));
        assert!(html.contains("<strong>PASS</strong>"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_report_contains_all_violation_fields() {
        let report = AnalysisReport::new(
            vec![violation(
                "/work/src/main/java/org/gradle/class1.java",
                1,
                Severity::Error,
                "Name 'class1' must match pattern '^[A-Z][a-zA-Z0-9]*$'.",
            )],
            Severity::Error,
        );
        let html = HtmlReportFormatter::new().format(&report).unwrap();
        assert!(html.contains("org/gradle/class1.java"));
        assert!(html.contains("TypeNameCheck"));
        assert!(html.contains("must match pattern"));
        assert!(html.contains("severity-error"));
        assert!(html.contains("<strong>FAIL</strong>"));
    }

    #[test]
    fn test_one_table_per_file_in_order() {
        let report = AnalysisReport::new(
            vec![
                violation("/b/Second.java", 3, Severity::Warning, "w"),
                violation("/b/Second.java", 9, Severity::Error, "e"),
                violation("/a/First.java", 1, Severity::Error, "e2"),
            ],
            Severity::Error,
        );
        let html = HtmlReportFormatter::new().format(&report).unwrap();
        assert_eq!(html.matches("<table>").count(), 2);
        let second_pos = html.find("/b/Second.java").unwrap();
        let first_pos = html.find("/a/First.java").unwrap();
        // Document order, not path order.
        assert!(second_pos < first_pos);
    }

    #[test]
    fn test_summary_counts() {
        let report = AnalysisReport::new(
            vec![
                violation("/a/A.java", 1, Severity::Error, "e"),
                violation("/a/A.java", 2, Severity::Warning, "w"),
                violation("/a/A.java", 3, Severity::Warning, "w2"),
            ],
            Severity::Error,
        );
        let html = HtmlReportFormatter::new().format(&report).unwrap();
        assert!(html.contains("3 violation(s) (1 error, 2 warning, 0 info)"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let report = AnalysisReport::new(
            vec![violation("/a/A.java", 1, Severity::Error, "e")],
            Severity::Error,
        );
        let formatter = HtmlReportFormatter::new();
        assert_eq!(
            formatter.format(&report).unwrap(),
            formatter.format(&report).unwrap()
        );
    }
}
