use crate::analysis::domain::{AnalysisReport, Violation};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::path::PathBuf;

/// XmlReportFormatter adapter - the structured, machine-readable view
///
/// Emits the Checkstyle XML shape so existing report consumers (CI plugins,
/// diff tools) work unchanged. Output is assembled in violation order and is
/// byte-deterministic for a given report.
pub struct XmlReportFormatter;

impl XmlReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes the five XML-significant characters for attribute values.
    fn escape_xml(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '&' => out.push_str("&amp;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&apos;"),
                _ => out.push(c),
            }
        }
        out
    }

    fn render_violation(output: &mut String, violation: &Violation) {
        output.push_str("<error");
        if let Some(line) = violation.line {
            output.push_str(&format!(" line=\"{}\"", line));
        }
        if let Some(column) = violation.column {
            output.push_str(&format!(" column=\"{}\"", column));
        }
        output.push_str(&format!(
            " severity=\"{}\" message=\"{}\" source=\"{}\"/>\n",
            violation.severity,
            Self::escape_xml(&violation.message),
            Self::escape_xml(&violation.rule),
        ));
    }
}

impl Default for XmlReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for XmlReportFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        output.push_str("<checkstyle>\n");

        // Group contiguous runs into <file> elements, preserving document order.
        let mut current_file: Option<&PathBuf> = None;
        for violation in report.violations() {
            if current_file != Some(&violation.file) {
                if current_file.is_some() {
                    output.push_str("</file>\n");
                }
                output.push_str(&format!(
                    "<file name=\"{}\">\n",
                    Self::escape_xml(&violation.file.display().to_string())
                ));
                current_file = Some(&violation.file);
            }
            Self::render_violation(&mut output, violation);
        }
        if current_file.is_some() {
            output.push_str("</file>\n");
        }

        output.push_str("</checkstyle>\n");
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "xml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::Severity;
    use crate::analysis::services::ViolationParser;
    use std::path::Path;

    fn sample_report() -> AnalysisReport {
        let violations = vec![
            Violation {
                file: PathBuf::from("/work/src/main/java/org/gradle/class1.java"),
                line: Some(1),
                column: Some(14),
                rule: "com.puppycrawl.tools.checkstyle.checks.naming.TypeNameCheck".to_string(),
                severity: Severity::Error,
                message: "Name 'class1' must match pattern '^[A-Z][a-zA-Z0-9]*$'.".to_string(),
            },
            Violation {
                file: PathBuf::from("/work/src/main/java/org/gradle/class1.java"),
                line: Some(4),
                column: None,
                rule: "com.puppycrawl.tools.checkstyle.checks.whitespace.WhitespaceAroundCheck"
                    .to_string(),
                severity: Severity::Warning,
                message: "'<' is not preceded with whitespace.".to_string(),
            },
        ];
        AnalysisReport::new(violations, Severity::Error)
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            XmlReportFormatter::escape_xml(r#"a < b && "c""#),
            "a &lt; b &amp;&amp; &quot;c&quot;"
        );
    }

    #[test]
    fn test_format_groups_by_file() {
        let xml = XmlReportFormatter::new().format(&sample_report()).unwrap();
        assert_eq!(xml.matches("<file ").count(), 1);
        assert_eq!(xml.matches("<error").count(), 2);
        assert!(xml.contains("org/gradle/class1.java"));
        assert!(xml.contains("severity=\"error\""));
        assert!(xml.contains("severity=\"warning\""));
    }

    #[test]
    fn test_format_escapes_message() {
        let xml = XmlReportFormatter::new().format(&sample_report()).unwrap();
        assert!(xml.contains("&apos;&lt;&apos; is not preceded with whitespace."));
    }

    #[test]
    fn test_format_empty_report() {
        let report = AnalysisReport::new(vec![], Severity::Error);
        let xml = XmlReportFormatter::new().format(&report).unwrap();
        assert!(!xml.contains("<error"));
        assert!(xml.contains("<checkstyle>"));
        assert!(xml.contains("</checkstyle>"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let formatter = XmlReportFormatter::new();
        let report = sample_report();
        assert_eq!(
            formatter.format(&report).unwrap(),
            formatter.format(&report).unwrap()
        );
    }

    #[test]
    fn test_round_trip_through_parser() {
        let formatter = XmlReportFormatter::new();
        let original = sample_report();
        let xml = formatter.format(&original).unwrap();
        let reparsed =
            ViolationParser::parse_str(&xml, Path::new("rendered.xml"), Severity::Error).unwrap();
        assert_eq!(reparsed.violations(), original.violations());
    }
}
