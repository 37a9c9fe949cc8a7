use crate::adapters::outbound::formatters::{HtmlReportFormatter, XmlReportFormatter};
use crate::ports::outbound::ReportFormatter;
use std::str::FromStr;

/// The report formats this runner renders.
///
/// Every run produces all of them - consumers inspect reports regardless of
/// pass/fail, so neither format is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xml,
    Html,
}

impl ReportFormat {
    /// All formats, in the order reports are rendered and written.
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Xml, ReportFormat::Html];
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(ReportFormat::Xml),
            "html" => Ok(ReportFormat::Html),
            _ => Err(format!(
                "Unsupported report format: {}. Please specify 'xml' or 'html'",
                s
            )),
        }
    }
}

/// Factory for report formatters
///
/// Encapsulates the mapping from format to adapter so the orchestrator never
/// names concrete formatter types.
pub struct FormatterFactory;

impl FormatterFactory {
    pub fn create(format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Xml => Box::new(XmlReportFormatter::new()),
            ReportFormat::Html => Box::new(HtmlReportFormatter::new()),
        }
    }
}
