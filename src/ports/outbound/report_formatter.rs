use crate::analysis::domain::AnalysisReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the violation model
///
/// Implementations must be pure and deterministic: the same report always
/// yields byte-identical output, so rendered files can be golden-tested and
/// diffed. Every formatter includes, per violation: file path, rule name,
/// message text and severity - the formats are views of the same model,
/// never subsets of each other.
pub trait ReportFormatter {
    /// Renders the report into this formatter's document format.
    ///
    /// # Errors
    /// Returns an error if rendering fails (formatters that build documents
    /// by string assembly are infallible in practice)
    fn format(&self, report: &AnalysisReport) -> Result<String>;

    /// File extension for rendered documents, without the leading dot.
    fn extension(&self) -> &'static str;
}
