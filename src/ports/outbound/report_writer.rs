use crate::shared::Result;
use std::path::Path;

/// ReportWriter port for publishing rendered reports
///
/// Abstracts the output destination so the orchestrator can be tested
/// without touching the real filesystem.
pub trait ReportWriter {
    /// Writes a rendered document to the given path, creating parent
    /// directories as needed.
    ///
    /// # Errors
    /// Returns an error if the path cannot be created or written
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}
