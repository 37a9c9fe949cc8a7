use crate::ports::outbound::ReportWriter;
use crate::shared::error::CheckError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileReportWriter adapter - writes rendered reports to disk
///
/// Creates the parent directory chain on demand; refuses to write through a
/// symlinked report path so a hostile workspace cannot redirect output.
pub struct FileReportWriter;

impl FileReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for FileReportWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| CheckError::ReportWrite {
                    path: path.to_path_buf(),
                    details: format!("Failed to create output directory: {}", e),
                })?;
            }
        }

        if path.exists() {
            let metadata =
                fs::symlink_metadata(path).map_err(|e| CheckError::ReportWrite {
                    path: path.to_path_buf(),
                    details: format!("Failed to read file metadata: {}", e),
                })?;
            if metadata.is_symlink() {
                return Err(CheckError::ReportWrite {
                    path: path.to_path_buf(),
                    details: "Report path is a symbolic link; writing through symlinks is not allowed"
                        .to_string(),
                }
                .into());
            }
        }

        fs::write(path, content).map_err(|e| CheckError::ReportWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("reports").join("checkstyle").join("main.xml");

        let writer = FileReportWriter::new();
        writer.write(&path, "<checkstyle/>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<checkstyle/>");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("main.xml");
        fs::write(&path, "old").unwrap();

        let writer = FileReportWriter::new();
        writer.write(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_rejects_symlinked_report_path() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target.xml");
        fs::write(&target, "target").unwrap();
        let link = tmp.path().join("main.xml");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let writer = FileReportWriter::new();
        let result = writer.write(&link, "content");
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("symbolic link"));
    }
}
