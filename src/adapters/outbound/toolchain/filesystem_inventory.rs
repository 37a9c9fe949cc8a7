use crate::analysis::domain::{JavaVersion, RuntimeMetadata};
use crate::ports::outbound::RuntimeInventory;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// FileSystemInventory adapter - enumerates JDKs installed on this machine
///
/// Two sources, combined in a stable order:
/// 1. an optional JSON installations manifest (`toolchains.json`) listing
///    `{path, version, vendor}` records, for explicitly registered runtimes;
/// 2. optional installation directories whose immediate children are scanned
///    for JDK roots (a `bin/java` plus a `release` metadata file).
///
/// The `release` file every modern JDK ships is a simple `KEY="value"` list;
/// `JAVA_VERSION` and `IMPLEMENTOR` are read from it.
pub struct FileSystemInventory {
    manifest_path: Option<PathBuf>,
    installation_dirs: Vec<PathBuf>,
    java_home: Option<PathBuf>,
}

impl FileSystemInventory {
    pub fn new(manifest_path: Option<PathBuf>, installation_dirs: Vec<PathBuf>) -> Self {
        Self {
            manifest_path,
            installation_dirs,
            java_home: std::env::var_os("JAVA_HOME").map(PathBuf::from),
        }
    }

    /// Override the `JAVA_HOME` lookup (tests).
    pub fn with_java_home(mut self, java_home: Option<PathBuf>) -> Self {
        self.java_home = java_home;
        self
    }

    fn manifest_runtimes(&self, manifest: &Path) -> Result<Vec<RuntimeMetadata>> {
        let content = std::fs::read_to_string(manifest).with_context(|| {
            format!(
                "Failed to read installations manifest: {}",
                manifest.display()
            )
        })?;
        let runtimes: Vec<RuntimeMetadata> =
            serde_json::from_str(&content).with_context(|| {
                format!(
                    "Failed to parse installations manifest: {}\n\n💡 Hint: Expected a JSON array of {{\"path\", \"version\", \"vendor\"}} records",
                    manifest.display()
                )
            })?;
        Ok(runtimes)
    }

    fn scanned_runtimes(&self) -> Vec<RuntimeMetadata> {
        let mut found = Vec::new();
        for dir in &self.installation_dirs {
            let Ok(entries) = std::fs::read_dir(dir) else {
                continue;
            };
            let mut candidates: Vec<PathBuf> =
                entries.flatten().map(|e| e.path()).collect();
            candidates.sort();
            for candidate in candidates {
                if let Some(runtime) = probe_jdk(&candidate) {
                    found.push(runtime);
                }
            }
        }
        found
    }
}

impl RuntimeInventory for FileSystemInventory {
    fn installed_runtimes(&self) -> Result<Vec<RuntimeMetadata>> {
        let mut runtimes = Vec::new();
        if let Some(manifest) = &self.manifest_path {
            runtimes.extend(self.manifest_runtimes(manifest)?);
        }
        for runtime in self.scanned_runtimes() {
            if !runtimes.iter().any(|r: &RuntimeMetadata| r.path == runtime.path) {
                runtimes.push(runtime);
            }
        }
        if let Some(current) = self.current_runtime() {
            if !runtimes.iter().any(|r| r.path == current.path) {
                runtimes.push(current);
            }
        }
        Ok(runtimes)
    }

    fn current_runtime(&self) -> Option<RuntimeMetadata> {
        self.java_home.as_deref().and_then(probe_jdk)
    }
}

/// Probe a directory for a usable JDK installation.
fn probe_jdk(root: &Path) -> Option<RuntimeMetadata> {
    let java = root
        .join("bin")
        .join(if cfg!(windows) { "java.exe" } else { "java" });
    if !java.is_file() {
        return None;
    }
    let release = std::fs::read_to_string(root.join("release")).ok()?;
    let version = release_value(&release, "JAVA_VERSION").and_then(|v| JavaVersion::parse(&v))?;
    let vendor =
        release_value(&release, "IMPLEMENTOR").unwrap_or_else(|| "unknown".to_string());
    Some(RuntimeMetadata {
        path: root.to_path_buf(),
        version,
        vendor,
    })
}

/// Extract `KEY="value"` from a JDK release file.
fn release_value(release: &str, key: &str) -> Option<String> {
    release.lines().find_map(|line| {
        let rest = line.strip_prefix(key)?.strip_prefix('=')?;
        Some(rest.trim().trim_matches('"').to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_jdk(parent: &Path, name: &str, version: &str, vendor: &str) -> PathBuf {
        let root = parent.join(name);
        fs::create_dir_all(root.join("bin")).unwrap();
        fs::write(root.join("bin").join("java"), "").unwrap();
        fs::write(
            root.join("release"),
            format!("JAVA_VERSION=\"{}\"\nIMPLEMENTOR=\"{}\"\n", version, vendor),
        )
        .unwrap();
        root
    }

    #[test]
    fn test_release_value_parsing() {
        let release = "IMPLEMENTOR=\"Eclipse Adoptium\"\nJAVA_VERSION=\"17.0.9\"\n";
        assert_eq!(
            release_value(release, "JAVA_VERSION"),
            Some("17.0.9".to_string())
        );
        assert_eq!(
            release_value(release, "IMPLEMENTOR"),
            Some("Eclipse Adoptium".to_string())
        );
        assert_eq!(release_value(release, "JAVA_VERSION_DATE"), None);
    }

    #[test]
    fn test_scan_installation_dir() {
        let tmp = TempDir::new().unwrap();
        fake_jdk(tmp.path(), "jdk-17", "17.0.9", "Eclipse Adoptium");
        fake_jdk(tmp.path(), "jdk-21", "21.0.1", "Oracle Corporation");
        // A directory without bin/java is not a JDK.
        fs::create_dir_all(tmp.path().join("not-a-jdk")).unwrap();

        let inventory = FileSystemInventory::new(None, vec![tmp.path().to_path_buf()])
            .with_java_home(None);
        let runtimes = inventory.installed_runtimes().unwrap();
        assert_eq!(runtimes.len(), 2);
        assert_eq!(runtimes[0].version.major, 17);
        assert_eq!(runtimes[1].vendor, "Oracle Corporation");
    }

    #[test]
    fn test_manifest_runtimes() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join("toolchains.json");
        fs::write(
            &manifest,
            r#"[{"path": "/opt/jdk-11", "version": "11.0.22", "vendor": "Eclipse Adoptium"}]"#,
        )
        .unwrap();

        let inventory =
            FileSystemInventory::new(Some(manifest), vec![]).with_java_home(None);
        let runtimes = inventory.installed_runtimes().unwrap();
        assert_eq!(runtimes.len(), 1);
        assert_eq!(runtimes[0].path, PathBuf::from("/opt/jdk-11"));
        assert_eq!(runtimes[0].version.major, 11);
    }

    #[test]
    fn test_malformed_manifest_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join("toolchains.json");
        fs::write(&manifest, "not json").unwrap();

        let inventory =
            FileSystemInventory::new(Some(manifest), vec![]).with_java_home(None);
        assert!(inventory.installed_runtimes().is_err());
    }

    #[test]
    fn test_java_home_is_current_and_included_once() {
        let tmp = TempDir::new().unwrap();
        let jdk = fake_jdk(tmp.path(), "jdk-17", "17.0.9", "Eclipse Adoptium");

        let inventory = FileSystemInventory::new(None, vec![tmp.path().to_path_buf()])
            .with_java_home(Some(jdk.clone()));
        let current = inventory.current_runtime().unwrap();
        assert_eq!(current.path, jdk);

        // JAVA_HOME also sits inside the scanned dir; no duplicate entry.
        let runtimes = inventory.installed_runtimes().unwrap();
        assert_eq!(runtimes.len(), 1);
    }
}
