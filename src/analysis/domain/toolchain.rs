use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// A parsed Java runtime version, ordered by numeric components.
///
/// Handles both the legacy `1.8.0_392` scheme (reported as major 8) and the
/// modern `17.0.9` scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JavaVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    raw: String,
}

impl JavaVersion {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let mut parts = trimmed
            .split(|c: char| c == '.' || c == '_' || c == '+' || c == '-')
            .map(|p| p.parse::<u32>().ok());

        let first = parts.next()??;
        let second = parts.next().flatten().unwrap_or(0);
        let third = parts.next().flatten().unwrap_or(0);

        // Legacy scheme: "1.8.0_392" means Java 8.
        let (major, minor, patch) = if first == 1 {
            (second, third, 0)
        } else {
            (first, second, third)
        };
        if major == 0 {
            return None;
        }

        Some(Self {
            major,
            minor,
            patch,
            raw: trimmed.to_string(),
        })
    }

    /// The version string as reported by the runtime.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl Ord for JavaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

impl PartialOrd for JavaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for JavaVersion {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        JavaVersion::parse(&value).ok_or_else(|| format!("Invalid Java version: '{}'", value))
    }
}

impl From<JavaVersion> for String {
    fn from(version: JavaVersion) -> Self {
        version.raw
    }
}

/// Metadata for one installed runtime, as enumerated by the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeMetadata {
    /// Installation root (the directory containing `bin/java`).
    pub path: PathBuf,
    pub version: JavaVersion,
    pub vendor: String,
}

/// A runtime selected for one analysis run. Never mutated after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToolchain {
    pub runtime_path: PathBuf,
    pub version: JavaVersion,
}

impl ResolvedToolchain {
    pub fn from_metadata(metadata: &RuntimeMetadata) -> Self {
        Self {
            runtime_path: metadata.path.clone(),
            version: metadata.version.clone(),
        }
    }

    /// Path to the `java` launcher inside this runtime.
    pub fn java_executable(&self) -> PathBuf {
        let exe = if cfg!(windows) { "java.exe" } else { "java" };
        self.runtime_path.join("bin").join(exe)
    }
}

/// Declarative constraint over installed runtimes.
///
/// The resolver itself only sees the predicate closure this builds, so
/// callers are free to construct arbitrary predicates instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainSpec {
    /// Required major version (`17` matches 17.0.x), if any.
    pub version: Option<u32>,
    /// Case-insensitive substring match on the vendor name, if any.
    pub vendor: Option<String>,
}

impl ToolchainSpec {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn for_version(major: u32) -> Self {
        Self {
            version: Some(major),
            vendor: None,
        }
    }

    /// True when no constraint is present, i.e. any runtime matches.
    pub fn is_unconstrained(&self) -> bool {
        self.version.is_none() && self.vendor.is_none()
    }

    /// Build the pure predicate the resolver filters with.
    pub fn predicate(&self) -> impl Fn(&RuntimeMetadata) -> bool + '_ {
        move |runtime: &RuntimeMetadata| {
            if let Some(major) = self.version {
                if runtime.version.major != major {
                    return false;
                }
            }
            if let Some(vendor) = &self.vendor {
                if !runtime
                    .vendor
                    .to_lowercase()
                    .contains(&vendor.to_lowercase())
                {
                    return false;
                }
            }
            true
        }
    }
}

impl fmt::Display for ToolchainSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.version, &self.vendor) {
            (Some(v), Some(vendor)) => write!(f, "version={}, vendor={}", v, vendor),
            (Some(v), None) => write!(f, "version={}", v),
            (None, Some(vendor)) => write!(f, "vendor={}", vendor),
            (None, None) => write!(f, "any"),
        }
    }
}
