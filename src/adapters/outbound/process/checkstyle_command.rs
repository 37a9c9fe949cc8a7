use crate::analysis::domain::ResolvedToolchain;
use crate::ports::outbound::ToolInvocation;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Builds the `java` invocation for one Checkstyle run.
///
/// The subprocess locale is pinned (`user.language`/`user.country` JVM
/// properties plus `LC_ALL`) so violation messages are byte-stable across
/// machines - callers assert on that text verbatim.
///
/// Checkstyle configs reference their sibling files (e.g. the suppressions
/// file) through the `${config_loc}` placeholder; it is resolved here to the
/// directory containing the config file.
#[derive(Debug, Clone)]
pub struct CheckstyleCommand {
    classpath: Vec<PathBuf>,
    main_class: String,
    config_file: PathBuf,
    suppressions_file: Option<PathBuf>,
}

impl CheckstyleCommand {
    pub const DEFAULT_MAIN_CLASS: &'static str = "com.puppycrawl.tools.checkstyle.Main";

    pub fn new(classpath: Vec<PathBuf>, config_file: PathBuf) -> Self {
        Self {
            classpath,
            main_class: Self::DEFAULT_MAIN_CLASS.to_string(),
            config_file,
            suppressions_file: None,
        }
    }

    pub fn with_main_class(mut self, main_class: impl Into<String>) -> Self {
        self.main_class = main_class.into();
        self
    }

    pub fn with_suppressions(mut self, suppressions_file: Option<PathBuf>) -> Self {
        self.suppressions_file = suppressions_file;
        self
    }

    /// The directory `${config_loc}` resolves to.
    fn config_loc(&self) -> PathBuf {
        self.config_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Assemble the full invocation for one source set.
    ///
    /// `raw_report_path` is where the tool writes its XML output;
    /// `source_roots` are the directories to analyze.
    pub fn invocation(
        &self,
        toolchain: &ResolvedToolchain,
        source_roots: &[PathBuf],
        raw_report_path: &Path,
        working_dir: &Path,
        timeout: Option<Duration>,
    ) -> ToolInvocation {
        let mut args = Vec::new();

        args.push(format!("-Dconfig_loc={}", self.config_loc().display()));
        if let Some(suppressions) = &self.suppressions_file {
            args.push(format!("-Dsuppressions_file={}", suppressions.display()));
        }
        // Pin the JVM locale: Checkstyle localizes rule messages.
        args.push("-Duser.language=en".to_string());
        args.push("-Duser.country=US".to_string());

        if !self.classpath.is_empty() {
            args.push("-cp".to_string());
            args.push(join_classpath(&self.classpath));
        }
        args.push(self.main_class.clone());

        args.push("-c".to_string());
        args.push(self.config_file.display().to_string());
        args.push("-f".to_string());
        args.push("xml".to_string());
        args.push("-o".to_string());
        args.push(raw_report_path.display().to_string());

        for root in source_roots {
            args.push(root.display().to_string());
        }

        ToolInvocation {
            program: toolchain.java_executable(),
            args,
            env: vec![("LC_ALL".to_string(), "en_US.UTF-8".to_string())],
            working_dir: working_dir.to_path_buf(),
            timeout,
        }
    }
}

fn join_classpath(entries: &[PathBuf]) -> String {
    let separator = if cfg!(windows) { ";" } else { ":" };
    entries
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
