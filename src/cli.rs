use clap::Parser;

use crate::analysis::domain::Severity;

/// CLI-level severity threshold, parsed case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdArg(pub Severity);

impl std::str::FromStr for ThresholdArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::parse(&s.to_lowercase())
            .map(ThresholdArg)
            .ok_or_else(|| {
                format!(
                    "Invalid threshold: {}. Please specify 'info', 'warning' or 'error'",
                    s
                )
            })
    }
}

/// Run Checkstyle against a Java project under a resolved JDK toolchain
#[derive(Parser, Debug)]
#[command(name = "checkstyle-runner")]
#[command(version = "0.3.0")]
#[command(
    about = "Run Checkstyle against a Java project under a resolved JDK toolchain",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Path to the runner config file (defaults to checkstyle-runner.config.yml
    /// discovered in the project directory)
    #[arg(long = "config-file")]
    pub config_file: Option<String>,

    /// Path to the Checkstyle rule configuration (overrides the config file)
    #[arg(short = 'c', long = "checkstyle-config")]
    pub checkstyle_config: Option<String>,

    /// Directory where rendered reports are written
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<String>,

    /// Require a JDK with this major version (e.g. 17)
    #[arg(long = "jdk-version")]
    pub jdk_version: Option<u32>,

    /// Require a JDK whose vendor name contains this string
    #[arg(long)]
    pub vendor: Option<String>,

    /// Severity at or above which the run fails: info, warning or error
    #[arg(short, long)]
    pub threshold: Option<ThresholdArg>,

    /// Kill a Checkstyle run that exceeds this many seconds
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Show informational diagnostics (toolchain selection, tool stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// List the detected JDK runtimes as JSON and exit
    #[arg(long = "list-runtimes")]
    pub list_runtimes: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
