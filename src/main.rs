use checkstyle_runner::adapters::outbound::console::StderrConsoleReporter;
use checkstyle_runner::adapters::outbound::filesystem::FileReportWriter;
use checkstyle_runner::adapters::outbound::process::TokioProcessRunner;
use checkstyle_runner::adapters::outbound::toolchain::FileSystemInventory;
use checkstyle_runner::analysis::domain::{Severity, ToolchainSpec};
use checkstyle_runner::application::dto::{CheckRequest, SourceSet};
use checkstyle_runner::application::use_cases::RunCheckUseCase;
use checkstyle_runner::cli::Args;
use checkstyle_runner::config::{self, ConfigFile};
use checkstyle_runner::ports::outbound::RuntimeInventory;
use checkstyle_runner::shared::{CheckError, ExitCode, Result};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args) -> Result<ExitCode> {
    let project_dir = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_project_path(&project_dir)?;

    // Explicit --config-file must exist; discovery is allowed to find nothing.
    let config = match &args.config_file {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(&project_dir)?.unwrap_or_default(),
    };

    let inventory = build_inventory(&config, &project_dir);

    if args.list_runtimes {
        let runtimes = inventory.installed_runtimes()?;
        println!("{}", serde_json::to_string_pretty(&runtimes)?);
        return Ok(ExitCode::Success);
    }

    let request = build_request(&args, &config, project_dir)?;

    // Create use case with injected dependencies
    let use_case = RunCheckUseCase::new(
        inventory,
        TokioProcessRunner::new(),
        FileReportWriter::new(),
        StderrConsoleReporter::new(args.verbose),
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(use_case.execute(request))?;

    Ok(result.exit_code())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CheckError::InvalidConfig {
            message: format!(
                "Project directory does not exist: {}\n\n💡 Hint: Pass the project root with --path",
                path.display()
            ),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(CheckError::InvalidConfig {
            message: format!("Project path is not a directory: {}", path.display()),
        }
        .into());
    }

    Ok(())
}

fn build_inventory(config: &ConfigFile, project_dir: &Path) -> FileSystemInventory {
    let manifest = config
        .installations_manifest
        .as_ref()
        .map(|p| resolve_against(project_dir, p));

    let mut installation_dirs: Vec<PathBuf> = config
        .installation_dirs
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|p| resolve_against(project_dir, p))
        .collect();
    if installation_dirs.is_empty() {
        // Conventional install locations scanned when nothing is configured.
        installation_dirs.push(PathBuf::from("/usr/lib/jvm"));
        if let Some(home) = std::env::var_os("HOME") {
            installation_dirs.push(PathBuf::from(home).join(".jdks"));
        }
    }

    FileSystemInventory::new(manifest, installation_dirs)
}

fn build_request(args: &Args, config: &ConfigFile, project_dir: PathBuf) -> Result<CheckRequest> {
    let config_file = args
        .checkstyle_config
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| config.checkstyle_config.clone())
        .ok_or_else(|| CheckError::InvalidConfig {
            message: "No Checkstyle rule configuration given.\n\n\
                      💡 Hint: Pass --checkstyle-config, or set 'checkstyle_config' in checkstyle-runner.config.yml"
                .to_string(),
        })?;

    let tool_classpath = config.tool_classpath.clone().unwrap_or_default();
    if tool_classpath.is_empty() {
        return Err(CheckError::InvalidConfig {
            message: "No tool classpath configured.\n\n\
                      💡 Hint: Set 'tool_classpath' in checkstyle-runner.config.yml to the checkstyle-all jar"
                .to_string(),
        }
        .into());
    }

    let source_sets = match &config.source_sets {
        Some(sets) => sets
            .iter()
            .map(|s| SourceSet::new(s.id.clone(), s.roots.clone()))
            .collect(),
        None => default_source_sets(&project_dir),
    };

    let toolchain = ToolchainSpec {
        version: args.jdk_version.or_else(|| {
            config.toolchain.as_ref().and_then(|t| t.version)
        }),
        vendor: args.vendor.clone().or_else(|| {
            config.toolchain.as_ref().and_then(|t| t.vendor.clone())
        }),
    };

    let severity_threshold = args
        .threshold
        .map(|t| t.0)
        .or_else(|| {
            config
                .severity_threshold
                .as_deref()
                .and_then(Severity::parse)
        })
        .unwrap_or(Severity::Error);

    let output_dir = args
        .output_dir
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| config.output_dir.as_ref().map(|p| resolve_against(&project_dir, p)))
        .unwrap_or_else(|| project_dir.join("build/reports/checkstyle"));

    let timeout = args
        .timeout_secs
        .or(config.timeout_secs)
        .map(Duration::from_secs);

    Ok(CheckRequest {
        project_dir,
        source_sets,
        toolchain,
        config_file,
        suppressions_file: config.suppressions.clone(),
        tool_classpath,
        output_dir,
        severity_threshold,
        timeout,
    })
}

/// Conventional Java layout: `main` always, `test` only when its root exists.
fn default_source_sets(project_dir: &Path) -> Vec<SourceSet> {
    let mut sets = vec![SourceSet::new("main", vec![PathBuf::from("src/main/java")])];
    if project_dir.join("src/test/java").is_dir() {
        sets.push(SourceSet::new("test", vec![PathBuf::from("src/test/java")]));
    }
    sets
}

/// Paths consumed by this process (not the child, which runs in the project
/// directory) are resolved against the project directory when relative.
fn resolve_against(project_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_dir.join(path)
    }
}
