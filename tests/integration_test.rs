//! Integration tests driving the full pipeline with real adapters.
//!
//! A fake JDK is laid out on disk whose `bin/java` is a shell script that
//! behaves like the real tool: it writes a canned Checkstyle XML report to
//! the path given after `-o` and exits with the number of errors found.
#![cfg(unix)]

mod test_utilities;

use checkstyle_runner::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use test_utilities::{fake_jdk, tool_script, CLEAN_REPORT, FAILING_REPORT};

struct Harness {
    jdks: TempDir,
    project: TempDir,
}

impl Harness {
    fn with_tool(report: &str, exit_code: i32) -> Self {
        Self::with_script(&tool_script(report, exit_code))
    }

    fn with_script(script_body: &str) -> Self {
        let jdks = TempDir::new().unwrap();
        fake_jdk(jdks.path(), "jdk-17", "17.0.9", script_body);
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("src/main/java")).unwrap();
        Self { jdks, project }
    }

    /// A fresh inventory over the fake JDK directory, isolated from the
    /// host's `JAVA_HOME`.
    fn inventory(&self) -> FileSystemInventory {
        FileSystemInventory::new(None, vec![self.jdks.path().to_path_buf()]).with_java_home(None)
    }

    fn output_dir(&self) -> PathBuf {
        self.project.path().join("build/reports/checkstyle")
    }

    fn request(&self, jdk_version: u32, timeout: Option<Duration>) -> CheckRequest {
        CheckRequest {
            project_dir: self.project.path().to_path_buf(),
            source_sets: vec![SourceSet::new("main", vec![PathBuf::from("src/main/java")])],
            toolchain: ToolchainSpec::for_version(jdk_version),
            config_file: PathBuf::from("config/checkstyle/checkstyle.xml"),
            suppressions_file: None,
            tool_classpath: vec![PathBuf::from("libs/checkstyle-all.jar")],
            output_dir: self.output_dir(),
            severity_threshold: Severity::Error,
            timeout,
        }
    }

    async fn execute(&self, request: CheckRequest) -> Result<TaskResult> {
        let use_case = RunCheckUseCase::new(
            self.inventory(),
            TokioProcessRunner::new(),
            FileReportWriter::new(),
            StderrConsoleReporter::new(false),
        );
        use_case.execute(request).await
    }
}

#[tokio::test]
async fn test_clean_project_passes_and_publishes_reports() {
    let harness = Harness::with_tool(CLEAN_REPORT, 0);

    let result = harness.execute(harness.request(17, None)).await.unwrap();

    assert!(result.passed());
    assert_eq!(result.exit_code().as_i32(), 0);
    assert!(result.diagnostics.is_empty());
    let xml = fs::read_to_string(harness.output_dir().join("main.xml")).unwrap();
    let html = fs::read_to_string(harness.output_dir().join("main.html")).unwrap();
    assert!(xml.contains("<checkstyle"));
    assert!(!xml.contains("<error"), "clean report carries no violations");
    assert!(html.contains("PASS"));
    assert!(!html.contains("<td"), "clean report renders no violation rows");
}

#[tokio::test]
async fn test_violations_fail_with_exact_diagnostics_and_reports() {
    let harness = Harness::with_tool(FAILING_REPORT, 1);

    let result = harness.execute(harness.request(17, None)).await.unwrap();

    assert!(!result.passed());
    assert_eq!(result.exit_code().as_i32(), 1);
    assert_eq!(
        result.diagnostics[0],
        "Execution failed for task ':checkstyleMain'."
    );
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.contains("Name 'class1' must match pattern '^[A-Z][a-zA-Z0-9]*$'.")));

    let xml = fs::read_to_string(harness.output_dir().join("main.xml")).unwrap();
    let html = fs::read_to_string(harness.output_dir().join("main.html")).unwrap();
    assert!(xml.contains("src/main/java/org/gradle/class1.java"));
    assert!(html.contains("src/main/java/org/gradle/class1.java"));
    assert!(html.contains("FAIL"));
}

#[tokio::test]
async fn test_unsatisfiable_toolchain_leaves_no_reports() {
    let harness = Harness::with_tool(CLEAN_REPORT, 0);

    let err = harness.execute(harness.request(21, None)).await.unwrap_err();

    let check_err = err.downcast_ref::<CheckError>().unwrap();
    assert!(matches!(check_err, CheckError::ToolchainNotFound { .. }));
    assert!(!harness.output_dir().exists(), "no reports on abort");
}

#[tokio::test]
async fn test_hanging_tool_is_cancelled() {
    let harness = Harness::with_script("sleep 30");

    let err = harness
        .execute(harness.request(17, Some(Duration::from_millis(200))))
        .await
        .unwrap_err();

    match err.downcast_ref::<CheckError>().unwrap() {
        CheckError::Cancelled { source_set, .. } => assert_eq!(source_set, "main"),
        other => panic!("expected Cancelled, got {:?}", other),
    }
    assert!(!harness.output_dir().exists());
}
