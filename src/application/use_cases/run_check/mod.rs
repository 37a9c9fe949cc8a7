use crate::adapters::outbound::process::CheckstyleCommand;
use crate::analysis::domain::{AnalysisStatus, ResolvedToolchain};
use crate::analysis::services::{ToolchainResolver, ViolationParser};
use crate::application::dto::{CheckRequest, SourceSet, TargetReport, TaskResult, TaskStatus};
use crate::application::factories::{FormatterFactory, ReportFormat};
use crate::ports::outbound::{ConsoleReporter, ProcessRunner, ReportWriter, RuntimeInventory};
use crate::shared::error::CheckError;
use crate::shared::Result;
use futures::future::join_all;
use std::path::PathBuf;

/// RunCheckUseCase - orchestrates one full Checkstyle run
///
/// Resolves a toolchain, runs the tool once per source set, parses each raw
/// report into the normalized model and publishes the rendered views. All
/// infrastructure is injected through ports, so the whole flow is testable
/// with in-memory fakes.
///
/// # Type Parameters
/// * `RI` - RuntimeInventory implementation
/// * `PR` - ProcessRunner implementation
/// * `W` - ReportWriter implementation
/// * `CR` - ConsoleReporter implementation
pub struct RunCheckUseCase<RI, PR, W, CR> {
    runtime_inventory: RI,
    process_runner: PR,
    report_writer: W,
    console: CR,
}

impl<RI, PR, W, CR> RunCheckUseCase<RI, PR, W, CR>
where
    RI: RuntimeInventory,
    PR: ProcessRunner,
    W: ReportWriter,
    CR: ConsoleReporter,
{
    /// Creates a new RunCheckUseCase with injected dependencies
    pub fn new(runtime_inventory: RI, process_runner: PR, report_writer: W, console: CR) -> Self {
        Self {
            runtime_inventory,
            process_runner,
            report_writer,
            console,
        }
    }

    /// Executes the check run.
    ///
    /// # Arguments
    /// * `request` - fully assembled run request (project, source sets,
    ///   toolchain constraint, tool configuration)
    ///
    /// # Returns
    /// The aggregated `TaskResult`. Rule violations are NOT an error: they
    /// produce a failed result with diagnostics. An `Err` means the run
    /// itself could not be carried out (no toolchain, launch failure,
    /// unusable tool output, report I/O).
    pub async fn execute(&self, request: CheckRequest) -> Result<TaskResult> {
        // Toolchain resolution happens before anything is launched or
        // written, so a resolution failure leaves no trace on disk.
        let toolchain = self.resolve_toolchain(&request)?;
        self.emit_toolchain_diagnostic(&toolchain);

        let command = CheckstyleCommand::new(
            request.tool_classpath.clone(),
            request.config_file.clone(),
        )
        .with_suppressions(request.suppressions_file.clone());

        let checks = request
            .source_sets
            .iter()
            .map(|source_set| self.check_source_set(&request, &command, &toolchain, source_set));
        // join_all preserves input order, so targets (and the diagnostics
        // derived from them) come out in configuration order regardless of
        // which child finishes first.
        let targets: Vec<TargetReport> = join_all(checks)
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        Ok(self.build_result(targets))
    }

    fn resolve_toolchain(&self, request: &CheckRequest) -> Result<ResolvedToolchain> {
        let runtimes = self.runtime_inventory.installed_runtimes()?;
        let toolchain = ToolchainResolver::resolve(
            request.toolchain.predicate(),
            &request.toolchain.to_string(),
            &runtimes,
        )?;
        Ok(toolchain)
    }

    /// Announces which runtime the tool will run under.
    ///
    /// Emitted exactly once per run, and only when the resolved runtime is
    /// not the one the host process would use anyway.
    fn emit_toolchain_diagnostic(&self, toolchain: &ResolvedToolchain) {
        let is_default = self
            .runtime_inventory
            .current_runtime()
            .is_some_and(|current| current.path == toolchain.runtime_path);
        if !is_default {
            self.console.info(&format!(
                "Running checkstyle with toolchain '{}'.",
                toolchain.runtime_path.display()
            ));
        }
    }

    /// Runs the tool for one source set and publishes its reports.
    ///
    /// The raw tool output lands in a per-target temporary directory; only
    /// the deterministic renders of the parsed model are published under the
    /// configured output directory.
    async fn check_source_set(
        &self,
        request: &CheckRequest,
        command: &CheckstyleCommand,
        toolchain: &ResolvedToolchain,
        source_set: &SourceSet,
    ) -> Result<TargetReport> {
        let raw_dir = tempfile::tempdir().map_err(|e| CheckError::ReportWrite {
            path: std::env::temp_dir(),
            details: e.to_string(),
        })?;
        let raw_report_path = raw_dir.path().join(format!("{}.xml", source_set.id));

        let invocation = command.invocation(
            toolchain,
            &source_set.roots,
            &raw_report_path,
            &request.project_dir,
            request.timeout,
        );
        let outcome = self
            .process_runner
            .run(&invocation)
            .await
            .map_err(|err| Self::attribute_cancellation(err, source_set))?;

        if !outcome.stderr.is_empty() {
            self.console.info(&format!(
                "checkstyle stderr for ':{}':\n{}",
                source_set.task_name(),
                outcome.stderr.trim_end()
            ));
        }

        // The tool's exit code counts errors, so it is not consulted here;
        // the report alone decides pass/fail. A missing report means the
        // tool died before producing output, which IS an error.
        let report = ViolationParser::parse(&raw_report_path, request.severity_threshold)?;

        let (xml_path, html_path) = self.publish_reports(request, source_set, &report)?;

        Ok(TargetReport {
            source_set: source_set.id.clone(),
            report,
            xml_path,
            html_path,
        })
    }

    /// Renders and writes every report format for one source set.
    ///
    /// Reports are written on the fail path too - a failed run with no
    /// report to inspect would be useless.
    fn publish_reports(
        &self,
        request: &CheckRequest,
        source_set: &SourceSet,
        report: &crate::analysis::domain::AnalysisReport,
    ) -> Result<(PathBuf, PathBuf)> {
        let mut xml_path = PathBuf::new();
        let mut html_path = PathBuf::new();
        for format in ReportFormat::ALL {
            let formatter = FormatterFactory::create(format);
            let rendered = formatter.format(report)?;
            let path = request
                .output_dir
                .join(format!("{}.{}", source_set.id, formatter.extension()));
            self.report_writer.write(&path, &rendered)?;
            match format {
                ReportFormat::Xml => xml_path = path,
                ReportFormat::Html => html_path = path,
            }
        }
        Ok((xml_path, html_path))
    }

    /// The runner cannot know which source set an invocation belongs to, so
    /// cancellations are re-attributed here before they propagate.
    fn attribute_cancellation(err: anyhow::Error, source_set: &SourceSet) -> anyhow::Error {
        match err.downcast::<CheckError>() {
            Ok(CheckError::Cancelled { timeout_secs, .. }) => CheckError::Cancelled {
                source_set: source_set.id.clone(),
                timeout_secs,
            }
            .into(),
            Ok(other) => other.into(),
            Err(other) => other,
        }
    }

    fn build_result(&self, targets: Vec<TargetReport>) -> TaskResult {
        let mut diagnostics = Vec::new();
        for target in &targets {
            if target.status() == AnalysisStatus::Pass {
                continue;
            }
            diagnostics.push(format!(
                "Execution failed for task ':{}'.",
                SourceSet::task_name_of(&target.source_set)
            ));
            diagnostics.push(format!(
                "Checkstyle rule violations were found ({}). See the report at: {}",
                target.report.violation_count(),
                target.html_path.display()
            ));
            if let Some(violation) = target.report.first_violation() {
                let line = violation
                    .line
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "0".to_string());
                diagnostics.push(format!(
                    "[{}] {}:{}: {} [{}]",
                    violation.severity.as_str().to_uppercase(),
                    violation.file.display(),
                    line,
                    violation.message,
                    violation.rule_short_name()
                ));
            }
        }

        let status = if diagnostics.is_empty() {
            TaskStatus::Passed
        } else {
            TaskStatus::Failed
        };
        let result = TaskResult {
            status,
            targets,
            diagnostics,
        };

        for line in &result.diagnostics {
            self.console.report_error(line);
        }
        self.console.summary(
            &format!(
                "Checkstyle finished: {} source set(s), {} violation(s), {}",
                result.targets.len(),
                result.total_violations(),
                if result.passed() { "PASS" } else { "FAIL" }
            ),
            result.passed(),
        );

        result
    }
}
