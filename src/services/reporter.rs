use crate::domain::{DRIVER_SCRIPT, DeploymentPlan, Report};
use crate::ports::{CliStatus, ManifestSink};

/// Builds the post-generation report and marks the driver script executable.
pub struct PostGenerationReporter;

impl PostGenerationReporter {
    /// `cli` is `None` when the kubectl check was skipped.
    pub fn finish<K: ManifestSink + ?Sized>(
        plan: &DeploymentPlan,
        sink: &K,
        cli: Option<&CliStatus>,
    ) -> Report {
        let mut report = Report::default();
        if let Some(message) = cli.and_then(cli_warning) {
            report.warning(message);
        }
        report.lines.extend(Report::for_plan(plan).lines);

        if let Err(err) = sink.make_executable(DRIVER_SCRIPT) {
            tracing::debug!(error = %err, "chmod of driver script failed");
            report.warning(format!(
                "Failed to make '{script}' executable, you may need to run 'chmod +x {script}'",
                script = DRIVER_SCRIPT
            ));
        }
        report
    }
}

fn cli_warning(status: &CliStatus) -> Option<String> {
    const INSTALL_HINT: &str =
        "Make sure you have Kubernetes installed. Read https://kubernetes.io/docs/tasks/tools/";
    match status {
        CliStatus::Available => None,
        CliStatus::Missing => {
            Some(format!("kubectl is not installed on your computer. {}", INSTALL_HINT))
        }
        CliStatus::Failed(details) => {
            Some(format!("kubectl did not run cleanly ({}). {}", details, INSTALL_HINT))
        }
        CliStatus::TimedOut => {
            Some("kubectl did not answer in time; check your installation.".to_string())
        }
    }
}
