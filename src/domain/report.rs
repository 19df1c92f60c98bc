//! Operator guidance printed after manifests are written.

use std::fmt;
use std::path::Path;

use crate::domain::{DeploymentPlan, ImageObservation};

/// Name of the generated driver script.
pub const DRIVER_SCRIPT: &str = "kubectl-apply.sh";

/// One line of post-generation output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Success(String),
    Warning(String),
    Info(String),
    /// A command the operator can copy and run.
    Command(String),
    Blank,
}

/// Ordered post-generation output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<ReportLine>,
}

impl Report {
    /// Guidance derived from a frozen plan.
    pub fn for_plan(plan: &DeploymentPlan) -> Self {
        let mut report = Report::default();
        let config = plan.config();

        if plan.needs_warning() {
            report.warning("Kubernetes configuration generated, but no Jib cache found");
            report.info("If you forgot to generate the Docker image for this application, please run:");
            for missing in plan.missing_artifacts() {
                let location = Path::new(&config.directory_path).join(&missing.folder);
                report.command(format!("{} in {}", missing.remediation, location.display()));
            }
        } else {
            report.success("Kubernetes configuration successfully generated!");
        }

        report.warning(
            "You will need to push your image to a registry. If you have not done so, use the following commands to tag and push the images:",
        );
        for app in plan.applications() {
            if !app.has_default_image_name() {
                report.command(format!(
                    "docker image tag {} {}",
                    app.naive_image_name(),
                    app.image_name
                ));
            }
            report.command(format!("{} {}", config.push_command, app.image_name));
        }

        for observation in plan.image_observations() {
            if let ImageObservation::ImageNameCollision { image, apps } = observation {
                let names: Vec<&str> = apps.iter().map(|app| app.as_str()).collect();
                report.warning(format!(
                    "Applications {} all resolve to image '{}'; each push overwrites the previous one. Rename one of them.",
                    names.join(", "),
                    image
                ));
            }
        }

        report.blank();
        report.info(
            "You can deploy all your apps by running the following script in the output directory:",
        );
        report.command(format!("./{}", DRIVER_SCRIPT));

        if plan.counts().exposed() >= 1 {
            let suffix = config.namespace_suffix();
            report.blank();
            report.info("Use these commands to find your application's IP addresses:");
            for app in plan.exposed_applications() {
                report.command(format!("kubectl get svc {}{}", app.kube_name(), suffix));
            }
        }

        report
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.lines.push(ReportLine::Success(message.into()));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.lines.push(ReportLine::Warning(message.into()));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.lines.push(ReportLine::Info(message.into()));
    }

    pub fn command(&mut self, command: impl Into<String>) {
        self.lines.push(ReportLine::Command(command.into()));
    }

    pub fn blank(&mut self) {
        self.lines.push(ReportLine::Blank);
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::Command(command) => Some(command.as_str()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::Warning(message) => Some(message.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Success(message) => write!(f, "✅ {}", message),
            ReportLine::Warning(message) => write!(f, "⚠️  {}", message),
            ReportLine::Info(message) => write!(f, "{}", message),
            ReportLine::Command(command) => write!(f, "  {}", command),
            ReportLine::Blank => Ok(()),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
