//! Generate command: turns application folders and run settings into
//! Kubernetes manifests plus a driver script.

use std::time::Duration;

use crate::app::AppContext;
use crate::app::commands::configure::{self, RunConfigOverrides};
use crate::domain::{
    AppError, DeploymentPlan, ImageNameResolver, PlanComposer, PlanInputs, Report, RunConfig,
    SecretOrigin, SecretProvisioner,
};
use crate::ports::{
    ApplicationSource, ArtifactProbe, CliStatus, ClusterCliProbe, ConfigStore, ManifestSink,
    Prompter,
};
use crate::services::{ApplicationRegistry, ManifestRenderer, PostGenerationReporter};

/// Default upper bound for the `kubectl` presence check.
pub const DEFAULT_KUBECTL_TIMEOUT: Duration = Duration::from_secs(5);

/// Options for one generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub overrides: RunConfigOverrides,
    /// Discard the persisted shared secret and generate a new one.
    pub reset_secret: bool,
    /// Skip the build-artifact and kubectl checks.
    pub skip_checks: bool,
    pub kubectl_timeout: Duration,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            overrides: RunConfigOverrides::default(),
            reset_secret: false,
            skip_checks: false,
            kubectl_timeout: DEFAULT_KUBECTL_TIMEOUT,
        }
    }
}

/// Result of a successful generate run.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub plan: DeploymentPlan,
    /// Written paths, relative to the output directory.
    pub files: Vec<String>,
    pub report: Report,
    /// `None` when no application needs the shared secret.
    pub secret_origin: Option<SecretOrigin>,
}

/// Execute the generate command.
///
/// Questions are asked only when a prompter is given. The configuration is
/// saved once, after the plan is composed and before anything is written.
pub fn execute<S, C, M, A, K>(
    ctx: &AppContext<S, C, M, A, K>,
    prompter: Option<&dyn Prompter>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    S: ApplicationSource,
    C: ConfigStore,
    M: ManifestSink,
    A: ArtifactProbe,
    K: ClusterCliProbe,
{
    let cli_status = if options.skip_checks {
        None
    } else {
        let status = ctx.cluster_cli().check(options.kubectl_timeout);
        if status != CliStatus::Available {
            tracing::warn!(?status, "kubectl check did not pass");
        }
        Some(status)
    };

    let config = resolve_config(ctx, prompter, options)?;

    let mut applications = ApplicationRegistry::load(ctx.source(), &config, ctx.output_root())?;
    tracing::info!(applications = applications.len(), "loaded applications");

    if !options.skip_checks {
        for app in &mut applications {
            app.artifact = ctx.artifacts().check(app);
        }
    }

    let image_observations = ImageNameResolver::resolve(&config, &mut applications)?;

    let (config, secret_origin) = if applications.iter().any(|app| app.needs_shared_secret) {
        let (config, origin) = SecretProvisioner::provision(config)?;
        tracing::info!(?origin, "shared secret provisioned");
        (config, Some(origin))
    } else {
        (config, None)
    };

    let plan = PlanComposer::compose(PlanInputs { config, applications, image_observations })?;
    ctx.config_store().save(plan.config())?;

    let renderer = ManifestRenderer::new()?;
    let rendered = renderer.render(&plan)?;
    let mut files = Vec::with_capacity(rendered.len());
    for file in &rendered {
        ctx.sink().write(file)?;
        files.push(file.path.clone());
    }
    tracing::info!(files = files.len(), output = %ctx.output_root().display(), "wrote manifests");

    let report = PostGenerationReporter::finish(&plan, ctx.sink(), cli_status.as_ref());

    Ok(GenerateOutcome { plan, files, report, secret_origin })
}

/// Defaults, then the persisted file, then flags, then answers.
fn resolve_config<S, C, M, A, K>(
    ctx: &AppContext<S, C, M, A, K>,
    prompter: Option<&dyn Prompter>,
    options: &GenerateOptions,
) -> Result<RunConfig, AppError>
where
    S: ApplicationSource,
    C: ConfigStore,
    M: ManifestSink,
    A: ArtifactProbe,
    K: ClusterCliProbe,
{
    let persisted = ctx.config_store().load()?;
    let first_run = persisted.is_none();
    let mut config = persisted.unwrap_or_default();
    let overrides = &options.overrides;
    overrides.apply(&mut config);

    if let Some(prompter) = prompter {
        configure::collect_applications(
            &mut config,
            overrides,
            prompter,
            ctx.source(),
            ctx.output_root(),
        )?;
    }

    if first_run
        && overrides.service_discovery.is_none()
        && let Ok(Some(detected)) =
            ApplicationRegistry::detect_service_discovery(ctx.source(), &config, ctx.output_root())
    {
        tracing::debug!(discovery = detected.label(), "service discovery taken from records");
        config.service_discovery = detected;
    }

    if let Some(prompter) = prompter {
        configure::collect_settings(&mut config, overrides, prompter)?;
    }

    if options.reset_secret {
        config.jwt_secret = None;
    }
    Ok(config)
}
