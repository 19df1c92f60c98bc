//! Deployment plan composition.
//!
//! Composition validates global settings first and fails fast; every later
//! step only classifies and annotates.

use std::collections::HashSet;

use crate::domain::identifiers::validation::validate_namespace;
use crate::domain::{
    AppError, ApplicationDescriptor, ApplicationType, ArtifactStatus, BaseName, ImageObservation,
    RunConfig, ServiceDiscovery, ServiceType, SharedSecret,
};

/// An application whose build artifact is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingArtifact {
    pub app: BaseName,
    pub folder: String,
    pub remediation: String,
}

/// Application counts per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeCounts {
    pub gateways: usize,
    pub monoliths: usize,
    pub microservices: usize,
}

impl TypeCounts {
    /// Gateways plus monoliths: applications reachable from outside.
    pub fn exposed(&self) -> usize {
        self.gateways + self.monoliths
    }
}

/// Inputs handed to the composer by the enrichment stages.
#[derive(Debug, Clone)]
pub struct PlanInputs {
    pub config: RunConfig,
    pub applications: Vec<ApplicationDescriptor>,
    pub image_observations: Vec<ImageObservation>,
}

/// Frozen result of composition. Read-only for emission and reporting.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    config: RunConfig,
    applications: Vec<ApplicationDescriptor>,
    counts: TypeCounts,
    missing_artifacts: Vec<MissingArtifact>,
    image_observations: Vec<ImageObservation>,
}

impl DeploymentPlan {
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Applications in apply order.
    pub fn applications(&self) -> &[ApplicationDescriptor] {
        &self.applications
    }

    pub fn counts(&self) -> TypeCounts {
        self.counts
    }

    /// Set when any application lacks its build artifact.
    pub fn needs_warning(&self) -> bool {
        !self.missing_artifacts.is_empty()
    }

    pub fn missing_artifacts(&self) -> &[MissingArtifact] {
        &self.missing_artifacts
    }

    pub fn image_observations(&self) -> &[ImageObservation] {
        &self.image_observations
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn uses_kafka(&self) -> bool {
        self.applications.iter().any(ApplicationDescriptor::uses_kafka)
    }

    pub fn needs_shared_secret(&self) -> bool {
        self.applications.iter().any(|app| app.needs_shared_secret)
    }

    pub fn service_discovery(&self) -> ServiceDiscovery {
        self.config.service_discovery
    }

    /// Exposed applications (gateways and monoliths) in apply order.
    pub fn exposed_applications(&self) -> impl Iterator<Item = &ApplicationDescriptor> {
        self.applications.iter().filter(|app| app.application_type.is_exposed())
    }

    /// The shared secret, only for applications that need it.
    pub fn secret_for(&self, app: &ApplicationDescriptor) -> Option<&SharedSecret> {
        if app.needs_shared_secret { self.config.jwt_secret.as_ref() } else { None }
    }
}

/// Turns enriched descriptors and the run configuration into a plan.
pub struct PlanComposer;

impl PlanComposer {
    pub fn compose(inputs: PlanInputs) -> Result<DeploymentPlan, AppError> {
        let PlanInputs { config, applications, image_observations } = inputs;

        Self::validate(&config, &applications)?;

        let counts = Self::count_types(&applications);
        let missing_artifacts = Self::missing_artifacts(&applications);

        tracing::debug!(
            namespace = %config.namespace,
            applications = applications.len(),
            gateways = counts.gateways,
            monoliths = counts.monoliths,
            microservices = counts.microservices,
            missing_artifacts = missing_artifacts.len(),
            "composed deployment plan"
        );

        // Apply order is load order; readiness between services is left to the platform.
        Ok(DeploymentPlan { config, applications, counts, missing_artifacts, image_observations })
    }

    fn validate(config: &RunConfig, applications: &[ApplicationDescriptor]) -> Result<(), AppError> {
        if !validate_namespace(&config.namespace) {
            return Err(AppError::InvalidNamespace(config.namespace.clone()));
        }
        if config.istio_route && !config.istio {
            return Err(AppError::IstioRouteWithoutMesh);
        }
        if config.service_type == ServiceType::Ingress
            && config.ingress_domain.as_deref().is_none_or(str::is_empty)
        {
            return Err(AppError::IngressDomainMissing);
        }
        if applications.is_empty() {
            return Err(AppError::NoApplications);
        }

        let mut seen = HashSet::new();
        for app in applications {
            if !seen.insert(app.kube_name()) {
                return Err(AppError::DuplicateApplication(app.base_name.to_string()));
            }
        }

        if applications.iter().any(|app| app.needs_shared_secret) && config.jwt_secret.is_none() {
            return Err(AppError::config_error(
                "Shared secret must be provisioned before composing the deployment plan",
            ));
        }
        Ok(())
    }

    fn count_types(applications: &[ApplicationDescriptor]) -> TypeCounts {
        applications.iter().fold(TypeCounts::default(), |mut counts, app| {
            match app.application_type {
                ApplicationType::Gateway => counts.gateways += 1,
                ApplicationType::Monolith => counts.monoliths += 1,
                ApplicationType::Microservice => counts.microservices += 1,
            }
            counts
        })
    }

    fn missing_artifacts(applications: &[ApplicationDescriptor]) -> Vec<MissingArtifact> {
        applications
            .iter()
            .filter_map(|app| match &app.artifact {
                ArtifactStatus::Missing { remediation } => Some(MissingArtifact {
                    app: app.base_name.clone(),
                    folder: app.folder.clone(),
                    remediation: remediation.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}
