//! Run configuration collection: flag overrides first, then questions for
//! whatever the flags left open.

use std::path::Path;

use crate::domain::{AppError, Monitoring, RunConfig, ServiceDiscovery, ServiceType};
use crate::ports::{ApplicationSource, Prompter};
use crate::services::ApplicationRegistry;

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct RunConfigOverrides {
    pub directory_path: Option<String>,
    pub apps_folders: Option<Vec<String>>,
    pub clustered_db_apps: Option<Vec<String>>,
    pub namespace: Option<String>,
    pub service_type: Option<ServiceType>,
    pub ingress_domain: Option<String>,
    pub repository_name: Option<String>,
    pub push_command: Option<String>,
    pub image_tag: Option<String>,
    pub istio: Option<bool>,
    pub istio_route: Option<bool>,
    pub service_discovery: Option<ServiceDiscovery>,
    pub monitoring: Option<Monitoring>,
}

impl RunConfigOverrides {
    pub fn apply(&self, config: &mut RunConfig) {
        if let Some(value) = &self.directory_path {
            config.directory_path = value.clone();
        }
        if let Some(value) = &self.apps_folders {
            config.apps_folders = value.clone();
        }
        if let Some(value) = &self.clustered_db_apps {
            config.clustered_db_apps = value.clone();
        }
        if let Some(value) = &self.namespace {
            config.namespace = value.clone();
        }
        if let Some(value) = self.service_type {
            config.service_type = value;
        }
        if let Some(value) = &self.ingress_domain {
            config.ingress_domain = Some(value.clone());
        }
        if let Some(value) = &self.repository_name {
            config.repository_name = Some(value.clone()).filter(|name| !name.is_empty());
        }
        if let Some(value) = &self.push_command {
            config.push_command = value.clone();
        }
        if let Some(value) = &self.image_tag {
            config.image_tag = Some(value.clone()).filter(|tag| !tag.is_empty());
        }
        if let Some(value) = self.istio {
            config.istio = value;
        }
        if let Some(value) = self.istio_route {
            config.istio_route = value;
        }
        if let Some(value) = self.service_discovery {
            config.service_discovery = value;
        }
        if let Some(value) = self.monitoring {
            config.monitoring = value;
        }
    }
}

/// Ask for the application directory, the applications, and database clustering.
pub fn collect_applications<P, S>(
    config: &mut RunConfig,
    overrides: &RunConfigOverrides,
    prompter: &P,
    source: &S,
    output_root: &Path,
) -> Result<(), AppError>
where
    P: Prompter + ?Sized,
    S: ApplicationSource,
{
    if overrides.directory_path.is_none() {
        config.directory_path = prompter.input(
            "Enter the root directory where your applications are located",
            &config.directory_path,
        )?;
    }

    if overrides.apps_folders.is_none() {
        let found = ApplicationRegistry::discover(source, config, output_root)?;
        if found.is_empty() {
            tracing::warn!(directory = %config.directory_path, "no applications found to offer");
        } else {
            let defaults: Vec<bool> =
                found.iter().map(|folder| config.apps_folders.contains(folder)).collect();
            let picked = prompter.multi_select(
                "Which applications do you want to include in your configuration?",
                &found,
                &defaults,
            )?;
            config.apps_folders = pick(&found, &picked);
        }
    }

    if overrides.clustered_db_apps.is_none() && !config.apps_folders.is_empty() {
        let defaults: Vec<bool> = config
            .apps_folders
            .iter()
            .map(|folder| config.is_clustered_db_app(folder))
            .collect();
        let picked = prompter.multi_select(
            "Which applications do you want to use with clustered databases?",
            &config.apps_folders,
            &defaults,
        )?;
        config.clustered_db_apps = pick(&config.apps_folders, &picked);
    }
    Ok(())
}

/// Ask for the remaining run settings.
pub fn collect_settings<P: Prompter + ?Sized>(
    config: &mut RunConfig,
    overrides: &RunConfigOverrides,
    prompter: &P,
) -> Result<(), AppError> {
    if overrides.service_discovery.is_none() {
        let items: Vec<String> =
            ServiceDiscovery::ALL.iter().map(|d| d.label().to_string()).collect();
        let default = position(&ServiceDiscovery::ALL, config.service_discovery);
        let index = prompter.select("Which service discovery do you use?", &items, default)?;
        config.service_discovery = item(&ServiceDiscovery::ALL, index)?;
    }

    if overrides.monitoring.is_none() {
        let items: Vec<String> = Monitoring::ALL.iter().map(|m| m.label().to_string()).collect();
        let default = position(&Monitoring::ALL, config.monitoring);
        let index =
            prompter.select("Do you want to export your services for monitoring?", &items, default)?;
        config.monitoring = item(&Monitoring::ALL, index)?;
    }

    if overrides.namespace.is_none() {
        config.namespace =
            prompter.input("What should we use for the Kubernetes namespace?", &config.namespace)?;
    }

    if overrides.repository_name.is_none() {
        config.repository_name = prompter
            .optional_input(
                "What should we use for the base Docker repository name?",
                config.repository_name.as_deref(),
            )?
            .filter(|name| !name.is_empty());
    }

    if overrides.push_command.is_none() {
        config.push_command = prompter.input(
            "What command should we use for push Docker image to repository?",
            &config.push_command,
        )?;
    }

    if overrides.istio.is_none() {
        config.istio = prompter.confirm("Do you want to enable Istio?", config.istio)?;
    }

    if overrides.istio_route.is_none() {
        config.istio_route = config.istio
            && prompter.confirm("Do you want to generate Istio route files?", config.istio_route)?;
    }

    if overrides.service_type.is_none() {
        let items: Vec<String> = ServiceType::ALL.iter().map(|t| t.label().to_string()).collect();
        let default = position(&ServiceType::ALL, config.service_type);
        let index = prompter.select(
            "Choose the Kubernetes service type for your edge services",
            &items,
            default,
        )?;
        config.service_type = item(&ServiceType::ALL, index)?;
    }

    if overrides.ingress_domain.is_none() && config.service_type == ServiceType::Ingress {
        config.ingress_domain = prompter
            .optional_input(
                "What is the root FQDN for your ingress services (e.g. example.com)?",
                config.ingress_domain.as_deref(),
            )?
            .filter(|domain| !domain.is_empty());
    }

    Ok(())
}

fn pick(items: &[String], indices: &[usize]) -> Vec<String> {
    indices.iter().filter_map(|&index| items.get(index).cloned()).collect()
}

fn position<T: PartialEq + Copy>(all: &[T], current: T) -> usize {
    all.iter().position(|value| *value == current).unwrap_or(0)
}

fn item<T: Copy>(all: &[T], index: usize) -> Result<T, AppError> {
    all.get(index)
        .copied()
        .ok_or_else(|| AppError::Prompt(format!("selection {} is out of range", index)))
}
