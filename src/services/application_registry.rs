//! Loads application descriptors from the folders listed in the run configuration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, ApplicationDescriptor, ApplicationRecord, ArtifactStatus, AuthenticationType,
    BaseName, RunConfig, ServiceDiscovery,
};
use crate::ports::ApplicationSource;

/// Token-validating applications and the Eureka registry share one secret.
pub fn requires_shared_secret(
    authentication: AuthenticationType,
    discovery: ServiceDiscovery,
) -> bool {
    authentication == AuthenticationType::Jwt || discovery == ServiceDiscovery::Eureka
}

/// Application registry loader.
pub struct ApplicationRegistry;

impl ApplicationRegistry {
    /// Directory holding the application folders.
    pub fn apps_dir(config: &RunConfig, output_root: &Path) -> PathBuf {
        output_root.join(&config.directory_path)
    }

    /// One descriptor per configured folder, in folder order.
    pub fn load<S: ApplicationSource>(
        source: &S,
        config: &RunConfig,
        output_root: &Path,
    ) -> Result<Vec<ApplicationDescriptor>, AppError> {
        let apps_dir = Self::apps_dir(config, output_root);
        let mut seen = HashSet::new();
        let mut applications = Vec::with_capacity(config.apps_folders.len());

        for folder in &config.apps_folders {
            let path = apps_dir.join(folder);
            let record = Self::read_record(source, &path)?;
            let base_name = BaseName::new(&record.base_name)?;
            if !seen.insert(base_name.kube_name()) {
                return Err(AppError::DuplicateApplication(base_name.to_string()));
            }

            tracing::debug!(
                folder = %folder,
                base_name = %base_name,
                application_type = %record.application_type,
                "loaded application record"
            );

            applications.push(ApplicationDescriptor {
                image_name: base_name.image_name(),
                base_name,
                application_type: record.application_type,
                folder: folder.clone(),
                path,
                server_port: record.server_port,
                database: record.prod_database_type,
                clustered_db: record.clustered_db || config.is_clustered_db_app(folder),
                message_broker: record.message_broker,
                build_tool: record.build_tool,
                authentication_type: record.authentication_type,
                needs_shared_secret: requires_shared_secret(
                    record.authentication_type,
                    config.service_discovery,
                ),
                artifact: ArtifactStatus::Unchecked,
            });
        }

        Ok(applications)
    }

    /// Service discovery named by the first configured application that names one.
    pub fn detect_service_discovery<S: ApplicationSource>(
        source: &S,
        config: &RunConfig,
        output_root: &Path,
    ) -> Result<Option<ServiceDiscovery>, AppError> {
        let apps_dir = Self::apps_dir(config, output_root);
        for folder in &config.apps_folders {
            let record = Self::read_record(source, &apps_dir.join(folder))?;
            if record.service_discovery_type.is_some() {
                return Ok(record.service_discovery_type);
            }
        }
        Ok(None)
    }

    /// Folder names under the apps directory that look like generated applications.
    pub fn discover<S: ApplicationSource>(
        source: &S,
        config: &RunConfig,
        output_root: &Path,
    ) -> Result<Vec<String>, AppError> {
        let apps_dir = Self::apps_dir(config, output_root);
        let mut folders = Vec::new();
        for path in source.candidate_folders(&apps_dir)? {
            if Self::read_record(source, &path).is_ok()
                && let Some(name) = path.file_name()
            {
                folders.push(name.to_string_lossy().to_string());
            }
        }
        Ok(folders)
    }

    fn read_record<S: ApplicationSource>(
        source: &S,
        path: &Path,
    ) -> Result<ApplicationRecord, AppError> {
        if !source.folder_exists(path) {
            return Err(AppError::InvalidApplicationPath(path.to_path_buf()));
        }
        let content = source
            .read_record(path)?
            .ok_or_else(|| AppError::MissingApplicationConfig(path.to_path_buf()))?;
        ApplicationRecord::parse_json(&content)
            .map_err(|err| AppError::MalformedApplicationConfig {
                path: path.to_path_buf(),
                details: err.to_string(),
            })?
            .ok_or_else(|| AppError::MissingApplicationConfig(path.to_path_buf()))
    }
}
