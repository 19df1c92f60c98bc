//! Registry-qualified image names.

use std::collections::BTreeMap;

use crate::domain::identifiers::validation::{validate_image_tag, validate_repository_name};
use crate::domain::{AppError, ApplicationDescriptor, BaseName, RunConfig};

/// Something the operator should know about resolved image names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageObservation {
    /// The image must be tagged before it can be pushed.
    NonDefaultImageName { app: BaseName, naive: String, target: String },
    /// Several applications resolve to the same image.
    ImageNameCollision { image: String, apps: Vec<BaseName> },
}

/// Computes `[repository/]lowercase(baseName)[:tag]` for every application.
pub struct ImageNameResolver;

impl ImageNameResolver {
    /// Target image name for one base name.
    pub fn target_image_name(config: &RunConfig, base_name: &BaseName) -> String {
        let prefix = match config.repository_name.as_deref() {
            Some(repository) if !repository.is_empty() => format!("{}/", repository),
            _ => String::new(),
        };
        let suffix = match config.image_tag.as_deref() {
            Some(tag) if !tag.is_empty() => format!(":{}", tag),
            _ => String::new(),
        };
        format!("{}{}{}", prefix, base_name.image_name(), suffix)
    }

    /// Validate the naming settings and set `image_name` on every descriptor.
    ///
    /// Runs only over the complete descriptor set so collisions are visible.
    pub fn resolve(
        config: &RunConfig,
        applications: &mut [ApplicationDescriptor],
    ) -> Result<Vec<ImageObservation>, AppError> {
        if let Some(repository) = config.repository_name.as_deref()
            && !repository.is_empty()
        {
            validate_repository_name(repository).map_err(|reason| {
                AppError::InvalidRepositoryName { name: repository.to_string(), reason }
            })?;
        }
        if let Some(tag) = config.image_tag.as_deref()
            && !tag.is_empty()
            && !validate_image_tag(tag)
        {
            return Err(AppError::InvalidImageTag(tag.to_string()));
        }

        let mut observations = Vec::new();
        let mut by_image: BTreeMap<String, Vec<BaseName>> = BTreeMap::new();

        for app in applications.iter_mut() {
            app.image_name = Self::target_image_name(config, &app.base_name);
            if !app.has_default_image_name() {
                observations.push(ImageObservation::NonDefaultImageName {
                    app: app.base_name.clone(),
                    naive: app.naive_image_name(),
                    target: app.image_name.clone(),
                });
            }
            by_image.entry(app.image_name.clone()).or_default().push(app.base_name.clone());
        }

        for (image, apps) in by_image {
            if apps.len() > 1 {
                tracing::warn!(
                    %image,
                    count = apps.len(),
                    "image name shared by several applications"
                );
                observations.push(ImageObservation::ImageNameCollision { image, apps });
            }
        }

        Ok(observations)
    }
}
