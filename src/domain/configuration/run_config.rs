//! Run configuration domain models.

use serde::{Deserialize, Serialize};

use super::options::{Monitoring, ServiceDiscovery, ServiceType};
use crate::domain::SharedSecret;

/// Namespace that needs no `-n` qualifier on kubectl commands.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Process-wide settings for one generation run, persisted in
/// `.kubegen/config.toml`.
///
/// Keys this version does not know about are kept in `extra` and written
/// back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Target namespace.
    pub namespace: String,
    /// Service type for gateway and monolith applications.
    pub service_type: ServiceType,
    /// Domain used by ingress host rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_domain: Option<String>,
    /// Istio sidecar injection.
    pub istio: bool,
    /// Istio gateway/virtual-service/destination-rule generation.
    pub istio_route: bool,
    /// Command used to push images, e.g. `docker push`.
    pub push_command: String,
    /// Repository prefix for image names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    /// Version tag appended to image names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_tag: Option<String>,
    /// Shared token-signing secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_secret: Option<SharedSecret>,
    /// Directory holding the application folders, relative to the output directory.
    pub directory_path: String,
    /// Application folders in apply order.
    pub apps_folders: Vec<String>,
    /// Application folders whose database runs clustered.
    pub clustered_db_apps: Vec<String>,
    /// Service-discovery backend shared by all applications.
    pub service_discovery: ServiceDiscovery,
    /// Monitoring integration.
    pub monitoring: Monitoring,
    /// Unrecognized keys preserved verbatim.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            service_type: ServiceType::default(),
            ingress_domain: None,
            istio: false,
            istio_route: false,
            push_command: default_push_command(),
            repository_name: None,
            image_tag: None,
            jwt_secret: None,
            directory_path: default_directory_path(),
            apps_folders: Vec::new(),
            clustered_db_apps: Vec::new(),
            service_discovery: ServiceDiscovery::default(),
            monitoring: Monitoring::default(),
            extra: toml::Table::new(),
        }
    }
}

fn default_push_command() -> String {
    "docker push".to_string()
}

fn default_directory_path() -> String {
    "../".to_string()
}

impl RunConfig {
    /// Parse persisted TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize for persistence.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Whether kubectl commands need an explicit namespace qualifier.
    pub fn is_default_namespace(&self) -> bool {
        self.namespace == DEFAULT_NAMESPACE
    }

    /// ` -n <namespace>` or an empty string for the default namespace.
    pub fn namespace_suffix(&self) -> String {
        if self.is_default_namespace() { String::new() } else { format!(" -n {}", self.namespace) }
    }

    /// Whether the application folder is listed as running a clustered database.
    pub fn is_clustered_db_app(&self, folder: &str) -> bool {
        self.clustered_db_apps.iter().any(|app| app == folder)
    }
}
