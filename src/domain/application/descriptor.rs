use std::path::PathBuf;

use super::kinds::{
    ApplicationType, AuthenticationType, BuildTool, DatabaseType, MessageBroker,
};
use crate::domain::BaseName;

/// Database replicas for a clustered database.
pub const CLUSTERED_PEER_COUNT: u8 = 3;

/// Database replicas for a standalone database.
pub const STANDALONE_PEER_COUNT: u8 = 1;

/// Peer count is a function of the clustering flag alone.
pub fn resolved_peer_count(clustered_db: bool) -> u8 {
    if clustered_db { CLUSTERED_PEER_COUNT } else { STANDALONE_PEER_COUNT }
}

/// Whether the image build artifact for an application exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArtifactStatus {
    /// Not inspected (checks skipped).
    #[default]
    Unchecked,
    Present,
    /// Missing; `remediation` is the command that produces it.
    Missing { remediation: String },
}

impl ArtifactStatus {
    pub fn is_missing(&self) -> bool {
        matches!(self, ArtifactStatus::Missing { .. })
    }
}

/// Deployment requirements of one application.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDescriptor {
    pub base_name: BaseName,
    pub application_type: ApplicationType,
    /// Folder name as listed in the run configuration.
    pub folder: String,
    /// Resolved folder path.
    pub path: PathBuf,
    pub server_port: u16,
    pub database: Option<DatabaseType>,
    pub clustered_db: bool,
    pub message_broker: Option<MessageBroker>,
    pub build_tool: BuildTool,
    pub authentication_type: AuthenticationType,
    pub needs_shared_secret: bool,
    /// Registry-qualified image name; starts as the naive name.
    pub image_name: String,
    pub artifact: ArtifactStatus,
}

impl ApplicationDescriptor {
    /// Kubernetes object name.
    pub fn kube_name(&self) -> String {
        self.base_name.kube_name()
    }

    pub fn peer_count(&self) -> u8 {
        resolved_peer_count(self.clustered_db)
    }

    /// Image name produced by a local build.
    pub fn naive_image_name(&self) -> String {
        self.base_name.image_name()
    }

    pub fn has_default_image_name(&self) -> bool {
        self.image_name == self.naive_image_name()
    }

    pub fn uses_kafka(&self) -> bool {
        self.message_broker == Some(MessageBroker::Kafka)
    }
}
