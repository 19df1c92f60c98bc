pub mod descriptor;
pub mod kinds;
pub mod record;

pub use descriptor::{
    ApplicationDescriptor, ArtifactStatus, CLUSTERED_PEER_COUNT, STANDALONE_PEER_COUNT,
    resolved_peer_count,
};
pub use kinds::{ApplicationType, AuthenticationType, BuildTool, DatabaseType, MessageBroker};
pub use record::{ApplicationRecord, RECORD_FILE, RECORD_SECTION};
