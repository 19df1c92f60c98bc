mod application_source;
mod artifact_probe;
mod cluster_cli;
mod config_store;
mod manifest_sink;
mod prompter;

pub use application_source::ApplicationSource;
pub use artifact_probe::ArtifactProbe;
pub use cluster_cli::{ClusterCliProbe, CliStatus};
pub use config_store::ConfigStore;
pub use manifest_sink::{ManifestFile, ManifestSink};
pub use prompter::Prompter;
