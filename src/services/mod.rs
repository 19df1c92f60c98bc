mod application_registry;
mod filesystem_application_source;
mod filesystem_manifest_sink;
mod jib_cache_probe;
mod kubectl_probe;
mod manifest_renderer;
mod reporter;
mod toml_config_store;

pub use application_registry::{ApplicationRegistry, requires_shared_secret};
pub use filesystem_application_source::FilesystemApplicationSource;
pub use filesystem_manifest_sink::FilesystemManifestSink;
pub use jib_cache_probe::JibCacheProbe;
pub use kubectl_probe::KubectlProbe;
pub use manifest_renderer::ManifestRenderer;
pub use reporter::PostGenerationReporter;
pub use toml_config_store::{CONFIG_DIR, CONFIG_FILE, TomlConfigStore};
