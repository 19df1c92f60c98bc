pub mod options;
pub mod run_config;

pub use options::{Monitoring, ServiceDiscovery, ServiceType};
pub use run_config::{DEFAULT_NAMESPACE, RunConfig};
