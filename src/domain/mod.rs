pub mod application;
pub mod configuration;
pub mod error;
pub mod identifiers;
pub mod image_name;
pub mod plan;
pub mod report;
pub mod secret;

pub use application::{
    ApplicationDescriptor, ApplicationRecord, ApplicationType, ArtifactStatus,
    AuthenticationType, BuildTool, DatabaseType, MessageBroker, RECORD_FILE, RECORD_SECTION,
};
pub use configuration::{DEFAULT_NAMESPACE, Monitoring, RunConfig, ServiceDiscovery, ServiceType};
pub use error::AppError;
pub use identifiers::BaseName;
pub use image_name::{ImageNameResolver, ImageObservation};
pub use plan::{DeploymentPlan, MissingArtifact, PlanComposer, PlanInputs, TypeCounts};
pub use report::{DRIVER_SCRIPT, Report, ReportLine};
pub use secret::{SecretOrigin, SecretProvisioner, SharedSecret};
