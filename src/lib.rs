//! kubegen: compose Kubernetes manifests and an apply script for previously
//! generated applications.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{
    GenerateOptions, GenerateOutcome, RunConfigOverrides, generate, generate_at,
};
pub use domain::{
    AppError, DeploymentPlan, ImageObservation, Report, ReportLine, RunConfig, SecretOrigin,
};
