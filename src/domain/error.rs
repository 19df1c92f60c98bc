use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for kubegen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Application folder does not exist on disk.
    #[error("Application folder not found: {}", .0.display())]
    InvalidApplicationPath(PathBuf),

    /// Application folder has no prior-generation record.
    #[error(
        "No application record found in {}. Generate the application first (.yo-rc.json with a 'generator-jhipster' section is required).",
        .0.display()
    )]
    MissingApplicationConfig(PathBuf),

    /// Application record exists but could not be understood.
    #[error("Malformed application record in {}: {details}", path.display())]
    MalformedApplicationConfig { path: PathBuf, details: String },

    /// Two applications map to the same Kubernetes object name.
    #[error(
        "Application '{0}' clashes with another application's Kubernetes name; base names must stay unique once lower-cased with '_' read as '-'"
    )]
    DuplicateApplication(String),

    /// Application base name is invalid.
    #[error(
        "Invalid application base name '{0}': must start with a letter, end with a letter or digit, and use only letters, digits, '-' or '_'"
    )]
    InvalidBaseName(String),

    /// Repository name is not a valid image repository reference.
    #[error("Invalid repository name '{name}': {reason}")]
    InvalidRepositoryName { name: String, reason: String },

    /// Image tag is not a valid tag.
    #[error(
        "Invalid image tag '{0}': use up to 128 letters, digits, '_', '.' or '-', not starting with '.' or '-'"
    )]
    InvalidImageTag(String),

    /// Namespace is empty or not a valid RFC 1123 label.
    #[error(
        "Invalid namespace '{0}': must be 1-63 lowercase alphanumeric characters or '-', starting and ending with an alphanumeric"
    )]
    InvalidNamespace(String),

    /// Istio routing requested while Istio itself is disabled.
    #[error("Istio route files were requested but Istio is not enabled. Enable Istio or disable route generation.")]
    IstioRouteWithoutMesh,

    /// Ingress service type without an ingress domain.
    #[error("Service type 'Ingress' requires an ingress domain (e.g. 192.168.99.100.nip.io)")]
    IngressDomainMissing,

    /// No applications selected for the run.
    #[error("No applications selected. Pass --apps or select applications interactively.")]
    NoApplications,

    /// The randomness source failed while generating the shared secret.
    #[error("Failed to generate shared secret: {0}")]
    SecretGenerationFailed(String),

    /// A textual value did not match any known option.
    #[error("Unknown {what} '{value}'. Expected one of: {expected}")]
    UnknownValue { what: &'static str, value: String, expected: String },

    /// Manifest template could not be loaded or rendered.
    #[error("Template error in {template}: {details}")]
    Template { template: String, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers classifying failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MalformedApplicationConfig { .. }
            | AppError::DuplicateApplication(_)
            | AppError::InvalidBaseName(_)
            | AppError::InvalidRepositoryName { .. }
            | AppError::InvalidImageTag(_)
            | AppError::InvalidNamespace(_)
            | AppError::IstioRouteWithoutMesh
            | AppError::IngressDomainMissing
            | AppError::NoApplications
            | AppError::UnknownValue { .. }
            | AppError::Template { .. }
            | AppError::TomlParseError(_)
            | AppError::TomlSerializeError(_) => io::ErrorKind::InvalidInput,
            AppError::InvalidApplicationPath(_) | AppError::MissingApplicationConfig(_) => {
                io::ErrorKind::NotFound
            }
            AppError::SecretGenerationFailed(_) | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
