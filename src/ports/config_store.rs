use crate::domain::{AppError, RunConfig};

/// Port for the persisted run configuration.
pub trait ConfigStore {
    /// Load the persisted configuration, or `None` on a first run.
    fn load(&self) -> Result<Option<RunConfig>, AppError>;

    /// Persist the configuration, replacing the previous one.
    fn save(&self, config: &RunConfig) -> Result<(), AppError>;
}
