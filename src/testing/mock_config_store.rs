use std::cell::RefCell;

use crate::domain::{AppError, RunConfig};
use crate::ports::ConfigStore;

/// In-memory config store recording every save.
#[derive(Default)]
pub struct MockConfigStore {
    pub persisted: RefCell<Option<RunConfig>>,
    pub saves: RefCell<usize>,
}

#[allow(dead_code)]
impl MockConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(self, config: RunConfig) -> Self {
        *self.persisted.borrow_mut() = Some(config);
        self
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl ConfigStore for MockConfigStore {
    fn load(&self) -> Result<Option<RunConfig>, AppError> {
        Ok(self.persisted.borrow().clone())
    }

    fn save(&self, config: &RunConfig) -> Result<(), AppError> {
        *self.persisted.borrow_mut() = Some(config.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
