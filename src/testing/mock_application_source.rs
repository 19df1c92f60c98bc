use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ApplicationSource;

/// In-memory application folders keyed by path.
#[derive(Default)]
pub struct MockApplicationSource {
    folders: BTreeSet<PathBuf>,
    records: BTreeMap<PathBuf, String>,
}

#[allow(dead_code)]
impl MockApplicationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_empty_folder(mut self, path: &str) -> Self {
        self.folders.insert(PathBuf::from(path));
        self
    }

    pub fn with_record(mut self, path: &str, content: &str) -> Self {
        self.folders.insert(PathBuf::from(path));
        self.records.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_app(self, path: &str, base_name: &str, application_type: &str) -> Self {
        let content = format!(
            r#"{{"generator-jhipster": {{"baseName": "{}", "applicationType": "{}"}}}}"#,
            base_name, application_type
        );
        self.with_record(path, &content)
    }
}

impl ApplicationSource for MockApplicationSource {
    fn folder_exists(&self, folder: &Path) -> bool {
        self.folders.contains(folder)
    }

    fn read_record(&self, folder: &Path) -> Result<Option<String>, AppError> {
        Ok(self.records.get(folder).cloned())
    }

    fn candidate_folders(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        Ok(self
            .records
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect())
    }
}
