use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;

use crate::domain::AppError;
use crate::ports::{ManifestFile, ManifestSink};

/// In-memory sink capturing written files.
#[derive(Default)]
pub struct MockManifestSink {
    pub files: RefCell<BTreeMap<String, String>>,
    pub executables: RefCell<Vec<String>>,
    pub fail_chmod: bool,
}

#[allow(dead_code)]
impl MockManifestSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_chmod() -> Self {
        Self { fail_chmod: true, ..Self::default() }
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl ManifestSink for MockManifestSink {
    fn write(&self, file: &ManifestFile) -> Result<(), AppError> {
        self.files.borrow_mut().insert(file.path.clone(), file.content.clone());
        Ok(())
    }

    fn make_executable(&self, path: &str) -> Result<(), AppError> {
        if self.fail_chmod {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem").into());
        }
        self.executables.borrow_mut().push(path.to_string());
        Ok(())
    }
}
