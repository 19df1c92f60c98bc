use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, RECORD_FILE};
use crate::ports::ApplicationSource;

/// Reads application records from disk.
#[derive(Debug, Clone, Default)]
pub struct FilesystemApplicationSource;

impl FilesystemApplicationSource {
    pub fn new() -> Self {
        Self
    }
}

impl ApplicationSource for FilesystemApplicationSource {
    fn folder_exists(&self, folder: &Path) -> bool {
        folder.is_dir()
    }

    fn read_record(&self, folder: &Path) -> Result<Option<String>, AppError> {
        match fs::read_to_string(folder.join(RECORD_FILE)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn candidate_folders(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut folders = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() && path.join(RECORD_FILE).is_file() {
                folders.push(path);
            }
        }
        folders.sort();
        Ok(folders)
    }
}
