use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for reading per-application records left by earlier generator runs.
pub trait ApplicationSource {
    /// Whether the application folder exists.
    fn folder_exists(&self, folder: &Path) -> bool;

    /// Raw content of the folder's record file, or `None` when there is none.
    fn read_record(&self, folder: &Path) -> Result<Option<String>, AppError>;

    /// Immediate sub-directories of `dir` that carry a record file.
    fn candidate_folders(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError>;
}
