use crate::domain::AppError;

/// A rendered file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    /// Path relative to the output directory.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: String,
}

/// Port for writing generated files.
pub trait ManifestSink {
    fn write(&self, file: &ManifestFile) -> Result<(), AppError>;

    /// Mark a written file executable.
    fn make_executable(&self, path: &str) -> Result<(), AppError>;
}
