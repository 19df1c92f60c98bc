use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::{ManifestFile, ManifestSink};

/// Writes generated files below an output directory.
#[derive(Debug, Clone)]
pub struct FilesystemManifestSink {
    root: PathBuf,
}

impl FilesystemManifestSink {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ManifestSink for FilesystemManifestSink {
    fn write(&self, file: &ManifestFile) -> Result<(), AppError> {
        let path = self.root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
        Ok(())
    }

    fn make_executable(&self, path: &str) -> Result<(), AppError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let path = self.root.join(path);
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = path;
        Ok(())
    }
}
