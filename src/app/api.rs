//! API facade: builds the filesystem-backed context and runs commands.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::generate;
use crate::ports::Prompter;
use crate::services::{
    FilesystemApplicationSource, FilesystemManifestSink, JibCacheProbe, KubectlProbe,
    TomlConfigStore,
};

pub use crate::app::commands::configure::RunConfigOverrides;
pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::domain::AppError;

type FilesystemContext = AppContext<
    FilesystemApplicationSource,
    TomlConfigStore,
    FilesystemManifestSink,
    JibCacheProbe,
    KubectlProbe,
>;

fn create_context(output_root: PathBuf) -> FilesystemContext {
    AppContext::new(
        output_root.clone(),
        FilesystemApplicationSource::new(),
        TomlConfigStore::new(output_root.clone()),
        FilesystemManifestSink::new(output_root),
        JibCacheProbe::new(),
        KubectlProbe::new(),
    )
}

/// Generate manifests into the current directory without asking questions.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, None, options)
}

/// Generate manifests into `output_root`, asking questions when a prompter is given.
pub fn generate_at(
    output_root: impl Into<PathBuf>,
    prompter: Option<&dyn Prompter>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(output_root.into());
    generate::execute(&ctx, prompter, options)
}
