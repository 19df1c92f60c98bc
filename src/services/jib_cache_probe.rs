use crate::domain::{ApplicationDescriptor, ArtifactStatus};
use crate::ports::ArtifactProbe;

/// Looks for the Jib build cache left by a local image build.
#[derive(Debug, Clone, Default)]
pub struct JibCacheProbe;

impl JibCacheProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactProbe for JibCacheProbe {
    fn check(&self, application: &ApplicationDescriptor) -> ArtifactStatus {
        let cache = application.path.join(application.build_tool.jib_cache_dir());
        if cache.is_dir() {
            ArtifactStatus::Present
        } else {
            tracing::debug!(app = %application.base_name, cache = %cache.display(), "no Jib cache");
            ArtifactStatus::Missing {
                remediation: application.build_tool.image_build_command().to_string(),
            }
        }
    }
}
