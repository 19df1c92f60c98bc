use std::collections::BTreeSet;
use std::time::Duration;

use crate::domain::{ApplicationDescriptor, ArtifactStatus};
use crate::ports::{ArtifactProbe, CliStatus, ClusterCliProbe};

/// Reports the listed applications as missing their build artifact.
#[derive(Default)]
pub struct StubArtifactProbe {
    missing: BTreeSet<String>,
}

#[allow(dead_code)]
impl StubArtifactProbe {
    pub fn all_present() -> Self {
        Self::default()
    }

    pub fn missing(folders: &[&str]) -> Self {
        Self { missing: folders.iter().map(|f| f.to_string()).collect() }
    }
}

impl ArtifactProbe for StubArtifactProbe {
    fn check(&self, application: &ApplicationDescriptor) -> ArtifactStatus {
        if self.missing.contains(&application.folder) {
            ArtifactStatus::Missing {
                remediation: application.build_tool.image_build_command().to_string(),
            }
        } else {
            ArtifactStatus::Present
        }
    }
}

/// Returns a fixed CLI status.
pub struct StubCliProbe(pub CliStatus);

impl ClusterCliProbe for StubCliProbe {
    fn check(&self, _timeout: Duration) -> CliStatus {
        self.0.clone()
    }
}
