use std::path::{Path, PathBuf};

use crate::ports::{ApplicationSource, ArtifactProbe, ClusterCliProbe, ConfigStore, ManifestSink};

/// Application context holding dependencies for command execution.
pub struct AppContext<S, C, M, A, K>
where
    S: ApplicationSource,
    C: ConfigStore,
    M: ManifestSink,
    A: ArtifactProbe,
    K: ClusterCliProbe,
{
    output_root: PathBuf,
    source: S,
    config_store: C,
    sink: M,
    artifacts: A,
    cluster_cli: K,
}

impl<S, C, M, A, K> AppContext<S, C, M, A, K>
where
    S: ApplicationSource,
    C: ConfigStore,
    M: ManifestSink,
    A: ArtifactProbe,
    K: ClusterCliProbe,
{
    pub fn new(
        output_root: PathBuf,
        source: S,
        config_store: C,
        sink: M,
        artifacts: A,
        cluster_cli: K,
    ) -> Self {
        Self { output_root, source, config_store, sink, artifacts, cluster_cli }
    }

    /// Directory receiving the generated files and the persisted configuration.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config_store(&self) -> &C {
        &self.config_store
    }

    pub fn sink(&self) -> &M {
        &self.sink
    }

    pub fn artifacts(&self) -> &A {
        &self.artifacts
    }

    pub fn cluster_cli(&self) -> &K {
        &self.cluster_cli
    }
}
