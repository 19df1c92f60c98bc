use crate::domain::{ApplicationDescriptor, ArtifactStatus};

/// Port for checking whether an application's image build artifact exists.
pub trait ArtifactProbe {
    fn check(&self, application: &ApplicationDescriptor) -> ArtifactStatus;
}
