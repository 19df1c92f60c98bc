use std::path::PathBuf;

use crate::domain::{
    ApplicationDescriptor, ApplicationType, ArtifactStatus, AuthenticationType, BaseName,
    BuildTool, DatabaseType, MessageBroker,
};

/// Builder for descriptors in unit tests.
pub struct DescriptorBuilder {
    descriptor: ApplicationDescriptor,
}

#[allow(dead_code)]
impl DescriptorBuilder {
    pub fn new(base_name: &str, application_type: ApplicationType) -> Self {
        let base_name = BaseName::new(base_name).expect("valid base name in test");
        Self {
            descriptor: ApplicationDescriptor {
                image_name: base_name.image_name(),
                folder: base_name.as_str().to_string(),
                path: PathBuf::from("..").join(base_name.as_str()),
                base_name,
                application_type,
                server_port: 8080,
                database: None,
                clustered_db: false,
                message_broker: None,
                build_tool: BuildTool::Maven,
                authentication_type: AuthenticationType::Jwt,
                needs_shared_secret: false,
                artifact: ArtifactStatus::Unchecked,
            },
        }
    }

    pub fn gateway(base_name: &str) -> Self {
        Self::new(base_name, ApplicationType::Gateway)
    }

    pub fn monolith(base_name: &str) -> Self {
        Self::new(base_name, ApplicationType::Monolith)
    }

    pub fn microservice(base_name: &str) -> Self {
        Self::new(base_name, ApplicationType::Microservice)
    }

    pub fn folder(mut self, folder: &str) -> Self {
        self.descriptor.folder = folder.to_string();
        self.descriptor.path = PathBuf::from("..").join(folder);
        self
    }

    pub fn clustered_db(mut self, clustered: bool) -> Self {
        self.descriptor.clustered_db = clustered;
        self
    }

    pub fn database(mut self, database: DatabaseType) -> Self {
        self.descriptor.database = Some(database);
        self
    }

    pub fn kafka(mut self) -> Self {
        self.descriptor.message_broker = Some(MessageBroker::Kafka);
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.descriptor.server_port = port;
        self
    }

    pub fn needs_shared_secret(mut self, needs: bool) -> Self {
        self.descriptor.needs_shared_secret = needs;
        self
    }

    pub fn artifact_missing(mut self, remediation: &str) -> Self {
        self.descriptor.artifact = ArtifactStatus::Missing { remediation: remediation.to_string() };
        self
    }

    pub fn build(self) -> ApplicationDescriptor {
        self.descriptor
    }
}
