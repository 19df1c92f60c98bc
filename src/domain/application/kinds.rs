use std::fmt;

use serde::{Deserialize, Serialize};

/// Architecture of a generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    Monolith,
    Gateway,
    Microservice,
}

impl ApplicationType {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationType::Monolith => "monolith",
            ApplicationType::Gateway => "gateway",
            ApplicationType::Microservice => "microservice",
        }
    }

    /// Gateways and monoliths are reachable from outside the cluster.
    pub fn is_exposed(self) -> bool {
        matches!(self, ApplicationType::Gateway | ApplicationType::Monolith)
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Message broker an application talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageBroker {
    Kafka,
}

/// Production database engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Mysql,
    Mariadb,
    Postgresql,
    Mongodb,
}

impl DatabaseType {
    pub fn label(self) -> &'static str {
        match self {
            DatabaseType::Mysql => "mysql",
            DatabaseType::Mariadb => "mariadb",
            DatabaseType::Postgresql => "postgresql",
            DatabaseType::Mongodb => "mongodb",
        }
    }

    pub fn image(self) -> &'static str {
        match self {
            DatabaseType::Mysql => "mysql:8.0.16",
            DatabaseType::Mariadb => "mariadb:10.4.6",
            DatabaseType::Postgresql => "postgres:11.3",
            DatabaseType::Mongodb => "mongo:4.0.10",
        }
    }

    pub fn port(self) -> u16 {
        match self {
            DatabaseType::Mysql | DatabaseType::Mariadb => 3306,
            DatabaseType::Postgresql => 5432,
            DatabaseType::Mongodb => 27017,
        }
    }

    /// Container environment for a database owned by `app_name`.
    pub fn container_env(self, app_name: &str) -> Vec<(String, String)> {
        match self {
            DatabaseType::Mysql | DatabaseType::Mariadb => vec![
                ("MYSQL_ALLOW_EMPTY_PASSWORD".to_string(), "yes".to_string()),
                ("MYSQL_DATABASE".to_string(), app_name.to_string()),
            ],
            DatabaseType::Postgresql => vec![
                ("POSTGRES_USER".to_string(), app_name.to_string()),
                ("POSTGRES_PASSWORD".to_string(), String::new()),
            ],
            DatabaseType::Mongodb => Vec::new(),
        }
    }
}

/// Build tool, used to suggest the image build command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    #[default]
    Maven,
    Gradle,
}

impl BuildTool {
    /// Relative path of the Jib build cache.
    pub fn jib_cache_dir(self) -> &'static str {
        match self {
            BuildTool::Maven => "target/jib-cache",
            BuildTool::Gradle => "build/jib-cache",
        }
    }

    /// Command that builds the local image.
    pub fn image_build_command(self) -> &'static str {
        match self {
            BuildTool::Maven => "./mvnw -ntp -Pprod verify jib:dockerBuild",
            BuildTool::Gradle => "./gradlew bootJar -Pprod jibDockerBuild",
        }
    }
}

/// Authentication scheme of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthenticationType {
    #[default]
    Jwt,
    Oauth2,
    Session,
}
