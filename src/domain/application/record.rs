//! Per-application record left behind by the application generator.

use serde::de::{self, IntoDeserializer, value::StringDeserializer};
use serde::{Deserialize, Deserializer};

use super::kinds::{ApplicationType, AuthenticationType, BuildTool, DatabaseType, MessageBroker};
use crate::domain::ServiceDiscovery;

/// File holding the record inside each application folder.
pub const RECORD_FILE: &str = ".yo-rc.json";

/// Top-level key of the record inside [`RECORD_FILE`].
pub const RECORD_SECTION: &str = "generator-jhipster";

/// Raw facts about one application, as persisted by its generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub base_name: String,
    pub application_type: ApplicationType,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default, deserialize_with = "optional_feature")]
    pub prod_database_type: Option<DatabaseType>,
    #[serde(default, deserialize_with = "optional_feature")]
    pub message_broker: Option<MessageBroker>,
    #[serde(default)]
    pub build_tool: BuildTool,
    #[serde(default, deserialize_with = "optional_feature")]
    pub service_discovery_type: Option<ServiceDiscovery>,
    #[serde(default)]
    pub authentication_type: AuthenticationType,
    #[serde(default)]
    pub clustered_db: bool,
}

fn default_server_port() -> u16 {
    8080
}

#[derive(Deserialize)]
struct RecordFile {
    #[serde(rename = "generator-jhipster")]
    section: Option<ApplicationRecord>,
}

impl ApplicationRecord {
    /// Parse the content of a record file.
    ///
    /// Returns `Ok(None)` when the file is valid JSON without a generator section.
    pub fn parse_json(content: &str) -> Result<Option<Self>, serde_json::Error> {
        let file: RecordFile = serde_json::from_str(content)?;
        Ok(file.section)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Toggle {
    Flag(bool),
    Name(String),
}

/// Features are stored either as `false` or as a name; `"no"` also means disabled.
fn optional_feature<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Toggle>::deserialize(deserializer)? {
        None | Some(Toggle::Flag(false)) => Ok(None),
        Some(Toggle::Flag(true)) => Err(de::Error::custom("expected a name or false, found true")),
        Some(Toggle::Name(name)) if name.is_empty() || name == "no" => Ok(None),
        Some(Toggle::Name(name)) => {
            let named: StringDeserializer<D::Error> = name.into_deserializer();
            T::deserialize(named).map(Some)
        }
    }
}
