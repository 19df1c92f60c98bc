use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;
use crate::domain::identifiers::validation::validate_base_name;
use crate::impl_validated_id;

/// A validated application base name.
///
/// Guarantees:
/// - Starts with an ASCII letter
/// - Contains only ASCII alphanumerics, `-` or `_`
/// - Ends with an ASCII alphanumeric
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseName(String);

impl_validated_id!(BaseName, validate_base_name, AppError::InvalidBaseName);

impl BaseName {
    /// Lower-cased form used for image names.
    pub fn image_name(&self) -> String {
        self.0.to_lowercase()
    }

    /// RFC 1123 form used for Kubernetes object names, directories and files.
    pub fn kube_name(&self) -> String {
        self.0.to_lowercase().replace('_', "-")
    }
}

impl<'de> Deserialize<'de> for BaseName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseName::new(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for BaseName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
