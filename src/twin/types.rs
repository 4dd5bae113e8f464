//! Management API wire types
//!
//! The service uses PascalCase JSON keys and accepts an empty string as the
//! parent of a root-level space.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// A space as returned by `GET spaces`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Space {
    pub id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_parent_id")]
    pub parent_space_id: Option<Uuid>,
    /// Remaining fields (type, status, ...) kept for logging
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST spaces`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpaceCreate {
    pub name: String,
    #[serde(serialize_with = "serialize_parent_id")]
    pub parent_space_id: Option<Uuid>,
}

impl SpaceCreate {
    pub fn new(name: impl Into<String>, parent_space_id: Option<Uuid>) -> Self {
        Self {
            name: name.into(),
            parent_space_id,
        }
    }
}

fn serialize_parent_id<S>(parent: &Option<Uuid>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match parent {
        Some(id) => serializer.collect_str(id),
        None => serializer.serialize_str(""),
    }
}

/// Accepts null, a missing key, `""` or a guid string
fn deserialize_parent_id<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
