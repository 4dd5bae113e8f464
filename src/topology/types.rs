//! Topology document types
//!
//! Field names follow the YAML documents used for twin provisioning
//! (`name`, `type`, `subType`, `hardwareId`).

use serde::{Deserialize, Serialize};

/// A space to provision, with its nested children
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpaceDescription {
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub space_type: Option<String>,

    #[serde(rename = "subType", default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,

    /// Child spaces, provisioned in document order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub spaces: Vec<SpaceDescription>,

    /// Parsed but never provisioned
    #[serde(default, deserialize_with = "null_as_empty")]
    pub devices: Vec<DeviceDescription>,

    /// Parsed but never provisioned
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resources: Vec<ResourceDescription>,
}

impl SpaceDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            space_type: None,
            sub_type: None,
            spaces: vec![],
            devices: vec![],
            resources: vec![],
        }
    }

    pub fn with_children(mut self, children: Vec<SpaceDescription>) -> Self {
        self.spaces = children;
        self
    }

    /// Number of spaces in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.spaces.iter().map(Self::subtree_len).sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeviceDescription {
    pub name: String,
    #[serde(rename = "hardwareId", default)]
    pub hardware_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceDescription {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "type", default)]
    pub resource_type: Option<String>,
}

/// `spaces:` with no items parses as null in YAML
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
