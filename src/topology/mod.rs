//! Topology loading
//!
//! Parses the YAML description of the space tree to provision. Parsing and
//! validation finish before any request is sent, so a malformed document
//! never leaves a half-provisioned hierarchy behind.

pub mod types;

pub use types::{DeviceDescription, ResourceDescription, SpaceDescription};

use std::path::Path;

use crate::error::{ProvisionError, Result};

/// Parse a YAML topology into its root-level spaces
pub fn parse_topology(yaml: &str) -> Result<Vec<SpaceDescription>> {
    if yaml.trim().is_empty() {
        return Ok(vec![]);
    }

    let roots: Option<Vec<SpaceDescription>> = serde_yaml::from_str(yaml)?;
    let roots = roots.unwrap_or_default();
    validate_topology(&roots)?;
    Ok(roots)
}

/// Load and parse a YAML topology file
pub fn load_topology<P: AsRef<Path>>(path: P) -> Result<Vec<SpaceDescription>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ProvisionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_topology(&content)
}

fn validate_topology(roots: &[SpaceDescription]) -> Result<()> {
    fn walk(nodes: &[SpaceDescription], prefix: &str) -> Result<()> {
        for (i, node) in nodes.iter().enumerate() {
            let path = if node.name.trim().is_empty() {
                format!("{}[{}]", prefix, i)
            } else {
                format!("{}{}", prefix, node.name)
            };

            if node.name.trim().is_empty() {
                return Err(ProvisionError::InvalidTopology {
                    path,
                    message: "space name must not be blank".to_string(),
                });
            }

            walk(&node.spaces, &format!("{}/", path))?;
        }
        Ok(())
    }

    walk(roots, "")
}
