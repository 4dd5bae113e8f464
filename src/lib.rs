//! Idempotent provisioning of digital-twin space hierarchies.
//!
//! A YAML topology describes a tree of named spaces. Each space is matched
//! against the management API by name and parent; a unique match is reused,
//! otherwise the space is created. Children are provisioned under their
//! parent's id, so re-running the same topology creates nothing new.
//!
//! ```no_run
//! use std::sync::Arc;
//! use twin_provision::{provision_topology_file, HttpTwinClient, SpaceProvisioner, TwinConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TwinConfig::from_env()?;
//! let provisioner = SpaceProvisioner::new(Arc::new(HttpTwinClient::new(&config)?));
//! let report = provision_topology_file(&provisioner, "config/provision-sample.yaml").await?;
//! println!("{:?}", report.space_ids());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod provision;
pub mod topology;
pub mod twin;

pub use config::TwinConfig;
pub use error::{CreateError, ProvisionError, TwinApiError};
pub use provision::{
    provision_topology_file, ProvisionReport, ProvisionedSpace, SkipReason, SpaceOutcome,
    SpaceProvisioner,
};
pub use topology::{load_topology, parse_topology, SpaceDescription};
pub use twin::{HttpTwinClient, Space, SpaceCreate, TwinApi};
