//! Space tree provisioning
//!
//! Walks a topology depth-first. For each space it reuses a unique existing
//! match or creates a new one, then descends into the children with that id
//! as their parent. A space that cannot be reused or created is skipped
//! together with its whole subtree; its siblings carry on.
//!
//! Requests are issued one at a time, in document order.

pub mod report;

pub use report::{ProvisionReport, ProvisionedSpace, SkipReason, SpaceOutcome};

use std::path::Path;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::topology::{load_topology, SpaceDescription};
use crate::twin::{create_space, find_unique_space, SpaceCreate, TwinApi};

pub struct SpaceProvisioner {
    api: Arc<dyn TwinApi>,
}

impl SpaceProvisioner {
    pub fn new(api: Arc<dyn TwinApi>) -> Self {
        Self { api }
    }

    /// Provision `nodes` under `parent` (`None` for the root level)
    pub async fn provision(
        &self,
        nodes: &[SpaceDescription],
        parent: Option<Uuid>,
    ) -> ProvisionReport {
        ProvisionReport {
            spaces: self.provision_level(nodes, parent).await,
        }
    }

    /// Ids of every provisioned space, parents before their children
    pub async fn provision_space_ids(
        &self,
        nodes: &[SpaceDescription],
        parent: Option<Uuid>,
    ) -> Vec<Uuid> {
        self.provision(nodes, parent).await.space_ids()
    }

    fn provision_level<'a>(
        &'a self,
        nodes: &'a [SpaceDescription],
        parent: Option<Uuid>,
    ) -> BoxFuture<'a, Vec<ProvisionedSpace>> {
        async move {
            let mut provisioned = Vec::with_capacity(nodes.len());

            for node in nodes {
                let outcome = self.reuse_or_create(node, parent).await;
                info!("");

                let children = match outcome.id() {
                    Some(id) => {
                        warn_unprovisioned_children(node);
                        if node.spaces.is_empty() {
                            vec![]
                        } else {
                            self.provision_level(&node.spaces, Some(id)).await
                        }
                    }
                    None => {
                        if let SpaceOutcome::Skipped { reason } = &outcome {
                            warn!(
                                space = %node.name,
                                ?reason,
                                descendants = node.subtree_len() - 1,
                                "Skipping space and its subtree"
                            );
                        }
                        vec![]
                    }
                };

                provisioned.push(ProvisionedSpace {
                    name: node.name.clone(),
                    outcome,
                    children,
                });
            }

            provisioned
        }
        .boxed()
    }

    async fn reuse_or_create(&self, node: &SpaceDescription, parent: Option<Uuid>) -> SpaceOutcome {
        let request = SpaceCreate::new(node.name.clone(), parent);

        if let Some(existing) = find_unique_space(self.api.as_ref(), &node.name, parent).await {
            return if existing.id.is_nil() {
                SpaceOutcome::Skipped {
                    reason: SkipReason::NilIdentifier,
                }
            } else {
                SpaceOutcome::Reused { id: existing.id }
            };
        }

        match create_space(self.api.as_ref(), &request).await {
            Ok(id) => SpaceOutcome::Created { id },
            Err(e) => SpaceOutcome::Skipped { reason: e.into() },
        }
    }
}

fn warn_unprovisioned_children(node: &SpaceDescription) {
    if !node.devices.is_empty() {
        warn!(
            space = %node.name,
            count = node.devices.len(),
            "Device provisioning is not supported, devices ignored"
        );
    }
    if !node.resources.is_empty() {
        warn!(
            space = %node.name,
            count = node.resources.len(),
            "Resource provisioning is not supported, resources ignored"
        );
    }
}

/// Load a topology file and provision it from the root.
///
/// Topology errors are returned before any request is made.
pub async fn provision_topology_file<P: AsRef<Path>>(
    provisioner: &SpaceProvisioner,
    path: P,
) -> Result<ProvisionReport> {
    let topology = load_topology(path)?;
    let report = provisioner.provision(&topology, None).await;

    let ids = report.space_ids();
    if ids.is_empty() {
        info!("No spaces were provisioned");
    } else {
        let ids: Vec<String> = ids.iter().map(Uuid::to_string).collect();
        info!("Created spaces: {}", ids.join(", "));
    }

    Ok(report)
}
