//! Per-space provisioning outcomes

use serde::Serialize;
use uuid::Uuid;

use crate::error::CreateError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SpaceOutcome {
    /// A unique existing space was found
    Reused { id: Uuid },
    Created { id: Uuid },
    /// Neither reused nor created; children were not visited
    Skipped { reason: SkipReason },
}

impl SpaceOutcome {
    pub fn id(&self) -> Option<Uuid> {
        match self {
            SpaceOutcome::Reused { id } | SpaceOutcome::Created { id } => Some(*id),
            SpaceOutcome::Skipped { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The create call failed or was rejected
    CreateFailed(String),
    /// The create response did not contain a usable guid
    InvalidIdentifier(String),
    /// The matched or created space carried the nil guid
    NilIdentifier,
}

impl From<CreateError> for SkipReason {
    fn from(err: CreateError) -> Self {
        match err {
            CreateError::Api(e) => SkipReason::CreateFailed(e.to_string()),
            CreateError::InvalidIdentifier { body } => SkipReason::InvalidIdentifier(body),
            CreateError::NilIdentifier => SkipReason::NilIdentifier,
        }
    }
}

/// A space from the topology annotated with what happened to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvisionedSpace {
    pub name: String,
    #[serde(flatten)]
    pub outcome: SpaceOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ProvisionedSpace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProvisionReport {
    pub spaces: Vec<ProvisionedSpace>,
}

impl ProvisionReport {
    /// Ids of every reused or created space, parents before their children
    pub fn space_ids(&self) -> Vec<Uuid> {
        let mut ids = Vec::new();
        self.walk(&mut |space| ids.extend(space.outcome.id()));
        ids
    }

    pub fn created_count(&self) -> usize {
        self.count(|o| matches!(o, SpaceOutcome::Created { .. }))
    }

    pub fn reused_count(&self) -> usize {
        self.count(|o| matches!(o, SpaceOutcome::Reused { .. }))
    }

    pub fn skipped(&self) -> Vec<&ProvisionedSpace> {
        let mut skipped = Vec::new();
        fn collect<'a>(spaces: &'a [ProvisionedSpace], out: &mut Vec<&'a ProvisionedSpace>) {
            for space in spaces {
                if matches!(space.outcome, SpaceOutcome::Skipped { .. }) {
                    out.push(space);
                }
                collect(&space.children, out);
            }
        }
        collect(&self.spaces, &mut skipped);
        skipped
    }

    fn count(&self, pred: impl Fn(&SpaceOutcome) -> bool) -> usize {
        let mut n = 0;
        self.walk(&mut |space| {
            if pred(&space.outcome) {
                n += 1;
            }
        });
        n
    }

    fn walk(&self, visit: &mut dyn FnMut(&ProvisionedSpace)) {
        fn go(spaces: &[ProvisionedSpace], visit: &mut dyn FnMut(&ProvisionedSpace)) {
            for space in spaces {
                visit(space);
                go(&space.children, visit);
            }
        }
        go(&self.spaces, visit);
    }
}
