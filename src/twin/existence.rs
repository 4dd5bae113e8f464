//! Unique-space lookup
//!
//! A lookup only counts as a hit when the service returns exactly one space
//! with the given name under the given parent. Errors, no match and several
//! matches all come back as `None`, so the caller goes on to create.

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::api::TwinApi;
use super::types::Space;

/// OData filter selecting spaces by name under `parent` (or at the root)
pub fn space_filter(name: &str, parent: Option<Uuid>) -> String {
    let name_filter = format!("Name eq '{}'", name.replace('\'', "''"));
    let parent_filter = match parent {
        Some(id) => format!("ParentSpaceId eq guid'{}'", id),
        None => "ParentSpaceId eq null".to_string(),
    };
    format!("{} and {}", name_filter, parent_filter)
}

/// Return the space with this name and parent if there is exactly one
pub async fn find_unique_space(
    api: &dyn TwinApi,
    name: &str,
    parent: Option<Uuid>,
) -> Option<Space> {
    let filter = space_filter(name, parent);

    let mut spaces = match api.query_spaces(&filter).await {
        Ok(spaces) => spaces,
        Err(e) => {
            warn!(name, error = %e, "Space lookup failed, treating as not found");
            return None;
        }
    };

    if spaces.len() != 1 {
        debug!(name, matches = spaces.len(), "No unique space found");
        return None;
    }

    let space = spaces.remove(0);
    info!(
        "Retrieved Unique Space using 'name' and 'parentSpaceId': {}",
        serde_json::to_string_pretty(&space).unwrap_or_else(|_| format!("{:?}", space))
    );
    Some(space)
}
