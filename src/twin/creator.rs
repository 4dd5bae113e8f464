//! Space creation and id extraction

use tracing::{error, info};
use uuid::Uuid;

use super::api::TwinApi;
use super::types::SpaceCreate;
use crate::error::CreateError;

/// POST a new space and return the id the service assigned to it
pub async fn create_space(api: &dyn TwinApi, request: &SpaceCreate) -> Result<Uuid, CreateError> {
    info!(
        "Creating Space: {}",
        serde_json::to_string_pretty(request).unwrap_or_else(|_| format!("{:?}", request))
    );

    let body = api.post_space(request).await.map_err(|e| {
        error!(name = %request.name, error = %e, "Space creation failed");
        CreateError::from(e)
    })?;

    parse_created_id(&body).map_err(|e| {
        error!(error = %e, "Created space id could not be decoded");
        e
    })
}

/// Decode the quoted guid returned by `POST spaces`.
///
/// Exactly one leading and one trailing character are dropped before
/// decoding; no other trimming happens.
pub fn parse_created_id(body: &str) -> Result<Uuid, CreateError> {
    let invalid = || CreateError::InvalidIdentifier {
        body: body.to_string(),
    };

    let mut chars = body.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(invalid());
    }

    let id = Uuid::parse_str(chars.as_str()).map_err(|_| invalid())?;
    if id.is_nil() {
        return Err(CreateError::NilIdentifier);
    }
    Ok(id)
}
