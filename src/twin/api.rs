//! TwinApi trait — the boundary between provisioning logic and the transport.

use async_trait::async_trait;

use super::types::{Space, SpaceCreate};
use crate::error::TwinApiError;

pub type ApiResult<T> = std::result::Result<T, TwinApiError>;

#[async_trait]
pub trait TwinApi: Send + Sync {
    /// `GET spaces?$filter=<filter>`
    ///
    /// Non-success statuses are returned as `TwinApiError::Status`.
    async fn query_spaces(&self, filter: &str) -> ApiResult<Vec<Space>>;

    /// `POST spaces`, returning the raw response body on success.
    /// The body is the new id as a JSON string literal.
    async fn post_space(&self, request: &SpaceCreate) -> ApiResult<String>;
}
