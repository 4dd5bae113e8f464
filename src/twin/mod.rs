//! Digital-twin management API integration
//!
//! This module provides:
//! - Wire types for spaces and space creation requests
//! - The `TwinApi` trait and its reqwest implementation
//! - Unique-space lookup and space creation on top of that trait

pub mod api;
pub mod client;
pub mod creator;
pub mod existence;
pub mod types;

pub use api::{ApiResult, TwinApi};
pub use client::HttpTwinClient;
pub use creator::{create_space, parse_created_id};
pub use existence::{find_unique_space, space_filter};
pub use types::{Space, SpaceCreate};
