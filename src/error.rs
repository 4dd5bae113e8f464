//! Error types for topology loading, configuration and the management API
//!
//! `ProvisionError` is fatal and always raised before the first remote call.
//! `TwinApiError` and `CreateError` stay local to a single space: the
//! provisioner folds them into that space's outcome and keeps going.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a provisioning pass before it starts
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Topology parse error: {0}")]
    Topology(#[from] serde_yaml::Error),

    #[error("Invalid topology at '{path}': {message}")]
    InvalidTopology { path: String, message: String },

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors returned by a `TwinApi` call
#[derive(Error, Debug)]
pub enum TwinApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Management API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Why a space could not be created
#[derive(Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Api(#[from] TwinApiError),

    #[error("Returned value from POST did not parse into a guid: {body}")]
    InvalidIdentifier { body: String },

    #[error("Returned value from POST was the nil guid")]
    NilIdentifier,
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
