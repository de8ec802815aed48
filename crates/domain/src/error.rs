//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FleetError`]
//! via `#[from]`. The `Display` strings of [`NotFoundError`] are part of the
//! HTTP contract: they are returned verbatim in 404 bodies.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup matched nothing in the catalog.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Invariant violations detected while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("device id must not be empty")]
    EmptyDeviceId,

    #[error("client must not be empty for device {0}")]
    EmptyClient(String),

    #[error("duplicate device id: {0}")]
    DuplicateDeviceId(String),
}

/// A device or client lookup matched no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// No device has the requested id.
    #[error("Device not found")]
    Device { id: String },

    /// No device belongs to the requested client.
    #[error("No devices found for this client")]
    Client { client: String },
}
