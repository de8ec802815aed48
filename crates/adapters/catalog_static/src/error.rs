//! Catalog adapter error types.

use mockfleet_domain::error::{FleetError, ValidationError};

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid TOML or has the wrong shape.
    #[error("failed to parse catalog file")]
    Parse(#[from] toml::de::Error),

    /// A device record breaks a catalog invariant.
    #[error("invalid catalog")]
    Domain(#[source] FleetError),
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}
