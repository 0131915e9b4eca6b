//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product exists with the given id.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// The fetch layer failed (network, timeout, server). The detail string
    /// is surfaced verbatim in the normalized failure message.
    #[error("{0}")]
    Backend(String),
}
