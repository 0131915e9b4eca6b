//! Router error types.

use thiserror::Error;

/// Errors that can occur while matching a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// No route matches the path and no wildcard route is registered.
    #[error("No route matches path: {0}")]
    NoMatch(String),

    /// Redirects did not settle within the allowed depth.
    #[error("Redirect loop while matching path: {0}")]
    RedirectLoop(String),
}
