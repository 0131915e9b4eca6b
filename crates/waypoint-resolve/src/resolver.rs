//! The prefetch gateway contract.

use async_trait::async_trait;

use crate::resolved::Resolved;

/// A route-scoped prefetch gateway.
///
/// The navigation layer calls `resolve` with the raw key extracted from the
/// route, waits for the result, and only then activates the page. The
/// implementation must validate the key before any I/O and absorb fetch
/// errors into `Resolved::Failure` — `resolve` itself is infallible.
///
/// Retry policy, if any, belongs to the fetch dependency behind the
/// implementation, never to the gateway.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// The prefetched resource type.
    type Resource;

    /// Prefetch the resource for a raw route key.
    async fn resolve(&self, key: &str) -> Resolved<Self::Resource>;
}
