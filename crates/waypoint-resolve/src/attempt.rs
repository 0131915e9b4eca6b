//! Navigation attempt tracking and supersession.
//!
//! The gateway itself gives no cross-attempt ordering guarantee, so the
//! navigation layer holds one abort handle per in-flight attempt: beginning
//! a new attempt aborts observation of the prior one, and an aborted
//! attempt's result is discarded instead of reaching a page.

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use tracing::debug;

use crate::resolved::Resolved;
use crate::resolver::Resolve;

/// Identifier of a navigation attempt, for supersession checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

impl std::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attempt-{}", self.0)
    }
}

/// Tracks the single in-flight prefetch attempt per navigator.
///
/// Beginning a new attempt aborts the prior one. Attempts are numbered so a
/// completed attempt can verify it is still current before its result is
/// applied.
#[derive(Debug, Default)]
pub struct AttemptController {
    next: u64,
    current: Option<(AttemptId, AbortHandle)>,
}

impl AttemptController {
    /// Create a controller with no in-flight attempt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new attempt, superseding (aborting) any prior one.
    pub fn begin(&mut self) -> (AttemptId, AbortRegistration) {
        if let Some((prior, handle)) = self.current.take() {
            debug!(%prior, "superseding in-flight prefetch attempt");
            handle.abort();
        }

        let id = AttemptId(self.next);
        self.next += 1;

        let (handle, registration) = AbortHandle::new_pair();
        self.current = Some((id, handle));
        (id, registration)
    }

    /// Whether the given attempt is still the current one.
    pub fn is_current(&self, id: AttemptId) -> bool {
        matches!(self.current, Some((current, _)) if current == id)
    }

    /// Mark an attempt finished; clears it if it is still current.
    pub fn finish(&mut self, id: AttemptId) {
        if self.is_current(id) {
            self.current = None;
        }
    }

    /// Abort the current attempt, if any.
    pub fn abort_current(&mut self) {
        if let Some((prior, handle)) = self.current.take() {
            debug!(%prior, "aborting in-flight prefetch attempt");
            handle.abort();
        }
    }
}

/// Run a resolver under an attempt's abort registration.
///
/// Returns `None` when the attempt was superseded mid-flight; the stale
/// result, if the underlying fetch ever produces one, is dropped here and
/// never observed.
pub async fn resolve_gated<R: Resolve + ?Sized>(
    resolver: &R,
    key: &str,
    registration: AbortRegistration,
) -> Option<Resolved<R::Resource>> {
    match Abortable::new(resolver.resolve(key), registration).await {
        Ok(resolved) => Some(resolved),
        Err(_aborted) => {
            debug!(key, "prefetch superseded; discarding result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NeverResolver;

    #[async_trait]
    impl Resolve for NeverResolver {
        type Resource = u32;

        async fn resolve(&self, _key: &str) -> Resolved<u32> {
            futures::future::pending().await
        }
    }

    struct InstantResolver;

    #[async_trait]
    impl Resolve for InstantResolver {
        type Resource = u32;

        async fn resolve(&self, key: &str) -> Resolved<u32> {
            Resolved::success(key.len() as u32)
        }
    }

    #[tokio::test]
    async fn test_new_attempt_aborts_prior() {
        let mut attempts = AttemptController::new();
        let resolver = NeverResolver;

        let (first, first_reg) = attempts.begin();
        let pending = tokio::spawn(async move { resolve_gated(&resolver, "1", first_reg).await });

        // Superseding navigation begins before the first fetch completes.
        let (second, _second_reg) = attempts.begin();
        assert!(!attempts.is_current(first));
        assert!(attempts.is_current(second));

        // The superseded attempt resolves to nothing, not to a stale result.
        assert_eq!(pending.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_current_attempt_delivers() {
        let mut attempts = AttemptController::new();
        let (id, registration) = attempts.begin();

        let resolved = resolve_gated(&InstantResolver, "abc", registration).await;
        assert_eq!(resolved, Some(Resolved::success(3)));

        assert!(attempts.is_current(id));
        attempts.finish(id);
        assert!(!attempts.is_current(id));
    }

    #[tokio::test]
    async fn test_abort_current_clears() {
        let mut attempts = AttemptController::new();
        let (id, _registration) = attempts.begin();
        attempts.abort_current();
        assert!(!attempts.is_current(id));
    }
}
