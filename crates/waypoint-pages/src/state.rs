//! Page lifecycle state.

use serde::{Deserialize, Serialize};

/// Lifecycle of a page controller for one resource key.
///
/// Prefetch is a blocking gate, so nothing renders during
/// `AwaitingPrefetch`; the page only ever displays a terminal state. A new
/// navigation replaces a terminal state wholesale with a fresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PageState {
    /// No navigation has targeted this page yet.
    #[default]
    Idle,
    /// A navigation is in flight; the prefetch has not completed.
    AwaitingPrefetch,
    /// Prefetch succeeded and found the resource.
    Loaded,
    /// Prefetch failed; the page shows the failure message.
    LoadFailed,
    /// Prefetch succeeded but no resource exists for the key.
    NotFound,
}

impl PageState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageState::Idle => "idle",
            PageState::AwaitingPrefetch => "awaiting-prefetch",
            PageState::Loaded => "loaded",
            PageState::LoadFailed => "load-failed",
            PageState::NotFound => "not-found",
        }
    }

    /// Whether this state ends a navigation cycle.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PageState::Loaded | PageState::LoadFailed | PageState::NotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!PageState::Idle.is_terminal());
        assert!(!PageState::AwaitingPrefetch.is_terminal());
        assert!(PageState::Loaded.is_terminal());
        assert!(PageState::LoadFailed.is_terminal());
        assert!(PageState::NotFound.is_terminal());
    }
}
