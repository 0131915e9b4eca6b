//! The combined result/error value handed from a resolver to a page.

use serde::{Deserialize, Serialize};

/// Outcome of a prefetch, normalized into data.
///
/// Exactly one variant is populated. A resolver never raises: transport and
/// validation failures become `Failure`, so the navigation layer can proceed
/// to activate the page uniformly and let it render the message. `Success`
/// may carry an absent resource (unknown id), which pages surface as a
/// distinct "not found" state.
///
/// Consumers never observe an in-flight state; the prefetch gate only hands
/// over terminal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resolved<T> {
    /// Prefetch completed. The resource is absent for unknown keys.
    Success { resource: Option<T> },
    /// Prefetch failed. The message is never empty.
    Failure { message: String },
}

impl<T> Resolved<T> {
    /// A successful prefetch carrying a resource.
    pub fn success(resource: T) -> Self {
        Self::Success {
            resource: Some(resource),
        }
    }

    /// A successful prefetch for a key with no backing resource.
    pub fn missing() -> Self {
        Self::Success { resource: None }
    }

    /// A failed prefetch with a user-facing message.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "failure messages must not be empty");
        Self::Failure { message }
    }

    /// The resource, if the prefetch succeeded and found one.
    pub fn resource(&self) -> Option<&T> {
        match self {
            Self::Success { resource } => resource.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    /// The failure message, if the prefetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message.as_str()),
        }
    }

    /// Whether the prefetch completed without error.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Whether the prefetch failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Split into the optional resource and optional error message.
    pub fn into_parts(self) -> (Option<T>, Option<String>) {
        match self {
            Self::Success { resource } => (resource, None),
            Self::Failure { message } => (None, Some(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_resource() {
        let resolved = Resolved::success(42u32);
        assert!(resolved.is_success());
        assert_eq!(resolved.resource(), Some(&42));
        assert_eq!(resolved.error(), None);
    }

    #[test]
    fn test_missing_is_success_without_resource() {
        let resolved: Resolved<u32> = Resolved::missing();
        assert!(resolved.is_success());
        assert_eq!(resolved.resource(), None);
        assert_eq!(resolved.error(), None);
    }

    #[test]
    fn test_failure_carries_message_only() {
        let resolved: Resolved<u32> = Resolved::failure("boom");
        assert!(resolved.is_failure());
        assert_eq!(resolved.resource(), None);
        assert_eq!(resolved.error(), Some("boom"));
    }

    #[test]
    fn test_into_parts() {
        let (resource, error) = Resolved::success("widget").into_parts();
        assert_eq!(resource, Some("widget"));
        assert_eq!(error, None);

        let (resource, error) = Resolved::<&str>::failure("oops").into_parts();
        assert_eq!(resource, None);
        assert_eq!(error, Some("oops".to_string()));
    }
}
