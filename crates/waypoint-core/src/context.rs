//! Navigation request context with typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique navigation attempt identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationId(pub String);

impl NavigationId {
    /// Generate a new navigation ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

        Self(format!("{:x}-{:x}", timestamp, counter))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for NavigationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracted route parameters (e.g., `:id` from `/products/:id`).
pub type RouteParams = HashMap<String, String>;

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// A single navigation request, parsed from a URL.
#[derive(Debug, Clone)]
pub struct NavigationRequest {
    /// Unique navigation attempt identifier.
    pub id: NavigationId,
    /// Requested path, without the query string.
    pub path: String,
    /// Route parameters filled in by the router after matching.
    pub params: RouteParams,
    /// Query string parameters.
    pub query: QueryParams,
}

impl NavigationRequest {
    /// Parse a URL into path and query parameters.
    pub fn parse(url: &str) -> Self {
        let (path, query_str) = match url.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (url, None),
        };

        let mut query = QueryParams::new();
        if let Some(q) = query_str {
            for pair in q.split('&').filter(|p| !p.is_empty()) {
                match pair.split_once('=') {
                    Some((k, v)) => query.insert(k.to_string(), v.to_string()),
                    None => query.insert(pair.to_string(), String::new()),
                };
            }
        }

        Self {
            id: NavigationId::generate(),
            path: path.to_string(),
            params: RouteParams::new(),
            query,
        }
    }

    /// Get a route parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }
}
