//! Route definitions.
//!
//! A route maps a path pattern to a page target. Patterns are relative to
//! the parent route:
//!
//! ```text
//! "welcome"     -> literal segment
//! ":id"         -> parameter segment, captured into RouteParams
//! ":id/edit"    -> multi-segment pattern
//! ""            -> matches when no segments remain (list/redirect routes)
//! "**"          -> wildcard, matches any remaining segments
//! ```

/// A single route definition.
///
/// Routes are generic over the page target `P` so the table stays free of
/// application types.
#[derive(Debug, Clone)]
pub struct Route<P> {
    /// Relative path pattern.
    pub path: String,
    /// Page activated when this route is the match leaf (or an ancestor of it).
    pub target: Option<P>,
    /// Redirect target, relative to the parent route level. A redirect only
    /// fires when it matches the full remaining path.
    pub redirect_to: Option<String>,
    /// Whether activating this route requires a data prefetch first.
    pub resolve: bool,
    /// Child routes, matched against the remaining segments.
    pub children: Vec<Route<P>>,
}

impl<P> Route<P> {
    /// Create a route activating a page.
    pub fn page(path: impl Into<String>, target: P) -> Self {
        Self {
            path: path.into(),
            target: Some(target),
            redirect_to: None,
            resolve: false,
            children: Vec::new(),
        }
    }

    /// Create a component-less grouping route; its children render in its place.
    pub fn group(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: None,
            redirect_to: None,
            resolve: false,
            children: Vec::new(),
        }
    }

    /// Create a redirecting route.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: None,
            redirect_to: Some(to.into()),
            resolve: false,
            children: Vec::new(),
        }
    }

    /// Require a data prefetch before this route activates.
    pub fn with_resolve(mut self) -> Self {
        self.resolve = true;
        self
    }

    /// Add child routes.
    pub fn with_children(mut self, children: Vec<Route<P>>) -> Self {
        self.children = children;
        self
    }

    /// Pattern segments of this route's path.
    pub(crate) fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }
}
