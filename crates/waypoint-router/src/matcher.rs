//! Path matching against a route table.

use waypoint_core::RouteParams;

use crate::error::RouterError;
use crate::route::Route;

/// Redirect chains longer than this are treated as configuration errors.
const MAX_REDIRECTS: usize = 8;

/// A page activated by a match, with its prefetch requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPage<P> {
    /// The page target.
    pub target: P,
    /// Whether this page requires a data prefetch before activation.
    pub resolve: bool,
}

/// The result of matching a path against a route table.
///
/// `chain` runs from the outermost matched page to the leaf, so a path like
/// `/products/5/edit/tags` yields the edit page followed by its active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<P> {
    /// Matched pages, outermost first. Never empty.
    pub chain: Vec<MatchedPage<P>>,
    /// Parameters captured from `:name` segments.
    pub params: RouteParams,
}

impl<P> RouteMatch<P> {
    /// The innermost matched page.
    pub fn leaf(&self) -> &MatchedPage<P> {
        self.chain.last().expect("route match chain is never empty")
    }

    /// The outermost matched page.
    pub fn page(&self) -> &MatchedPage<P> {
        self.chain.first().expect("route match chain is never empty")
    }

    /// Whether any page in the chain requires a prefetch.
    pub fn resolve_required(&self) -> bool {
        self.chain.iter().any(|p| p.resolve)
    }

    /// Get a captured parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }
}

/// Ordered route table. The first route whose pattern matches wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable<P> {
    routes: Vec<Route<P>>,
}

enum MatchStep<P> {
    Matched(RouteMatch<P>),
    Redirected(String),
}

impl<P: Clone> RouteTable<P> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Build a table from a route list.
    pub fn from_routes(routes: Vec<Route<P>>) -> Self {
        Self { routes }
    }

    /// Register a route. Order matters: earlier routes take precedence.
    pub fn register(&mut self, route: Route<P>) {
        self.routes.push(route);
    }

    /// Registered top-level routes.
    pub fn routes(&self) -> &[Route<P>] {
        &self.routes
    }

    /// Match a path (no query string) against the table, following redirects.
    pub fn match_path(&self, path: &str) -> Result<RouteMatch<P>, RouterError> {
        let mut current = path.to_string();
        for _ in 0..MAX_REDIRECTS {
            let segments: Vec<&str> = current.split('/').filter(|s| !s.is_empty()).collect();
            match match_level(&self.routes, &segments, &[], &RouteParams::new()) {
                Some(MatchStep::Matched(m)) => return Ok(m),
                Some(MatchStep::Redirected(next)) => current = next,
                None => return Err(RouterError::NoMatch(path.to_string())),
            }
        }
        Err(RouterError::RedirectLoop(path.to_string()))
    }
}

/// Match one level of routes against the remaining segments.
///
/// `consumed` is the absolute prefix matched before entering this level;
/// redirect targets are resolved relative to it.
fn match_level<P: Clone>(
    routes: &[Route<P>],
    segments: &[&str],
    consumed: &[String],
    params: &RouteParams,
) -> Option<MatchStep<P>> {
    for route in routes {
        if route.path == "**" {
            if let Some(target) = &route.target {
                return Some(MatchStep::Matched(RouteMatch {
                    chain: vec![MatchedPage {
                        target: target.clone(),
                        resolve: route.resolve,
                    }],
                    params: params.clone(),
                }));
            }
            continue;
        }

        let pattern = route.segments();
        if pattern.len() > segments.len() {
            continue;
        }

        let mut local_params = params.clone();
        let mut bound = true;
        for (pat, seg) in pattern.iter().zip(segments) {
            if let Some(name) = pat.strip_prefix(':') {
                local_params.insert(name.to_string(), (*seg).to_string());
            } else if pat != seg {
                bound = false;
                break;
            }
        }
        if !bound {
            continue;
        }

        let rest = &segments[pattern.len()..];

        if let Some(to) = &route.redirect_to {
            // Redirects match the full remainder, like pathMatch: "full".
            if rest.is_empty() {
                let mut redirected = consumed.to_vec();
                redirected.extend(to.split('/').filter(|s| !s.is_empty()).map(String::from));
                return Some(MatchStep::Redirected(format!("/{}", redirected.join("/"))));
            }
            continue;
        }

        if !route.children.is_empty() {
            let mut child_consumed = consumed.to_vec();
            child_consumed.extend(segments[..pattern.len()].iter().map(|s| (*s).to_string()));

            if let Some(step) = match_level(&route.children, rest, &child_consumed, &local_params)
            {
                return Some(match step {
                    MatchStep::Matched(mut m) => {
                        if let Some(target) = &route.target {
                            m.chain.insert(
                                0,
                                MatchedPage {
                                    target: target.clone(),
                                    resolve: route.resolve,
                                },
                            );
                        }
                        MatchStep::Matched(m)
                    }
                    redirected => redirected,
                });
            }
            continue;
        }

        if rest.is_empty() {
            if let Some(target) = &route.target {
                return Some(MatchStep::Matched(RouteMatch {
                    chain: vec![MatchedPage {
                        target: target.clone(),
                        resolve: route.resolve,
                    }],
                    params: local_params,
                }));
            }
        }
    }
    None
}
