//! Storefront navigator wiring routes, resolvers, and pages.
//!
//! `Storefront` is the navigation layer: it matches a URL against the route
//! table, runs the product prefetch gate for routes that declare one, and
//! hands the terminal `Resolved` to the reused page controllers. Beginning a
//! new navigation supersedes one still awaiting its prefetch.

mod navigator;
mod routes;

pub use navigator::*;
pub use routes::*;
