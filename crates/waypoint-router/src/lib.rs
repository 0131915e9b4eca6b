//! Route table and matching for the Waypoint prefetch framework.
//!
//! Routes map URL paths to page targets:
//!
//! ```text
//! welcome              -> Welcome
//! ""                   -> redirect to welcome
//! products
//! ├── ""               -> ProductList
//! ├── :id              -> ProductDetail   (prefetch)
//! └── :id/edit         -> ProductEdit     (prefetch)
//!     ├── ""           -> redirect to info
//!     ├── info         -> EditInfo tab
//!     └── tags         -> EditTags tab
//! **                   -> NotFound
//! ```
//!
//! Matching yields the full page chain (outermost page plus active child),
//! captured `:name` parameters, and whether a prefetch gates activation.

mod error;
mod matcher;
mod route;

pub use error::*;
pub use matcher::*;
pub use route::*;
