//! Core navigation abstractions for the Waypoint prefetch framework.
//!
//! This crate provides:
//! - `NavigationRequest` - A parsed navigation attempt with route/query params
//! - `NavigationId` - Unique attempt identifier for tracing
//! - `MessageLog` - Cross-page operation message log

mod context;
mod messages;

pub use context::*;
pub use messages::*;
