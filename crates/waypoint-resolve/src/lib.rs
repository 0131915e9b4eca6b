//! Route-scoped data prefetch with error-channel normalization.
//!
//! This crate provides:
//! - `Resolved<T>` - Combined result/error value, the only thing pages see
//! - `Resolve` - The prefetch gateway trait
//! - `AttemptController` / `resolve_gated` - Supersession of stale attempts
//!
//! The design deliberately rejects the alternatives for reporting prefetch
//! errors — cancelling the navigation, handing the page a bare null, or
//! detouring to an error page — because none of them can carry a message to
//! the destination. Failures travel as data inside `Resolved<T>` instead.

mod attempt;
mod resolved;
mod resolver;

pub use attempt::*;
pub use resolved::*;
pub use resolver::*;
