//! herald: Synchronous in-process publish/subscribe event emitter
//!
//! This crate provides:
//! - `Emitter` - Register handlers by event name, dispatch events to them
//! - `Handler` - Identity-bearing callback tokens for removal and dedupe
//! - `EventName` - Case-insensitive event name keys
//!
//! Handlers registered under the `"*"` wildcard receive every emitted
//! event, ahead of the event's own handlers. Delivery is synchronous and
//! runs in the caller's context.

pub mod emitter;
pub mod handler;
pub mod name;

// Re-exports
pub use emitter::{Emitter, HandlerList, HandlerMap};
pub use handler::{Handler, HandlerId};
pub use name::{EventName, WILDCARD};
