// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event emitter for routing events to registered handlers

use crate::handler::Handler;
use crate::name::EventName;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Ordered handler registrations for one event name.
///
/// Insertion order is invocation order. Duplicates are allowed and invoke
/// once per entry.
pub type HandlerList<E> = Vec<Handler<E>>;

/// Backing store mapping normalized event names to their handlers.
pub type HandlerMap<E> = HashMap<EventName, HandlerList<E>>;

/// The emitter routes emitted events to matching handlers.
///
/// Handlers registered under [`WILDCARD`](crate::WILDCARD) receive every
/// event, ahead of the event's own handlers. All operations are
/// synchronous; `emit` invokes handlers inline in the caller's context.
pub struct Emitter<E> {
    handlers: Arc<RwLock<HandlerMap<E>>>,
}

impl<E> Emitter<E> {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Build an emitter over an existing handler map.
    ///
    /// The map is used directly: registrations made through the emitter are
    /// visible to other holders of the handle, and their insertions are
    /// visible to the emitter. Contents are not validated.
    pub fn with_map(handlers: Arc<RwLock<HandlerMap<E>>>) -> Self {
        Self { handlers }
    }

    /// Shared handle to the backing map.
    pub fn handler_map(&self) -> Arc<RwLock<HandlerMap<E>>> {
        Arc::clone(&self.handlers)
    }

    // Run `f` on the bucket for `key`, creating the bucket on first access.
    fn with_bucket<T>(&self, key: EventName, f: impl FnOnce(&mut HandlerList<E>) -> T) -> T {
        let mut map = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        f(map.entry(key).or_default())
    }

    /// Register a handler for the given event name, or `"*"` for all
    /// events.
    ///
    /// Registrations accumulate: registering the same token twice means two
    /// invocations per matching emit.
    pub fn on(&self, name: &str, handler: Handler<E>) {
        let key = EventName::new(name);
        tracing::trace!(event = %key, id = ?handler.id(), "handler registered");
        self.with_bucket(key, |bucket| bucket.push(handler));
    }

    /// Register a handler unless the same token is already registered for
    /// the name, in which case the call is a silent no-op.
    pub fn on_unique(&self, name: &str, handler: Handler<E>) {
        self.with_bucket(EventName::new(name), |bucket| {
            if !bucket.contains(&handler) {
                bucket.push(handler);
            }
        });
    }

    /// Remove the earliest registration of `handler` for the given name.
    ///
    /// Later entries keep their relative order. Removing a handler that was
    /// never registered, or removing twice, is a silent no-op.
    pub fn off(&self, name: &str, handler: &Handler<E>) {
        self.with_bucket(EventName::new(name), |bucket| {
            if let Some(index) = bucket.iter().position(|h| h == handler) {
                bucket.remove(index);
            }
        });
    }

    /// Whether `handler` is currently registered for the given name.
    pub fn has(&self, name: &str, handler: &Handler<E>) -> bool {
        self.with_bucket(EventName::new(name), |bucket| bucket.contains(handler))
    }

    /// Invoke all handlers for the given event name: wildcard handlers
    /// first, then the name's own handlers, each list in registration
    /// order.
    ///
    /// The delivery list is snapshotted before the first handler runs and
    /// no lock is held during dispatch, so handlers may register, remove,
    /// or emit on this same emitter without changing what the current call
    /// delivers.
    pub fn emit(&self, name: &str, event: &E) {
        let key = EventName::new(name);
        let snapshot: HandlerList<E> = {
            let map = self.handlers.read().unwrap_or_else(|e| e.into_inner());
            let wildcard = map.get(&EventName::wildcard()).into_iter().flatten();
            let named = map.get(&key).into_iter().flatten();
            wildcard.chain(named).cloned().collect()
        };
        tracing::trace!(event = %key, handlers = snapshot.len(), "dispatching event");
        for handler in &snapshot {
            handler.call(event);
        }
    }

    /// Count of handlers currently registered for one event name.
    pub fn handler_count(&self, name: &str) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&EventName::new(name))
            .map_or(0, Vec::len)
    }

    /// All event names with a materialized handler bucket, including empty
    /// buckets left behind by lookups.
    pub fn event_names(&self) -> Vec<EventName> {
        self.handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;
