// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity-bearing handler tokens

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity key for a registered handler.
///
/// Removal, `has`, and deduped registration compare tokens by this key,
/// never by the behavior of the function behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    fn next() -> Self {
        Self(NEXT_HANDLER_ID.fetch_add(1, Ordering::SeqCst))
    }
}

/// A caller-supplied unary callback paired with a stable identity.
///
/// Clones share the identity: a clone is the same registration token as
/// the original and can be passed to `off`/`has` interchangeably. Two
/// handlers built from the same closure are distinct tokens.
pub struct Handler<E> {
    id: HandlerId,
    func: Arc<dyn Fn(&E) + Send + Sync>,
}

impl<E> Handler<E> {
    pub fn new(func: impl Fn(&E) + Send + Sync + 'static) -> Self {
        Self {
            id: HandlerId::next(),
            func: Arc::new(func),
        }
    }

    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// Invoke the callback with an event payload. Any return value of the
    /// underlying function is discarded; a panic unwinds to the caller.
    pub fn call(&self, event: &E) {
        (self.func)(event);
    }
}

impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            func: Arc::clone(&self.func),
        }
    }
}

impl<E> PartialEq for Handler<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for Handler<E> {}

impl<E> std::fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler").field("id", &self.id).finish()
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
