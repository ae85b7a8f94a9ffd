//! Registration, removal, and query specs

use crate::prelude::*;
use herald::{Emitter, EventName};

#[test]
fn register_then_emit_delivers_once() {
    let emitter = Emitter::new();
    let log = new_log();
    emitter.on("click", recorder(&log, "h"));

    emitter.emit("click", &1);

    assert_eq!(entries(&log), vec!["h:1"]);
}

#[test]
fn unsubscribe_twice_and_unsubscribe_never_subscribed_are_valid() {
    let emitter = Emitter::new();
    let log = new_log();
    let handler = recorder(&log, "h");
    let never_registered = recorder(&log, "n");

    emitter.on("click", handler.clone());
    emitter.off("click", &handler);
    emitter.off("click", &handler);
    emitter.off("click", &never_registered);
    emitter.off("unknown", &never_registered);

    emitter.emit("click", &1);
    assert!(entries(&log).is_empty());
}

#[test]
fn deduped_registration_delivers_once_where_plain_delivers_twice() {
    let log = new_log();

    let plain = Emitter::new();
    let handler = recorder(&log, "p");
    plain.on("click", handler.clone());
    plain.on("click", handler);
    plain.emit("click", &1);
    assert_eq!(entries(&log).len(), 2);

    let deduped = Emitter::new();
    let handler = recorder(&log, "d");
    deduped.on_unique("click", handler.clone());
    deduped.on_unique("click", handler);
    deduped.emit("click", &1);
    assert_eq!(entries(&log).len(), 3);
}

#[test]
fn has_before_any_registration_returns_false_and_leaves_state_usable() {
    let emitter = Emitter::new();
    let log = new_log();
    let handler = recorder(&log, "b");

    assert!(!emitter.has("click", &handler));

    emitter.on("click", handler.clone());
    assert!(emitter.has("click", &handler));
    emitter.emit("click", &1);
    assert_eq!(entries(&log), vec!["b:1"]);
}

#[test]
fn registration_counts_are_per_normalized_name() {
    let emitter = Emitter::new();
    let log = new_log();
    emitter.on("Save", recorder(&log, "a"));
    emitter.on("SAVE", recorder(&log, "b"));
    emitter.on("load", recorder(&log, "c"));

    assert_eq!(emitter.handler_count("save"), 2);
    assert_eq!(emitter.handler_count("load"), 1);
    assert_eq!(emitter.handler_count("missing"), 0);

    let mut names = emitter.event_names();
    names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    assert_eq!(names, vec![EventName::new("load"), EventName::new("save")]);
}
