//! Shared helpers for emitter specs

use herald::Handler;
use std::sync::{Arc, Mutex};

/// Shared invocation log. Handlers append "label:payload" entries.
pub type Log = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn recorder(log: &Log, label: &str) -> Handler<u32> {
    let log = Arc::clone(log);
    let label = label.to_string();
    Handler::new(move |event: &u32| log.lock().unwrap().push(format!("{label}:{event}")))
}

pub fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}
