//! Recovery warnings for malformed markup.
//!
//! The tokenizer never rejects input. When it papers over broken markup
//! (an unterminated quote, a comment cut off by end of input) it reports the
//! recovery here. Each distinct message is forwarded to `tracing` once, so a
//! document full of the same mistake does not flood the log.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already reported (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Report a lenient recovery (emitted once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Tokenizer", "unterminated quote closed by '>' on line 3");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_report = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_report {
        tracing::warn!(component, "{message}");
    }
}

/// Clear all recorded warnings (call before tokenizing a new document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
