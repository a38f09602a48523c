//! Layout warnings with deduplication.
//!
//! Some layout conditions are worth reporting but not worth failing on, such
//! as a frame whose line height does not fit on a page. Those are reported
//! once per unique message through `log::warn!` so that a long render pass
//! does not flood the log with the same line.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a layout condition (emitted once per unique message).
///
/// Returns `true` if this call emitted the warning, `false` if the same
/// message had already been reported.
///
/// # Example
/// ```
/// use stave_common::warning::warn_once;
///
/// let first = warn_once("frame", "line height exceeds page live height");
/// let second = warn_once("frame", "line height exceeds page live height");
/// assert!(first || !second);
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        log::warn!(target: "stave", "[{component}] {message}");
    }
    should_emit
}

/// Clear all recorded warnings (call when starting a new layout session).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
