//! Capture-time key classification
//!
//! Filtering and normalization happen before a key ever reaches the pending
//! queue: navigation, modifier and function keys are discarded, deletion keys
//! are routed as a separate signal, and line-break/tab keys are substituted
//! with their literal escape text so the committed log renders single-line.
//!
//! Both tables are static lookups so they stay independently testable and
//! extensible.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// How a captured key should be routed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyClass {
    /// Goes into the pending queue; carries the normalized text to store
    Printable(String),
    /// Backspace/Delete: a deletion-timestamp signal, never queued
    Deletion,
    /// Navigation, modifier, lock and function keys: dropped at capture
    Ignored,
}

/// Keys that never reach the pending queue
static EXCLUDED_KEYS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Navigation
    for key in [
        "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "Home", "End", "PageUp", "PageDown",
    ] {
        set.insert(key);
    }

    // Modifiers and locks
    for key in [
        "Shift", "Control", "Alt", "Meta", "CapsLock", "NumLock", "ScrollLock",
    ] {
        set.insert(key);
    }

    // Non-printing function keys
    for key in [
        "Escape", "Insert", "Pause", "PrintScreen", "ContextMenu", "F1", "F2", "F3", "F4", "F5",
        "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    ] {
        set.insert(key);
    }

    set
});

/// Keys stored under their literal escape text
static NORMALIZED_KEYS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("Enter", "\\n");
    map.insert("Tab", "\\t");
    map
});

/// Classify a named key for routing
pub fn classify(key: &str) -> KeyClass {
    if key == "Backspace" || key == "Delete" {
        return KeyClass::Deletion;
    }
    if EXCLUDED_KEYS.contains(key) {
        return KeyClass::Ignored;
    }
    let normalized = NORMALIZED_KEYS.get(key).copied().unwrap_or(key);
    KeyClass::Printable(normalized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_characters_are_printable() {
        assert_eq!(classify("a"), KeyClass::Printable("a".to_string()));
        assert_eq!(classify(" "), KeyClass::Printable(" ".to_string()));
        assert_eq!(classify("é"), KeyClass::Printable("é".to_string()));
    }

    #[test]
    fn enter_and_tab_are_normalized_to_escapes() {
        assert_eq!(classify("Enter"), KeyClass::Printable("\\n".to_string()));
        assert_eq!(classify("Tab"), KeyClass::Printable("\\t".to_string()));
    }

    #[test]
    fn deletion_keys_route_separately() {
        assert_eq!(classify("Backspace"), KeyClass::Deletion);
        assert_eq!(classify("Delete"), KeyClass::Deletion);
    }

    #[test]
    fn navigation_keys_are_ignored() {
        for key in ["ArrowLeft", "ArrowRight", "Home", "End", "PageUp", "PageDown"] {
            assert_eq!(classify(key), KeyClass::Ignored, "{key}");
        }
    }

    #[test]
    fn modifiers_and_locks_are_ignored() {
        for key in ["Shift", "Control", "Alt", "Meta", "CapsLock", "NumLock", "ScrollLock"] {
            assert_eq!(classify(key), KeyClass::Ignored, "{key}");
        }
    }

    #[test]
    fn function_keys_are_ignored() {
        for n in 1..=12 {
            assert_eq!(classify(&format!("F{n}")), KeyClass::Ignored);
        }
        for key in ["Escape", "Insert", "Pause", "PrintScreen", "ContextMenu"] {
            assert_eq!(classify(key), KeyClass::Ignored, "{key}");
        }
    }
}
