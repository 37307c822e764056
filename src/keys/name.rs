//! Mapping from crossterm key codes to stable key names
//!
//! The classifier and the committed log work on key names, not on terminal
//! key codes, so the capture layer translates each crossterm event into the
//! name the rest of the pipeline understands ("a", "Enter", "ArrowLeft",
//! "F5", ...).

use crossterm::event::KeyCode;

/// Name a crossterm key code.
///
/// Returns `None` for codes that carry no key identity of their own
/// (media keys, keyboard-state notifications and similar).
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Pause => "Pause".to_string(),
        KeyCode::PrintScreen => "PrintScreen".to_string(),
        KeyCode::Menu => "ContextMenu".to_string(),
        KeyCode::CapsLock => "CapsLock".to_string(),
        KeyCode::NumLock => "NumLock".to_string(),
        KeyCode::ScrollLock => "ScrollLock".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_name_themselves() {
        assert_eq!(key_name(KeyCode::Char('a')), Some("a".to_string()));
        assert_eq!(key_name(KeyCode::Char(' ')), Some(" ".to_string()));
    }

    #[test]
    fn special_keys_get_stable_names() {
        assert_eq!(key_name(KeyCode::Enter), Some("Enter".to_string()));
        assert_eq!(key_name(KeyCode::Backspace), Some("Backspace".to_string()));
        assert_eq!(key_name(KeyCode::Left), Some("ArrowLeft".to_string()));
        assert_eq!(key_name(KeyCode::F(5)), Some("F5".to_string()));
    }

    #[test]
    fn identity_less_codes_are_unnamed() {
        assert_eq!(key_name(KeyCode::Null), None);
    }
}
