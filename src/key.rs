//! Keyboard input as the editor sees it.

use crate::consts::{MASK_SEPARATOR, TEMPLATE_LEN};

/// Keys that move the caret natively and are never intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// A keystroke, classified by how the mask treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `0`-`9`
    Digit(u8),
    Backspace,
    Delete,
    /// The separator key; only moves the caret.
    Slash,
    Navigation(NavKey),
    /// Non-printing keys such as `Enter` or `Escape`.
    Control,
    /// Anything else that would insert text. Always rejected.
    Printable(char),
}

impl Key {
    /// Classifies a DOM-style key name (`"ArrowLeft"`, `"Backspace"`, `"7"`).
    /// Unknown multi-character names are treated as control keys.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Self::Backspace,
            "Delete" | "Del" => Self::Delete,
            "Tab" => NavKey::Tab.into(),
            "ArrowLeft" | "Left" => NavKey::Left.into(),
            "ArrowRight" | "Right" => NavKey::Right.into(),
            "ArrowUp" | "Up" => NavKey::Up.into(),
            "ArrowDown" | "Down" => NavKey::Down.into(),
            "Home" => NavKey::Home.into(),
            "End" => NavKey::End.into(),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from(ch),
                    _ => Self::Control,
                }
            }
        }
    }

    pub const fn is_navigation(self) -> bool {
        matches!(self, Self::Navigation(_))
    }
}

impl From<NavKey> for Key {
    fn from(nav: NavKey) -> Self {
        Self::Navigation(nav)
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        match ch {
            '0'..='9' => Self::Digit(ch as u8 - b'0'),
            MASK_SEPARATOR => Self::Slash,
            '\u{8}' => Self::Backspace,
            '\u{7f}' => Self::Delete,
            '\t' => NavKey::Tab.into(),
            c if c.is_control() => Self::Control,
            c => Self::Printable(c),
        }
    }
}

/// Selection of the host text field, in character offsets.
///
/// `start <= end` always holds and both are clamped to the template length.
/// A collapsed selection is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            start: start.min(TEMPLATE_LEN),
            end: end.min(TEMPLATE_LEN),
        }
    }

    pub fn caret(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    pub const fn start(self) -> usize {
        self.start
    }

    pub const fn end(self) -> usize {
        self.end
    }

    pub const fn is_collapsed(self) -> bool {
        self.start == self.end
    }
}

impl From<usize> for Selection {
    fn from(pos: usize) -> Self {
        Self::caret(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_chars() {
        assert_eq!(Key::from('0'), Key::Digit(0));
        assert_eq!(Key::from('9'), Key::Digit(9));
        assert_eq!(Key::from('/'), Key::Slash);
        assert_eq!(Key::from('a'), Key::Printable('a'));
        assert_eq!(Key::from('-'), Key::Printable('-'));
        assert_eq!(Key::from('\r'), Key::Control);
        assert_eq!(Key::from('\t'), Key::Navigation(NavKey::Tab));
    }

    #[test]
    fn test_classify_names() {
        assert_eq!(Key::from_name("Backspace"), Key::Backspace);
        assert_eq!(Key::from_name("Delete"), Key::Delete);
        assert_eq!(Key::from_name("ArrowLeft"), Key::Navigation(NavKey::Left));
        assert_eq!(Key::from_name("End"), Key::Navigation(NavKey::End));
        assert_eq!(Key::from_name("Enter"), Key::Control);
        assert_eq!(Key::from_name("5"), Key::Digit(5));
        assert_eq!(Key::from_name("/"), Key::Slash);
        assert_eq!(Key::from_name("x"), Key::Printable('x'));
        assert_eq!(Key::from_name("ก"), Key::Printable('ก'));
        assert!(Key::from_name("Home").is_navigation());
    }

    #[test]
    fn test_selection_is_normalized() {
        let sel = Selection::new(7, 2);
        assert_eq!((sel.start(), sel.end()), (2, 7));
        assert!(!sel.is_collapsed());

        let clamped = Selection::new(3, 40);
        assert_eq!(clamped.end(), TEMPLATE_LEN);
        assert!(Selection::from(4).is_collapsed());
    }
}
