use crate::apply::TransformKind;
use crate::input::{Key, Modifiers};

/// A key plus the exact modifier set that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyBinding {
    #[must_use]
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    #[must_use]
    pub const fn ctrl(key: Key) -> Self {
        Self::new(key, Modifiers::CTRL)
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        self.key == key && self.modifiers == modifiers
    }
}

/// Shortcuts that start a session from idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub translate: KeyBinding,
    pub rotate: KeyBinding,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            translate: KeyBinding::ctrl(Key::G),
            rotate: KeyBinding::ctrl(Key::R),
        }
    }
}

impl Keymap {
    /// The session variant bound to this key press, if any.
    #[must_use]
    pub fn match_invoke(&self, key: Key, modifiers: Modifiers) -> Option<TransformKind> {
        if self.translate.matches(key, modifiers) {
            Some(TransformKind::Translate)
        } else if self.rotate.matches(key, modifiers) {
            Some(TransformKind::Rotate)
        } else {
            None
        }
    }
}
