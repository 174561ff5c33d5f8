//! Input classification for an active session.
//!
//! [`Command::from_event`] is a pure mapping from raw input to the actions
//! the controller understands. It never looks at engine state, so the same
//! event always classifies the same way for a given session variant.

use glam::Vec2;

use crate::apply::TransformKind;
use crate::config::FocusedParameter;
use crate::input::{ButtonState, InputEvent, Key, MouseButton, ScrollDirection};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Restore the snapshot and end the session.
    Cancel,
    /// Keyframe the current pose and end the session.
    Commit,
    /// Absolute pointer position in screen pixels.
    PointerTo(Vec2),
    /// Relative pointer motion in screen pixels.
    PointerBy(Vec2),
    Focus(FocusedParameter),
    CycleFocus,
    ToggleActiveCenter,
    ToggleSelectedOnly,
    /// Translate only.
    ToggleCloth,
    /// Translate only; ignored unless cloth mode is on.
    ToggleInvert,
    Scroll(ScrollDirection),
}

impl Command {
    /// Classifies one event for a session of the given variant.
    ///
    /// Returns `None` for events the session swallows without acting on,
    /// including the primary button press that precedes a commit.
    #[must_use]
    pub fn from_event(kind: TransformKind, event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::PointerMoved { position } => Some(Self::PointerTo(position)),
            InputEvent::PointerDelta { delta } => Some(Self::PointerBy(delta)),

            InputEvent::Button { button, state } => match (button, state) {
                (MouseButton::Right, ButtonState::Pressed) => Some(Self::Cancel),
                (MouseButton::Left, ButtonState::Released) => Some(Self::Commit),
                _ => None,
            },

            InputEvent::Key {
                key,
                state: ButtonState::Pressed,
                ..
            } => Self::from_key(kind, key),
            InputEvent::Key { .. } => None,

            InputEvent::Scroll { direction } => Some(Self::Scroll(direction)),
        }
    }

    fn from_key(kind: TransformKind, key: Key) -> Option<Self> {
        let command = match key {
            Key::Escape => Self::Cancel,
            Key::Key1 => Self::Focus(FocusedParameter::Radius),
            Key::Key2 => Self::Focus(FocusedParameter::FalloffExponent),
            Key::Key3 => Self::Focus(FocusedParameter::Power),
            Key::Tab => Self::CycleFocus,
            Key::Key4 => Self::ToggleActiveCenter,
            Key::Key5 => Self::ToggleSelectedOnly,
            Key::Key6 if kind == TransformKind::Translate => Self::ToggleCloth,
            Key::Key7 if kind == TransformKind::Translate => Self::ToggleInvert,
            _ => return None,
        };
        Some(command)
    }

    /// Whether this command changes a configuration parameter.
    #[must_use]
    pub fn is_parameter_change(&self) -> bool {
        matches!(
            self,
            Self::Focus(_)
                | Self::CycleFocus
                | Self::ToggleActiveCenter
                | Self::ToggleSelectedOnly
                | Self::ToggleCloth
                | Self::ToggleInvert
                | Self::Scroll(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloth_keys_only_map_for_translate() {
        let six = InputEvent::key_press(Key::Key6);
        let seven = InputEvent::key_press(Key::Key7);

        assert_eq!(
            Command::from_event(TransformKind::Translate, &six),
            Some(Command::ToggleCloth)
        );
        assert_eq!(
            Command::from_event(TransformKind::Translate, &seven),
            Some(Command::ToggleInvert)
        );
        assert_eq!(Command::from_event(TransformKind::Rotate, &six), None);
        assert_eq!(Command::from_event(TransformKind::Rotate, &seven), None);
    }

    #[test]
    fn primary_press_is_swallowed_release_commits() {
        let press = InputEvent::button_press(MouseButton::Left);
        let release = InputEvent::button_release(MouseButton::Left);

        assert_eq!(Command::from_event(TransformKind::Translate, &press), None);
        assert_eq!(
            Command::from_event(TransformKind::Translate, &release),
            Some(Command::Commit)
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let release = InputEvent::Key {
            key: Key::Escape,
            state: ButtonState::Released,
            modifiers: crate::input::Modifiers::empty(),
        };
        assert_eq!(Command::from_event(TransformKind::Rotate, &release), None);
    }
}
