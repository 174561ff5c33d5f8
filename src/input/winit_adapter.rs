//! Winit input event adapter
//!
//! Translates Winit window events into the engine's platform-agnostic
//! [`InputEvent`]s. Keyboard modifiers arrive as a separate Winit event, so
//! the adapter keeps the last known modifier state and attaches it to key
//! events.

use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{ButtonState, InputEvent, Key, Modifiers, MouseButton, ScrollDirection};

/// Converts a Winit PhysicalKey into an engine Key
#[must_use]
pub fn translate_key(physical_key: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let key = match code {
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Key1,
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Key2,
        KeyCode::Digit3 | KeyCode::Numpad3 => Key::Key3,
        KeyCode::Digit4 | KeyCode::Numpad4 => Key::Key4,
        KeyCode::Digit5 | KeyCode::Numpad5 => Key::Key5,
        KeyCode::Digit6 | KeyCode::Numpad6 => Key::Key6,
        KeyCode::Digit7 | KeyCode::Numpad7 => Key::Key7,

        KeyCode::KeyG => Key::G,
        KeyCode::KeyR => Key::R,

        KeyCode::Escape => Key::Escape,
        KeyCode::Tab => Key::Tab,

        _ => return None,
    };

    Some(key)
}

/// Converts a Winit MouseButton into an engine MouseButton
#[must_use]
pub fn translate_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Back,
        winit::event::MouseButton::Forward => MouseButton::Forward,
        winit::event::MouseButton::Other(id) => MouseButton::Other(id),
    }
}

/// Converts a Winit ElementState into an engine ButtonState
#[must_use]
pub fn translate_element_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

#[must_use]
pub fn translate_modifiers(state: ModifiersState) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    modifiers.set(Modifiers::CTRL, state.control_key());
    modifiers.set(Modifiers::SHIFT, state.shift_key());
    modifiers.set(Modifiers::ALT, state.alt_key());
    modifiers.set(Modifiers::SUPER, state.super_key());
    modifiers
}

/// One wheel event is one notch, whatever its magnitude. Horizontal-only
/// scrolling is ignored.
#[must_use]
pub fn translate_scroll(delta: MouseScrollDelta) -> Option<ScrollDirection> {
    let dy = match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
    };

    if dy > 0.0 {
        Some(ScrollDirection::Up)
    } else if dy < 0.0 {
        Some(ScrollDirection::Down)
    } else {
        None
    }
}

/// Stateful Winit → engine translator.
#[derive(Debug, Default, Clone)]
pub struct WinitInputAdapter {
    modifiers: Modifiers,
}

impl WinitInputAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn set_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = translate_modifiers(state);
    }

    /// Translates one window event. Returns `None` for events the editor
    /// does not consume.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.set_modifiers(modifiers.state());
                None
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                let key = translate_key(event.physical_key)?;
                Some(InputEvent::Key {
                    key,
                    state: translate_element_state(event.state),
                    modifiers: self.modifiers,
                })
            }

            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMoved {
                position: Vec2::new(position.x as f32, position.y as f32),
            }),

            WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::Button {
                button: translate_mouse_button(*button),
                state: translate_element_state(*state),
            }),

            WindowEvent::MouseWheel { delta, .. } => {
                translate_scroll(*delta).map(|direction| InputEvent::Scroll { direction })
            }

            _ => None,
        }
    }
}
