//! Platform-agnostic input events
//!
//! Defines the event types the session controller consumes. They do not
//! depend on any windowing library; platform adapters (e.g. the Winit
//! adapter behind the `winit` feature) translate native events into them.
//!
//! Screen coordinates are in pixels with the origin at the top-left corner
//! and y pointing down.

#[cfg(feature = "winit")]
pub mod winit_adapter;

use bitflags::bitflags;
use glam::Vec2;

/// Keyboard keys the editor cares about
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    // Number keys
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,

    // Invoke bindings
    G,
    R,

    // Control keys
    Escape,
    Tab,
}

/// Mouse button enumeration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Button state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Scroll wheel notch direction
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

bitflags! {
    /// Modifier keys held during a key event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const CTRL = 1 << 0;
        const SHIFT = 1 << 1;
        const ALT = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// One input event, delivered to the engine in program order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// Absolute pointer position in screen pixels.
    PointerMoved { position: Vec2 },
    /// Relative pointer motion in screen pixels.
    PointerDelta { delta: Vec2 },
    Button {
        button: MouseButton,
        state: ButtonState,
    },
    Key {
        key: Key,
        state: ButtonState,
        modifiers: Modifiers,
    },
    Scroll { direction: ScrollDirection },
}

impl InputEvent {
    /// Key press without modifiers.
    #[must_use]
    pub fn key_press(key: Key) -> Self {
        Self::Key {
            key,
            state: ButtonState::Pressed,
            modifiers: Modifiers::empty(),
        }
    }

    #[must_use]
    pub fn button_press(button: MouseButton) -> Self {
        Self::Button {
            button,
            state: ButtonState::Pressed,
        }
    }

    #[must_use]
    pub fn button_release(button: MouseButton) -> Self {
        Self::Button {
            button,
            state: ButtonState::Released,
        }
    }

    #[must_use]
    pub fn pointer(x: f32, y: f32) -> Self {
        Self::PointerMoved {
            position: Vec2::new(x, y),
        }
    }
}
