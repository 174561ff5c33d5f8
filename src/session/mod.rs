//! Session Controller
//!
//! - [`controller`]: the [`PoseEditor`] state machine
//! - [`command`]: pure classification of input events
//! - [`state`]: the data held while a session is active
//! - [`keymap`]: shortcuts that start a session

pub mod command;
pub mod controller;
pub mod keymap;
pub mod state;

pub use command::Command;
pub use controller::{EditorState, EventOutcome, HostEffect, HostEffects, PoseEditor, Transition};
pub use keymap::{KeyBinding, Keymap};
pub use state::Session;
