#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod apply;
pub mod config;
pub mod errors;
pub mod falloff;
pub mod host;
pub mod input;
pub mod overlay;
pub mod pivot;
pub mod rig;
pub mod session;
pub mod snapshot;
pub mod view;

pub use apply::{ApplyContext, ApplyStats, TransformKind};
pub use config::{Configuration, FocusedParameter};
pub use errors::{PoseEditError, ValidationError};
pub use falloff::{FalloffField, FalloffWeights};
pub use host::{KeyframeRequest, KeyframeSink, PoseProvider, RecordedKeyframes};
pub use input::{ButtonState, InputEvent, Key, Modifiers, MouseButton, ScrollDirection};
pub use overlay::{Overlay, RingVertex};
pub use pivot::{Pivot, PivotSource, resolve_pivot};
pub use rig::{Bone, BoneKey, BoneRotation, BoneTransform, EditMode, PoseScene, Skeleton, SkeletonKey};
pub use session::{Command, EditorState, EventOutcome, HostEffect, Keymap, PoseEditor, Transition};
pub use snapshot::Snapshot;
pub use view::ViewOrientation;
