//! Transform Applicator
//!
//! Applies the weighted drag to every tracked bone. Both variants share the
//! same pipeline per skeleton:
//!
//! 1. reset the tracked bones from the snapshot
//! 2. measure each bone's world head distance to the pivot
//! 3. sample the [`FalloffField`](crate::falloff::FalloffField)
//! 4. write the variant-specific delta into the bone's local pose
//!
//! [`TransformKind`] selects the strategy: [`translate`] or [`rotate`].
//! [`follow`] holds the cloth-mode rotation-follow used by translate.

pub mod follow;
pub mod rotate;
pub mod translate;

use glam::{Affine3A, Vec2, Vec3};

use crate::config::Configuration;
use crate::host::PoseProvider;
use crate::rig::Bone;
use crate::snapshot::Snapshot;
use crate::view::ViewOrientation;

/// Screen pixels to world units for the translate drag.
pub const VIEW_TO_WORLD: f32 = 0.1;
/// Scales the weighted positional delta of in-radius bones.
pub const TRANSLATE_DAMPING: f32 = 0.05;
/// Radians per (power-scaled) pixel of vertical drag in rotate sessions.
pub const ROTATE_ANGLE_SCALE: f32 = 0.05;

/// The two session variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Positional deltas; supports cloth mode.
    Translate,
    /// Angular delta about the viewer's forward axis.
    Rotate,
}

impl TransformKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Translate => "Proportional Move",
            Self::Rotate => "Proportional Rotate",
        }
    }

    /// Resets every tracked bone from the snapshot and re-applies the drag.
    pub fn apply<P>(self, ctx: &ApplyContext<'_>, pose: &mut P) -> ApplyStats
    where
        P: PoseProvider + ?Sized,
    {
        let mut stats = ApplyStats::default();

        for &key in ctx.snapshot.skeletons() {
            let Some(skeleton) = pose.skeleton_mut(key) else {
                log::debug!("{}: skeleton {key:?} is gone, skipping", self.label());
                continue;
            };

            stats.reset += ctx.snapshot.reset_skeleton(key, skeleton);

            match self {
                Self::Translate => translate::apply_skeleton(ctx, key, skeleton, &mut stats),
                Self::Rotate => rotate::apply_skeleton(ctx, key, skeleton, &mut stats),
            }
        }

        stats
    }
}

/// Inputs of one recomputation.
#[derive(Debug, Clone, Copy)]
pub struct ApplyContext<'a> {
    pub pivot: Vec3,
    /// Pointer travel since session start, in screen pixels (y down).
    pub pointer_delta: Vec2,
    pub config: &'a Configuration,
    pub view: &'a ViewOrientation,
    pub snapshot: &'a Snapshot,
}

/// Per-recompute counters, mostly for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Bones reset from the snapshot.
    pub reset: usize,
    /// Bones that received a falloff-weighted delta.
    pub weighted: usize,
    /// Selected bones beyond the radius moved rigidly.
    pub rigid: usize,
    /// Bones rotated by rotation-follow or the rotate variant.
    pub rotated: usize,
}

/// Per-bone placement data shared by both strategies.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoneFrame {
    /// Distance from the bone's world head to the pivot.
    pub distance: f32,
    /// Inverse of the bone's world rest placement.
    pub world_to_local: Affine3A,
}

impl BoneFrame {
    pub(crate) fn new(skeleton_world: Affine3A, bone: &Bone, pivot: Vec3) -> Self {
        let head_world = skeleton_world.transform_point3(bone.head);
        Self {
            distance: head_world.distance(pivot),
            world_to_local: (skeleton_world * bone.rest_matrix).inverse(),
        }
    }

    /// A world-space direction expressed in the bone's local space.
    #[inline]
    pub(crate) fn local_direction(&self, world: Vec3) -> Vec3 {
        self.world_to_local.transform_vector3(world)
    }
}
