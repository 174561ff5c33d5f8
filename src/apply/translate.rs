//! Translate strategy
//!
//! The pointer delta is projected onto the viewer's right/up vectors and
//! scaled into world units. Each tracked bone then receives that world
//! displacement expressed in its own local space:
//!
//! - inside the radius: weighted by the falloff and damped
//! - beyond the radius but selected: the full delta (moves rigidly)
//! - otherwise: untouched
//!
//! With `affect_selected_only`, only the active bone (fixed small nudge) and
//! selected in-radius bones move.

use glam::{Affine3A, Vec2, Vec3};

use crate::apply::follow::rotate_towards;
use crate::apply::{ApplyContext, ApplyStats, BoneFrame, TRANSLATE_DAMPING, VIEW_TO_WORLD};
use crate::falloff::{FalloffField, FalloffWeights};
use crate::rig::{Bone, Skeleton, SkeletonKey};
use crate::view::ViewOrientation;

/// World-space displacement for a pointer delta in screen pixels (y down).
#[must_use]
pub fn drag_vector(view: &ViewOrientation, pointer_delta: Vec2, power: f32) -> Vec3 {
    let dx = pointer_delta.x * power;
    let dy = -pointer_delta.y * power;
    (view.right() * dx + view.up() * dy) * VIEW_TO_WORLD
}

pub(crate) fn apply_skeleton(
    ctx: &ApplyContext<'_>,
    key: SkeletonKey,
    skeleton: &mut Skeleton,
    stats: &mut ApplyStats,
) {
    let world_delta = drag_vector(ctx.view, ctx.pointer_delta, ctx.config.power);
    let field = FalloffField::for_translate(ctx.config);
    let cloth = ctx.config.simulation_cloth;
    let selected_only = ctx.config.affect_selected_only;

    let skeleton_world = skeleton.world_matrix;
    let active = skeleton.active_index();

    for (index, bone) in skeleton.bones.iter_mut().enumerate() {
        if !ctx.snapshot.contains(key, &bone.name) {
            continue;
        }

        let frame = BoneFrame::new(skeleton_world, bone, ctx.pivot);
        let local_delta = frame.local_direction(world_delta);
        let is_active = active == Some(index);

        if selected_only {
            if is_active {
                bone.pose.translation += local_delta * TRANSLATE_DAMPING;
                stats.weighted += 1;
            } else if bone.selected {
                if let Some(weights) = field.sample(frame.distance) {
                    let follow = cloth.then_some((skeleton_world, ctx.pivot));
                    apply_weighted(bone, local_delta, weights, follow, stats);
                }
            }
            continue;
        }

        match field.sample(frame.distance) {
            Some(weights) => {
                // The anchor (active) bone never rotates to follow
                let follow = (cloth && !is_active).then_some((skeleton_world, ctx.pivot));
                apply_weighted(bone, local_delta, weights, follow, stats);
            }
            None if bone.selected => {
                bone.pose.translation += local_delta;
                stats.rigid += 1;
            }
            None => {}
        }
    }
}

fn apply_weighted(
    bone: &mut Bone,
    local_delta: Vec3,
    weights: FalloffWeights,
    follow: Option<(Affine3A, Vec3)>,
    stats: &mut ApplyStats,
) {
    bone.pose.translation += local_delta * weights.motion * TRANSLATE_DAMPING;
    stats.weighted += 1;

    if let Some((skeleton_world, pivot)) = follow {
        if rotate_towards(bone, skeleton_world, pivot, weights.rotation) {
            stats.rotated += 1;
        }
    }
}
