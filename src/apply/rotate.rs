//! Rotate strategy
//!
//! Vertical pointer travel becomes an angle about the viewer's forward axis.
//! Every in-radius bone is rotated about that axis (expressed in the bone's
//! local space) by the angle scaled with its falloff weight.

use glam::{Quat, Vec2};

use crate::apply::{ApplyContext, ApplyStats, BoneFrame, ROTATE_ANGLE_SCALE};
use crate::falloff::FalloffField;
use crate::rig::{Skeleton, SkeletonKey};

/// Rotation angle in radians for a pointer delta in screen pixels (y down).
///
/// Dragging up yields a negative angle about the forward axis.
#[must_use]
pub fn rotation_angle(pointer_delta: Vec2, power: f32) -> f32 {
    pointer_delta.y * power * ROTATE_ANGLE_SCALE
}

pub(crate) fn apply_skeleton(
    ctx: &ApplyContext<'_>,
    key: SkeletonKey,
    skeleton: &mut Skeleton,
    stats: &mut ApplyStats,
) {
    let angle = rotation_angle(ctx.pointer_delta, ctx.config.power);
    if angle.abs() <= f32::EPSILON {
        return;
    }

    let axis_world = ctx.view.forward();
    let field = FalloffField::for_rotate(ctx.config);
    let selected_only = ctx.config.affect_selected_only;

    let skeleton_world = skeleton.world_matrix;
    let active = skeleton.active_index();

    for (index, bone) in skeleton.bones.iter_mut().enumerate() {
        if !ctx.snapshot.contains(key, &bone.name) {
            continue;
        }
        if selected_only && !bone.selected && active != Some(index) {
            continue;
        }

        let frame = BoneFrame::new(skeleton_world, bone, ctx.pivot);
        let Some(weights) = field.sample(frame.distance) else {
            continue;
        };
        let Some(axis_local) = frame.local_direction(axis_world).try_normalize() else {
            continue;
        };

        bone.pose
            .pre_rotate(Quat::from_axis_angle(axis_local, angle * weights.rotation));
        stats.rotated += 1;
    }
}
