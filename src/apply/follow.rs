//! Rotation-follow (cloth mode)
//!
//! Nudges a bone's rotation so that its axis swings towards the pivot. The
//! bone endpoint closer to the pivot acts as the effective tail; the rotation
//! that would align the bone axis with the direction from that endpoint to
//! the pivot is scaled by the weight and pre-multiplied onto the bone's
//! current rotation.

use glam::{Affine3A, Quat, Vec3};

use crate::rig::Bone;

/// Weighted rotation that swings the segment `head → tail` towards `pivot`.
///
/// All inputs are world space. Returns `None` for degenerate geometry: a
/// zero-length bone, an endpoint sitting on the pivot, or a bone already
/// aligned with (or opposite to) the pivot direction.
#[must_use]
pub fn follow_rotation(head: Vec3, tail: Vec3, pivot: Vec3, weight: f32) -> Option<Quat> {
    let (bone_dir, target_dir) = if tail.distance(pivot) < head.distance(pivot) {
        (tail - head, pivot - tail)
    } else {
        (head - tail, pivot - head)
    };

    let bone_dir = bone_dir.try_normalize()?;
    let target_dir = target_dir.try_normalize()?;
    let axis = bone_dir.cross(target_dir).try_normalize()?;
    let angle = bone_dir.angle_between(target_dir);

    Some(Quat::from_axis_angle(axis, angle * weight))
}

/// Applies [`follow_rotation`] to a bone of a skeleton placed at
/// `skeleton_world`. Returns whether the bone was rotated.
pub fn rotate_towards(bone: &mut Bone, skeleton_world: Affine3A, pivot: Vec3, weight: f32) -> bool {
    let head = skeleton_world.transform_point3(bone.head);
    let tail = skeleton_world.transform_point3(bone.tail);

    match follow_rotation(head, tail, pivot, weight) {
        Some(delta) => {
            bone.pose.pre_rotate(delta);
            true
        }
        None => false,
    }
}
