use glam::{Affine3A, Quat, Vec3};

use crate::rig::transform::BoneTransform;

/// A jointed segment of a [`Skeleton`](crate::rig::Skeleton).
///
/// # Spaces
///
/// - `head` / `tail` are in rig-local space (the skeleton's object space).
/// - `rest_matrix` places the bone in rig space; bones point along their
///   local +Y axis.
/// - `pose` is the local pose offset the editor writes to.
///
/// Bone names are unique within one skeleton only.
#[derive(Debug, Clone)]
pub struct Bone {
    pub name: String,
    pub head: Vec3,
    pub tail: Vec3,
    pub rest_matrix: Affine3A,
    pub pose: BoneTransform,
    /// Selection flag, owned by the host.
    pub selected: bool,
}

impl Bone {
    /// Creates a bone between `head` and `tail` with a rest matrix derived
    /// from that segment.
    #[must_use]
    pub fn new(name: &str, head: Vec3, tail: Vec3) -> Self {
        Self {
            name: name.to_string(),
            head,
            tail,
            rest_matrix: rest_matrix_from_segment(head, tail),
            pose: BoneTransform::new(),
            selected: false,
        }
    }

    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn with_rest_matrix(mut self, rest_matrix: Affine3A) -> Self {
        self.rest_matrix = rest_matrix;
        self
    }

    #[must_use]
    pub fn with_pose(mut self, pose: BoneTransform) -> Self {
        self.pose = pose;
        self
    }
}

/// Rest placement for a bone: origin at `head`, local +Y towards `tail`.
///
/// Degenerate (zero-length) bones keep the identity orientation.
#[must_use]
pub fn rest_matrix_from_segment(head: Vec3, tail: Vec3) -> Affine3A {
    let rotation = (tail - head)
        .try_normalize()
        .map_or(Quat::IDENTITY, |dir| Quat::from_rotation_arc(Vec3::Y, dir));
    Affine3A::from_rotation_translation(rotation, head)
}
