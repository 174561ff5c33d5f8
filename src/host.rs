//! Host collaborator interfaces
//!
//! The engine never owns scene data. It talks to the host through two seams:
//!
//! - [`PoseProvider`]: enumerate selected skeletons and read/write bone poses
//! - [`KeyframeSink`]: record the final pose when a session is committed
//!
//! Viewport draw hooks are expressed as [`HostEffect`](crate::session::HostEffect)
//! values returned from the session controller.

use glam::Vec3;
use uuid::Uuid;

use crate::rig::{BoneKey, BoneRotation, Skeleton, SkeletonKey};

/// Scene and pose data owned by the host.
///
/// The host must not mutate pose data while a session is active; the engine
/// relies on this cooperative contract rather than on locking.
pub trait PoseProvider {
    /// Whether the host is in pose-editing mode.
    fn in_pose_mode(&self) -> bool;

    /// Selected skeletons in selection order.
    fn selected_skeletons(&self) -> &[SkeletonKey];

    fn skeleton(&self, key: SkeletonKey) -> Option<&Skeleton>;

    fn skeleton_mut(&mut self, key: SkeletonKey) -> Option<&mut Skeleton>;

    /// Current timeline position used for keyframe recording.
    fn current_frame(&self) -> i32;
}

/// One keyframe recording request: the bone's full local pose at `frame`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeRequest {
    pub bone: BoneKey,
    /// Persistent rig identity; `bone.skeleton` is only valid for this scene.
    pub skeleton_id: Uuid,
    pub frame: i32,
    pub translation: Vec3,
    /// Recorded in the bone's active representation.
    pub rotation: BoneRotation,
    pub scale: Vec3,
}

/// Receives keyframe requests on commit.
pub trait KeyframeSink {
    fn record(&mut self, request: KeyframeRequest);
}

/// A sink that simply collects requests.
#[derive(Debug, Clone, Default)]
pub struct RecordedKeyframes {
    pub requests: Vec<KeyframeRequest>,
}

impl RecordedKeyframes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Finds the request recorded for a bone, if any.
    #[must_use]
    pub fn find(&self, skeleton: SkeletonKey, name: &str) -> Option<&KeyframeRequest> {
        self.requests
            .iter()
            .find(|r| r.bone.skeleton == skeleton && r.bone.name == name)
    }
}

impl KeyframeSink for RecordedKeyframes {
    fn record(&mut self, request: KeyframeRequest) {
        self.requests.push(request);
    }
}
