use slotmap::SlotMap;

use crate::host::PoseProvider;
use crate::rig::{Skeleton, SkeletonKey};

/// Host editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Object,
    Pose,
}

/// In-memory pose provider: a set of skeletons, an ordered selection and the
/// timeline position.
///
/// Hosts with their own scene graph implement [`PoseProvider`] directly; this
/// type backs tests, demos and simple embeddings.
#[derive(Debug, Default)]
pub struct PoseScene {
    skeletons: SlotMap<SkeletonKey, Skeleton>,
    selection: Vec<SkeletonKey>,
    pub mode: EditMode,
    pub current_frame: i32,
}

impl PoseScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_skeleton(&mut self, skeleton: Skeleton) -> SkeletonKey {
        self.skeletons.insert(skeleton)
    }

    /// Appends a skeleton to the selection (selection order is preserved).
    pub fn select(&mut self, key: SkeletonKey) {
        if self.skeletons.contains_key(key) && !self.selection.contains(&key) {
            self.selection.push(key);
        }
    }

    pub fn deselect(&mut self, key: SkeletonKey) {
        self.selection.retain(|k| *k != key);
    }

    pub fn skeletons(&self) -> impl Iterator<Item = (SkeletonKey, &Skeleton)> {
        self.skeletons.iter()
    }
}

impl PoseProvider for PoseScene {
    fn in_pose_mode(&self) -> bool {
        self.mode == EditMode::Pose
    }

    fn selected_skeletons(&self) -> &[SkeletonKey] {
        &self.selection
    }

    fn skeleton(&self, key: SkeletonKey) -> Option<&Skeleton> {
        self.skeletons.get(key)
    }

    fn skeleton_mut(&mut self, key: SkeletonKey) -> Option<&mut Skeleton> {
        self.skeletons.get_mut(key)
    }

    fn current_frame(&self) -> i32 {
        self.current_frame
    }
}
