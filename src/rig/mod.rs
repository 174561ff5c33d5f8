//! Rig data model
//!
//! Skeletons, bones and their pose transforms:
//! - [`Skeleton`]: one rig instance with a world placement
//! - [`Bone`]: head/tail segment with a local pose transform
//! - [`BoneTransform`] / [`BoneRotation`]: the pose values the editor writes
//! - [`PoseScene`]: an in-memory pose provider holding several rigs
//!
//! Skeletons are addressed through [`SkeletonKey`] arena handles, bones
//! through the composite [`BoneKey`] so that two rigs may share bone names.

pub mod bone;
pub mod scene;
pub mod skeleton;
pub mod transform;

pub use bone::Bone;
pub use scene::{EditMode, PoseScene};
pub use skeleton::Skeleton;
pub use transform::{BoneRotation, BoneTransform};

use slotmap::new_key_type;

new_key_type! {
    pub struct SkeletonKey;
}

/// Address of one bone: the owning skeleton plus the bone name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoneKey {
    pub skeleton: SkeletonKey,
    pub name: String,
}

impl BoneKey {
    #[must_use]
    pub fn new(skeleton: SkeletonKey, name: &str) -> Self {
        Self {
            skeleton,
            name: name.to_string(),
        }
    }
}
