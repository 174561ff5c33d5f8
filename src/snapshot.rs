//! Snapshot Store
//!
//! Baseline transforms captured once when a session starts. Every
//! recomputation resets the tracked bones from here before re-applying the
//! deltas, and cancel restores them in full. The store is never written to
//! after capture.
//!
//! Entries are keyed by `(SkeletonKey, bone name)`, so bones that share a
//! name across rigs do not collide.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::host::PoseProvider;
use crate::rig::{BoneKey, BoneRotation, Skeleton, SkeletonKey};

/// Original translation and rotation (in its native mode) of one bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneSnapshot {
    pub translation: Vec3,
    pub rotation: BoneRotation,
}

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    skeletons: FxHashMap<SkeletonKey, FxHashMap<String, BoneSnapshot>>,
    // Capture order, so resets and restores walk rigs deterministically
    order: Vec<SkeletonKey>,
    bone_count: usize,
}

impl Snapshot {
    /// Captures every bone of every listed skeleton.
    #[must_use]
    pub fn capture<P>(pose: &P, skeletons: &[SkeletonKey]) -> Self
    where
        P: PoseProvider + ?Sized,
    {
        let mut snapshot = Self::default();

        for &key in skeletons {
            let Some(skeleton) = pose.skeleton(key) else {
                continue;
            };
            if snapshot.skeletons.contains_key(&key) {
                continue;
            }

            let bones: FxHashMap<String, BoneSnapshot> = skeleton
                .bones
                .iter()
                .map(|bone| {
                    let entry = BoneSnapshot {
                        translation: bone.pose.translation,
                        rotation: bone.pose.rotation,
                    };
                    (bone.name.clone(), entry)
                })
                .collect();

            snapshot.bone_count += bones.len();
            snapshot.skeletons.insert(key, bones);
            snapshot.order.push(key);
        }

        snapshot
    }

    #[must_use]
    pub fn get(&self, skeleton: SkeletonKey, name: &str) -> Option<&BoneSnapshot> {
        self.skeletons.get(&skeleton)?.get(name)
    }

    #[must_use]
    pub fn get_key(&self, key: &BoneKey) -> Option<&BoneSnapshot> {
        self.get(key.skeleton, &key.name)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, skeleton: SkeletonKey, name: &str) -> bool {
        self.get(skeleton, name).is_some()
    }

    /// Tracked skeletons in capture order.
    #[must_use]
    pub fn skeletons(&self) -> &[SkeletonKey] {
        &self.order
    }

    /// Number of tracked bones.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bone_count
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bone_count == 0
    }

    /// Writes the baseline back onto every tracked bone of one skeleton.
    /// Returns how many bones were reset.
    pub fn reset_skeleton(&self, key: SkeletonKey, skeleton: &mut Skeleton) -> usize {
        let Some(bones) = self.skeletons.get(&key) else {
            return 0;
        };

        let mut reset = 0;
        for bone in &mut skeleton.bones {
            if let Some(entry) = bones.get(bone.name.as_str()) {
                bone.pose.translation = entry.translation;
                bone.pose.rotation = entry.rotation;
                reset += 1;
            }
        }
        reset
    }

    /// Restores every tracked bone that still exists. Missing skeletons and
    /// bones are skipped.
    pub fn restore_all<P>(&self, pose: &mut P) -> usize
    where
        P: PoseProvider + ?Sized,
    {
        let mut restored = 0;
        for &key in &self.order {
            let Some(skeleton) = pose.skeleton_mut(key) else {
                log::debug!("Snapshot restore: skeleton {key:?} no longer exists, skipping");
                continue;
            };
            restored += self.reset_skeleton(key, skeleton);
        }

        if restored < self.bone_count {
            log::debug!(
                "Snapshot restore: {} of {} bones restored, the rest are gone",
                restored,
                self.bone_count
            );
        }
        restored
    }
}
