//! Center Resolver
//!
//! Computes the pivot point distances are measured from:
//!
//! 1. With `use_active_as_center`, the world head of the first active bone
//!    found across the session's skeletons (selection order).
//! 2. Otherwise the mean world head of every selected bone across all of
//!    those skeletons.
//! 3. With nothing selected the pivot stays at the world origin, reported as
//!    [`PivotSource::Origin`].

use glam::Vec3;

use crate::host::PoseProvider;
use crate::rig::SkeletonKey;

/// Where a resolved pivot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotSource {
    /// Head of the active bone of this skeleton.
    ActiveBone(SkeletonKey),
    /// Mean head of this many selected bones.
    SelectionMean(usize),
    /// Nothing to resolve against.
    Origin,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub point: Vec3,
    pub source: PivotSource,
}

impl Pivot {
    pub const ORIGIN: Self = Self {
        point: Vec3::ZERO,
        source: PivotSource::Origin,
    };
}

impl Default for Pivot {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Resolves the pivot over the given skeletons. Unknown keys are ignored.
#[must_use]
pub fn resolve_pivot<P>(pose: &P, skeletons: &[SkeletonKey], use_active_as_center: bool) -> Pivot
where
    P: PoseProvider + ?Sized,
{
    if use_active_as_center {
        for &key in skeletons {
            let Some(skeleton) = pose.skeleton(key) else {
                continue;
            };
            if let Some(active) = skeleton.active_bone() {
                return Pivot {
                    point: skeleton.head_world(active),
                    source: PivotSource::ActiveBone(key),
                };
            }
        }
    }

    let mut sum = Vec3::ZERO;
    let mut count = 0usize;
    for skeleton in skeletons.iter().filter_map(|&key| pose.skeleton(key)) {
        for bone in skeleton.selected_bones() {
            sum += skeleton.head_world(bone);
            count += 1;
        }
    }

    if count == 0 {
        log::warn!("Proportional edit: no bones selected, pivot defaults to the world origin");
        return Pivot::ORIGIN;
    }

    Pivot {
        point: sum / count as f32,
        source: PivotSource::SelectionMean(count),
    }
}
