use glam::Vec2;

use crate::apply::TransformKind;
use crate::pivot::Pivot;
use crate::rig::SkeletonKey;
use crate::snapshot::Snapshot;

/// State of one active editing session.
///
/// Created on invoke and dropped on commit or cancel; the controller is
/// active exactly while it holds one.
#[derive(Debug, Clone)]
pub struct Session {
    pub kind: TransformKind,
    /// Pointer position when the session started, screen pixels.
    pub start_pointer: Vec2,
    /// Latest pointer position, screen pixels.
    pub pointer: Vec2,
    /// Pivot of the latest recomputation.
    pub pivot: Pivot,
    pub snapshot: Snapshot,
    /// Skeletons selected at session start, in selection order.
    pub skeletons: Vec<SkeletonKey>,
}

impl Session {
    #[must_use]
    pub fn new(
        kind: TransformKind,
        pointer: Vec2,
        pivot: Pivot,
        snapshot: Snapshot,
        skeletons: Vec<SkeletonKey>,
    ) -> Self {
        Self {
            kind,
            start_pointer: pointer,
            pointer,
            pivot,
            snapshot,
            skeletons,
        }
    }

    /// Accumulated pointer travel since the session started.
    #[inline]
    #[must_use]
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer - self.start_pointer
    }
}
