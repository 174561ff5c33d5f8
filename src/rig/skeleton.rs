use glam::{Affine3A, Vec3};
use uuid::Uuid;

use crate::rig::bone::Bone;

/// One rig instance: an ordered list of bones plus the rig's world placement.
#[derive(Debug, Clone)]
pub struct Skeleton {
    /// Stable across scenes, carried on keyframe requests.
    pub id: Uuid,
    pub name: String,

    // === Core Data ===
    // Ordered bone list; names are unique within this list only
    pub bones: Vec<Bone>,

    /// Object-to-world transform of the rig
    pub world_matrix: Affine3A,

    // Active bone index, owned by the host like the selection flags
    active: Option<usize>,
}

impl Skeleton {
    #[must_use]
    pub fn new(name: &str, world_matrix: Affine3A) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            bones: Vec::new(),
            world_matrix,
            active: None,
        }
    }

    /// Appends a bone and returns its index.
    pub fn add_bone(&mut self, bone: Bone) -> usize {
        self.bones.push(bone);
        self.bones.len() - 1
    }

    #[must_use]
    pub fn bone_index(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|b| b.name == name)
    }

    #[must_use]
    pub fn bone(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name == name)
    }

    pub fn bone_mut(&mut self, name: &str) -> Option<&mut Bone> {
        self.bones.iter_mut().find(|b| b.name == name)
    }

    /// Removes a bone by name, clearing the active marker if it pointed at it.
    pub fn remove_bone(&mut self, name: &str) -> Option<Bone> {
        let index = self.bone_index(name)?;
        match self.active {
            Some(active) if active == index => self.active = None,
            Some(active) if active > index => self.active = Some(active - 1),
            _ => {}
        }
        Some(self.bones.remove(index))
    }

    // ========================================================================
    // Active Bone
    // ========================================================================

    /// Marks the named bone active. Returns false if no such bone exists.
    pub fn set_active(&mut self, name: &str) -> bool {
        self.active = self.bone_index(name);
        self.active.is_some()
    }

    #[inline]
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn active_bone(&self) -> Option<&Bone> {
        self.active.and_then(|i| self.bones.get(i))
    }

    // ========================================================================
    // World Space Helpers
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn head_world(&self, bone: &Bone) -> Vec3 {
        self.world_matrix.transform_point3(bone.head)
    }

    #[inline]
    #[must_use]
    pub fn tail_world(&self, bone: &Bone) -> Vec3 {
        self.world_matrix.transform_point3(bone.tail)
    }

    /// World placement of a bone's rest frame (rig world × bone rest).
    #[inline]
    #[must_use]
    pub fn bone_world_matrix(&self, bone: &Bone) -> Affine3A {
        self.world_matrix * bone.rest_matrix
    }

    pub fn selected_bones(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter().filter(|b| b.selected)
    }
}
