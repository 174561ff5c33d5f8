use glam::{EulerRot, Quat, Vec3};

/// A bone's rotation in whichever representation the bone currently uses.
///
/// The variant doubles as the bone's rotation-mode flag: snapshots keep the
/// native representation so that a restore puts back both the value and the
/// mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoneRotation {
    Quaternion(Quat),
    Euler { angles: Vec3, order: EulerRot },
}

impl BoneRotation {
    pub const IDENTITY: Self = Self::Quaternion(Quat::IDENTITY);

    #[must_use]
    pub fn euler(x: f32, y: f32, z: f32) -> Self {
        Self::Euler {
            angles: Vec3::new(x, y, z),
            order: EulerRot::XYZ,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_quaternion(&self) -> bool {
        matches!(self, Self::Quaternion(_))
    }

    /// The rotation as a quaternion, regardless of mode.
    #[must_use]
    pub fn to_quat(&self) -> Quat {
        match *self {
            Self::Quaternion(q) => q,
            Self::Euler { angles, order } => Quat::from_euler(order, angles.x, angles.y, angles.z),
        }
    }

    /// Same rotation, up to quaternion sign.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_quat().dot(other.to_quat()).abs() >= 1.0 - epsilon
    }
}

impl Default for BoneRotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Local pose transform of a bone (translation offset, rotation, scale)
/// relative to its rest placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneTransform {
    pub translation: Vec3,
    pub rotation: BoneRotation,
    pub scale: Vec3,
}

impl BoneTransform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: BoneRotation::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Helper: switch to Euler mode (XYZ order) with the given angles.
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = BoneRotation::euler(x, y, z);
    }

    #[inline]
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        self.rotation.to_quat()
    }

    /// Pre-multiplies `delta` onto the current rotation.
    ///
    /// Euler bones are switched to quaternion mode first.
    pub fn pre_rotate(&mut self, delta: Quat) {
        self.rotation = BoneRotation::Quaternion(delta * self.rotation.to_quat());
    }
}

impl Default for BoneTransform {
    fn default() -> Self {
        Self::new()
    }
}
