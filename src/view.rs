use glam::{Mat3, Quat, Vec3};

/// Orientation of the viewer (the viewport camera), supplied by the host
/// every frame.
///
/// The view looks down its local -Z with +Y up, like a regular camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOrientation {
    pub rotation: Quat,
}

impl ViewOrientation {
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
    };

    #[must_use]
    pub fn new(rotation: Quat) -> Self {
        Self { rotation }
    }

    /// Orientation of a viewer at `eye` looking at `target`.
    ///
    /// Falls back to the identity when `up` is collinear with the view
    /// direction.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let Some(forward) = (target - eye).try_normalize() else {
            return Self::IDENTITY;
        };
        if forward.cross(up).length_squared() < 1e-4 {
            return Self::IDENTITY;
        }

        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward).normalize();
        let rot_mat = Mat3::from_cols(right, new_up, -forward);
        Self::new(Quat::from_mat3(&rot_mat))
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    #[inline]
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Viewing direction (into the screen).
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// A point on the view-aligned plane through `center`.
    #[inline]
    #[must_use]
    pub fn plane_point(&self, center: Vec3, x: f32, y: f32) -> Vec3 {
        center + self.rotation * Vec3::new(x, y, 0.0)
    }
}

impl Default for ViewOrientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
