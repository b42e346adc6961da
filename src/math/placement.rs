use glam::{Mat4, Quat, Vec3};

/// Rigid transform: rotation followed by translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Placement {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::IDENTITY)
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self::new(Vec3::ZERO, rotation)
    }

    /// Compose with a transform expressed in this placement's local frame.
    /// `parent.then(child)` maps child-local points to parent space.
    pub fn then(&self, local: &Placement) -> Placement {
        Placement {
            translation: self.translation + self.rotation * local.translation,
            rotation: (self.rotation * local.rotation).normalize(),
        }
    }

    /// Move along this placement's own axes
    pub fn translate_local(&self, offset: Vec3) -> Placement {
        self.then(&Placement::from_translation(offset))
    }

    /// Rotate about this placement's own axes
    pub fn rotate_local(&self, rotation: Quat) -> Placement {
        self.then(&Placement::from_rotation(rotation))
    }

    pub fn inverse(&self) -> Placement {
        let rotation = self.rotation.inverse();
        Placement {
            translation: -(rotation * self.translation),
            rotation,
        }
    }

    /// Re-express this placement in the frame of `base`
    pub fn relative_to(&self, base: &Placement) -> Placement {
        base.inverse().then(self)
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Equality up to `epsilon`, treating `q` and `-q` as the same rotation
    pub fn approx_eq(&self, other: &Placement, epsilon: f32) -> bool {
        self.translation.distance(other.translation) <= epsilon
            && self.rotation.dot(other.rotation).abs() >= 1.0 - epsilon
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}
