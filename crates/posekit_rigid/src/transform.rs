use std::fmt::{Display, Formatter};

use posekit_math::matrix::Matrix4;
use posekit_math::number_traits::Float;
use posekit_math::quaternion::Quaternion;
use posekit_math::vector::{Vector3, Vector4};

pub type Transformf = Transform<f32>;

/// Affine transform applied as scale, then rotation, then translation.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Transform<T = f32> {
    pub position: Vector3<T>,
    pub rotation: Quaternion<T>,
    pub scale: Vector3<T>,
}

impl<T> Transform<T>
where
    T: Float,
{
    pub fn new(position: Vector3<T>, rotation: Quaternion<T>, scale: Vector3<T>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn identity() -> Self {
        Self::new(
            Vector3::default(),
            Quaternion::identity(),
            Vector3::new(T::one(), T::one(), T::one()),
        )
    }

    pub fn from_position(position: Vector3<T>) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn from_rotation(rotation: Quaternion<T>) -> Self {
        Self {
            rotation,
            ..Self::identity()
        }
    }

    /// Composes `self` (parent) with `child`: applying the result is the
    /// same as applying `child`, then `self`.
    pub fn combine(&self, child: &Self) -> Self {
        Self {
            position: self.transform_point(&child.position),
            rotation: self.rotation * child.rotation,
            scale: self.scale.component_mul(&child.scale),
        }
    }

    /// Transform undoing `self`.
    ///
    /// Zero scale components are not guarded and produce infinities.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.conjugate();
        let scale = Vector3::new(
            self.scale.x.recip(),
            self.scale.y.recip(),
            self.scale.z.recip(),
        );
        let position = rotation * (-self.position).component_mul(&scale);

        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Blends two transforms. Rotations are nlerped without a hemisphere
    /// check, so large angular differences may take the long way round.
    pub fn mix(&self, to: &Self, t: T) -> Self {
        Self {
            position: self.position.lerp(&to.position, t),
            rotation: self.rotation.nlerp(&to.rotation, t),
            scale: self.scale.lerp(&to.scale, t),
        }
    }

    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        self.position + self.transform_vector(point)
    }

    pub fn transform_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        self.rotation * self.scale.component_mul(vector)
    }

    pub fn as_matrix4(&self) -> Matrix4<T> {
        let (zero, one) = (T::zero(), T::one());
        let right = self.rotation * Vector3::new(self.scale.x, zero, zero);
        let up = self.rotation * Vector3::new(zero, self.scale.y, zero);
        let forward = self.rotation * Vector3::new(zero, zero, self.scale.z);

        Matrix4::from_columns(
            right.extend(zero),
            up.extend(zero),
            forward.extend(zero),
            self.position.extend(one),
        )
    }
}

impl<T> Default for Transform<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> From<Matrix4<T>> for Transform<T>
where
    T: Float,
{
    /// Reads scale from the basis column lengths and rotation from the
    /// normalized basis. Shear is not recovered.
    fn from(value: Matrix4<T>) -> Self {
        let right = value.right().truncate();
        let up = value.up().truncate();
        let forward = value.forward().truncate();
        let zero = T::zero();

        let rotation_matrix = Matrix4::from_columns(
            right.normalized().extend(zero),
            up.normalized().extend(zero),
            forward.normalized().extend(zero),
            Vector4::new(zero, zero, zero, T::one()),
        );

        Self {
            position: value.position().truncate(),
            rotation: rotation_matrix.into(),
            scale: Vector3::new(right.norm(), up.norm(), forward.norm()),
        }
    }
}

impl<T> Display for Transform<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "position: {}, rotation: {}, scale: {}",
            self.position, self.rotation, self.scale
        )
    }
}
