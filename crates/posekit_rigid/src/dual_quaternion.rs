use std::ops::{Add, Mul};

use posekit_math::number_traits::Float;
use posekit_math::quaternion::Quaternion;
use posekit_math::vector::Vector3;
use posekit_math::{MathError, Result};

use crate::transform::Transform;

/// Squared magnitude of the real part below which a dual quaternion is
/// considered degenerate.
const MAGNITUDE_EPSILON: f64 = 0.000_001;

pub type DualQuaternionf = DualQuaternion<f32>;

/// Rigid motion (rotation and translation, no scale) encoded as a pair of
/// quaternions.
///
/// `real` holds the rotation and `dual` the translation coupled through it:
/// `dual = 0.5 * t * real` where `t` is the translation as a pure
/// quaternion.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct DualQuaternion<T = f32> {
    pub real: Quaternion<T>,
    pub dual: Quaternion<T>,
}

impl<T> DualQuaternion<T>
where
    T: Float,
{
    pub fn new(real: Quaternion<T>, dual: Quaternion<T>) -> Self {
        Self { real, dual }
    }

    pub fn identity() -> Self {
        Self::new(
            Quaternion::identity(),
            Quaternion::from_xyzw(T::zero(), T::zero(), T::zero(), T::zero()),
        )
    }

    /// Rigid part of `transform`. Its scale is dropped.
    pub fn from_transform(transform: &Transform<T>) -> Self {
        let translation = Quaternion::new(T::zero(), transform.position);
        let real = transform.rotation;
        let dual = translation * real * T::one().half();

        Self::new(real, dual)
    }

    /// Rotation and translation as a [`Transform`] with unit scale.
    pub fn to_transform(&self) -> Transform<T> {
        Transform::new(self.translation(), self.real, Vector3::new(T::one(), T::one(), T::one()))
    }

    pub fn translation(&self) -> Vector3<T> {
        ((self.dual * T::two()) * self.real.conjugate()).vector_part()
    }

    /// Dot product of the real parts.
    pub fn dot(&self, other: &Self) -> T {
        self.real.dot(&other.real)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.real.conjugate(), self.dual.conjugate())
    }

    /// Unit copy of `self`.
    ///
    /// # Errors
    ///
    /// Will return [`MathError::DegenerateDualQuaternion`] if the real part
    /// has (almost) no magnitude.
    pub fn try_normalized(&self) -> Result<Self> {
        let magnitude_squared = self.real.dot(&self.real);
        if magnitude_squared < T::from_f64(MAGNITUDE_EPSILON) {
            return Err(MathError::DegenerateDualQuaternion);
        }
        Ok(*self * magnitude_squared.sqrt().recip())
    }

    /// Unit copy of `self`, or the identity when the real part has (almost)
    /// no magnitude.
    pub fn normalized(&self) -> Self {
        self.try_normalized().unwrap_or_else(|_| Self::identity())
    }

    /// In place variant of [`DualQuaternion::normalized`], with the same
    /// identity fallback.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        self.real * *point + self.translation()
    }

    /// Rotates `vector`; translation does not apply to directions.
    pub fn transform_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        self.real * *vector
    }
}

impl<T> Default for DualQuaternion<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> From<Transform<T>> for DualQuaternion<T>
where
    T: Float,
{
    fn from(transform: Transform<T>) -> Self {
        Self::from_transform(&transform)
    }
}

impl<T> From<DualQuaternion<T>> for Transform<T>
where
    T: Float,
{
    fn from(dual_quaternion: DualQuaternion<T>) -> Self {
        dual_quaternion.to_transform()
    }
}

impl<T> PartialEq for DualQuaternion<T>
where
    T: Float,
{
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real && self.dual == other.dual
    }
}

impl<T> Add for DualQuaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl<T> Mul<T> for DualQuaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.real * rhs, self.dual * rhs)
    }
}

impl<T> Mul for DualQuaternion<T>
where
    T: Float,
{
    type Output = Self;

    /// Motion applying `rhs` first, then `self`.
    ///
    /// Both operands are normalized before combining, so this is not the raw
    /// dual quaternion product.
    fn mul(self, rhs: Self) -> Self::Output {
        let lhs = self.normalized();
        let rhs = rhs.normalized();

        Self::new(
            lhs.real * rhs.real,
            lhs.real * rhs.dual + lhs.dual * rhs.real,
        )
    }
}
