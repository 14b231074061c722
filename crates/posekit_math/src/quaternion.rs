use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

use crate::matrix::Matrix4;
use crate::number_traits::Float;
use crate::vector::{Vector3, Vector4};

/// Per-component tolerance for quaternion equality, normalization and the
/// slerp fallback.
const QUATERNION_EPSILON: f64 = 0.000_000_1;

pub type Quaternionf = Quaternion<f32>;

/// Rotation quaternion stored as a scalar part `w` and a vector part
/// `(x, y, z)`.
///
/// Products follow the Hamilton convention: `a * b` rotates by `b` first,
/// then by `a`.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Quaternion<T = f32> {
    scalar_part: T,
    vector_part: Vector3<T>,
}

impl<T> Quaternion<T>
where
    T: Float,
{
    pub fn new(scalar_part: T, vector_part: Vector3<T>) -> Self {
        Self {
            scalar_part,
            vector_part,
        }
    }

    pub fn from_xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self::new(w, Vector3::new(x, y, z))
    }

    pub fn identity() -> Self {
        Self::from_xyzw(T::zero(), T::zero(), T::zero(), T::one())
    }

    pub fn scalar_part(&self) -> T {
        self.scalar_part
    }

    pub fn vector_part(&self) -> Vector3<T> {
        self.vector_part
    }

    pub fn x(&self) -> T {
        self.vector_part.x
    }

    pub fn y(&self) -> T {
        self.vector_part.y
    }

    pub fn z(&self) -> T {
        self.vector_part.z
    }

    pub fn w(&self) -> T {
        self.scalar_part
    }

    /// Rotation of `angle` radians around `axis`.
    ///
    /// The axis is normalized here. A zero-length axis yields a quaternion
    /// with a zero vector part, which is not a valid rotation.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let axis = axis.normalized();
        let half_angle = angle.half();
        let half_angle_sin = half_angle.sin();

        Self::new(half_angle.cos(), axis * half_angle_sin)
    }

    /// Shortest arc rotation taking the direction of `from` onto the
    /// direction of `to`.
    pub fn from_to(from: &Vector3<T>, to: &Vector3<T>) -> Self {
        let f = from.normalized();
        let t = to.normalized();

        if f.approx_eq(&t) {
            return Self::identity();
        }

        if f.approx_eq(&-t) {
            // Any axis orthogonal to `from` works, take the world axis least
            // aligned with it.
            let ortho = least_aligned_axis(&f);
            let axis = f.cross(&ortho).normalized();
            return Self::new(T::zero(), axis);
        }

        let half = (f + t).normalized();
        Self::new(f.dot(&half), f.cross(&half))
    }

    /// Orientation whose forward axis (+Z) points along `direction` and whose
    /// up axis (+Y) is as close as possible to `up`.
    ///
    /// `direction` and `up` must not be parallel.
    pub fn look_rotation(direction: &Vector3<T>, up: &Vector3<T>) -> Self {
        let forward = direction.normalized();
        let desired_up = up.normalized();
        let right = desired_up.cross(&forward).normalized();
        let desired_up = forward.cross(&right);

        let (zero, one) = (T::zero(), T::one());
        let world_to_object = Self::from_to(&Vector3::new(zero, zero, one), &forward);
        let object_up = world_to_object.apply_to_vector(&Vector3::new(zero, one, zero));
        // The twist must turn around `forward`, including the half turn case
        // where `from_to` would pick an arbitrary axis.
        let up_to_up = if object_up.approx_eq(&-desired_up) {
            Self::from_axis_angle(&forward, T::from_f64(std::f64::consts::PI))
        } else {
            Self::from_to(&object_up, &desired_up)
        };

        (up_to_up * world_to_object).normalized()
    }

    /// Rotation encoded by the forward and up columns of `m`.
    ///
    /// Only meaningful when the upper 3x3 block of `m` is close to
    /// orthonormal.
    pub fn from_rotation_matrix(m: &Matrix4<T>) -> Self {
        let up = m.up().truncate().normalized();
        let forward = m.forward().truncate().normalized();
        let right = up.cross(&forward);
        let up = forward.cross(&right);

        Self::look_rotation(&forward, &up)
    }

    /// Rotation matrix whose columns are the rotated basis axes.
    pub fn rotation_matrix(&self) -> Matrix4<T> {
        let (zero, one) = (T::zero(), T::one());
        let right = self.apply_to_vector(&Vector3::new(one, zero, zero));
        let up = self.apply_to_vector(&Vector3::new(zero, one, zero));
        let forward = self.apply_to_vector(&Vector3::new(zero, zero, one));

        Matrix4::from_columns(
            right.extend(zero),
            up.extend(zero),
            forward.extend(zero),
            Vector4::new(zero, zero, zero, one),
        )
    }

    pub fn axis(&self) -> Vector3<T> {
        self.vector_part.normalized()
    }

    pub fn angle(&self) -> T {
        T::two() * clamp_unit(self.scalar_part).acos()
    }

    pub fn apply_to_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        let u = self.vector_part;
        let s = self.scalar_part;
        u * u.dot(v) * T::two() + *v * (s * s - u.dot(&u)) + u.cross(v) * T::two() * s
    }

    pub fn dot(&self, other: &Self) -> T {
        self.scalar_part * other.scalar_part + self.vector_part.dot(&other.vector_part)
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Length of the quaternion, 0 below the epsilon.
    pub fn norm(&self) -> T {
        let norm_squared = self.norm_squared();
        if norm_squared < epsilon() {
            return T::zero();
        }
        norm_squared.sqrt()
    }

    /// Scales to unit length in place. Near-zero quaternions are left as is.
    pub fn normalize(&mut self) {
        let norm_squared = self.norm_squared();
        if norm_squared < epsilon() {
            return;
        }
        let inverse_norm = norm_squared.sqrt().recip();
        self.vector_part *= inverse_norm;
        self.scalar_part *= inverse_norm;
    }

    /// Unit length copy, or the identity when `self` is near zero.
    pub fn normalized(&self) -> Self {
        if self.norm_squared() < epsilon() {
            return Self::identity();
        }
        let mut normalized_quaternion = *self;
        normalized_quaternion.normalize();
        normalized_quaternion
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.scalar_part, -self.vector_part)
    }

    /// Multiplicative inverse, or the identity when `self` is near zero.
    pub fn inverse(&self) -> Self {
        let norm_squared = self.norm_squared();
        if norm_squared < epsilon() {
            return Self::identity();
        }
        self.conjugate() * norm_squared.recip()
    }

    /// Raises a unit quaternion to the power `exponent`, scaling its angle
    /// while keeping its axis.
    pub fn pow(&self, exponent: T) -> Self {
        let angle = self.angle();
        let axis = self.axis();
        let half_angle = (exponent * angle).half();

        Self::new(half_angle.cos(), axis * half_angle.sin())
    }

    /// Component-wise blend, without renormalization.
    pub fn mix(&self, to: &Self, t: T) -> Self {
        *self * (T::one() - t) + *to * t
    }

    pub fn nlerp(&self, to: &Self, t: T) -> Self {
        (*self + (*to - *self) * t).normalized()
    }

    /// Spherical interpolation from `self` (`t = 0`) to `to` (`t = 1`).
    ///
    /// Falls back to [`Quaternion::nlerp`] when both inputs are nearly
    /// parallel or antiparallel.
    pub fn slerp(&self, to: &Self, t: T) -> Self {
        if self.dot(to).abs() > T::one() - epsilon() {
            return self.nlerp(to, t);
        }

        let delta = self.inverse() * *to;
        (*self * delta.pow(t)).normalized()
    }

    /// Whether both quaternions encode the same rotation, accounting for
    /// `q` and `-q` being the same orientation.
    pub fn same_orientation(&self, other: &Self) -> bool {
        *self == *other || *self == -*other
    }
}

fn epsilon<T: Float>() -> T {
    T::from_f64(QUATERNION_EPSILON)
}

fn clamp_unit<T: Float>(value: T) -> T {
    if value > T::one() {
        T::one()
    } else if value < -T::one() {
        -T::one()
    } else {
        value
    }
}

fn least_aligned_axis<T: Float>(v: &Vector3<T>) -> Vector3<T> {
    let (x, y, z) = (v.x.abs(), v.y.abs(), v.z.abs());
    let (zero, one) = (T::zero(), T::one());
    if x <= y && x <= z {
        Vector3::new(one, zero, zero)
    } else if y <= z {
        Vector3::new(zero, one, zero)
    } else {
        Vector3::new(zero, zero, one)
    }
}

impl<T> Default for Quaternion<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> PartialEq for Quaternion<T>
where
    T: Float,
{
    fn eq(&self, other: &Self) -> bool {
        let tolerance: T = epsilon();
        (self.scalar_part - other.scalar_part).abs() <= tolerance
            && (self.vector_part.x - other.vector_part.x).abs() <= tolerance
            && (self.vector_part.y - other.vector_part.y).abs() <= tolerance
            && (self.vector_part.z - other.vector_part.z).abs() <= tolerance
    }
}

impl<T> Display for Quaternion<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} + {} i + {} j + {} k)",
            self.scalar_part, self.vector_part.x, self.vector_part.y, self.vector_part.z
        )
    }
}

impl<T> From<Matrix4<T>> for Quaternion<T>
where
    T: Float,
{
    fn from(m: Matrix4<T>) -> Self {
        Self::from_rotation_matrix(&m)
    }
}

impl<T> Add for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.scalar_part + rhs.scalar_part,
            self.vector_part + rhs.vector_part,
        )
    }
}

impl<T> Sub for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.scalar_part - rhs.scalar_part,
            self.vector_part - rhs.vector_part,
        )
    }
}

impl<T> Neg for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.scalar_part, -self.vector_part)
    }
}

impl<T> Mul<T> for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.scalar_part * rhs, self.vector_part * rhs)
    }
}

impl<T> Mul<Vector3<T>> for Quaternion<T>
where
    T: Float,
{
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        self.apply_to_vector(&rhs)
    }
}

impl<T> Mul for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let x1 = self.vector_part.x;
        let y1 = self.vector_part.y;
        let z1 = self.vector_part.z;
        let w1 = self.scalar_part;

        let x2 = rhs.vector_part.x;
        let y2 = rhs.vector_part.y;
        let z2 = rhs.vector_part.z;
        let w2 = rhs.scalar_part;

        let scalar_part = w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2;
        let vector_part = Vector3::new(
            x1 * w2 + y1 * z2 - z1 * y2 + w1 * x2,
            y1 * w2 + z1 * x2 + w1 * y2 - x1 * z2,
            z1 * w2 + w1 * z2 + x1 * y2 - y1 * x2,
        );

        Quaternion::new(scalar_part, vector_part)
    }
}
