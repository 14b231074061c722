use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::number_traits::{Float, Zero};

/// Squared length below which a vector is treated as zero.
const VECTOR_EPSILON: f64 = 0.000_000_1;

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub struct $name<T = f32> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where T: Float {
            pub fn dot(&self, other: &Self) -> T {
                let mut dot = T::zero();
                $(dot += self.$dim * other.$dim;)*
                dot
            }

            pub fn norm_squared(&self) -> T {
                self.dot(self)
            }

            pub fn norm(&self) -> T {
                self.norm_squared().sqrt()
            }

            /// Scales the vector to unit length. Vectors shorter than the
            /// epsilon are left untouched.
            pub fn normalize(&mut self) {
                let norm_squared = self.norm_squared();
                if norm_squared < T::from_f64(VECTOR_EPSILON) {
                    return;
                }
                let inverse_norm = norm_squared.sqrt().recip();
                $(self.$dim *= inverse_norm;)*
            }

            /// Returns the unit vector pointing the same way, or the zero
            /// vector when `self` is too short to have a direction.
            pub fn normalized(&self) -> Self {
                if self.norm_squared() < T::from_f64(VECTOR_EPSILON) {
                    return Self::default();
                }
                let mut normalized = *self;
                normalized.normalize();
                normalized
            }

            pub fn lerp(&self, to: &Self, t: T) -> Self {
                Self {
                    $($dim: self.$dim + (to.$dim - self.$dim) * t),*
                }
            }

            pub fn component_mul(&self, other: &Self) -> Self {
                Self {
                    $($dim: self.$dim * other.$dim),*
                }
            }

            /// Epsilon equality on the squared distance between both vectors.
            pub fn approx_eq(&self, other: &Self) -> bool {
                (*self - *other).norm_squared() < T::from_f64(VECTOR_EPSILON)
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + Add<Output = T>, {
            fn add_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            fn sub_assign(&mut self, rhs: Self) {
                *self = Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            fn mul_assign(&mut self, rhs: T) {
                *self = Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            fn div_assign(&mut self, rhs: T) {
                *self = Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }
    };
}

struct_vec!(Vector2: "({}, {})", (x: T => 0, y: T => 1,));
struct_vec!(Vector3: "({}, {}, {})", (x: T => 0, y: T => 1, z: T => 2,));
struct_vec!(Vector4: "({}, {}, {}, {})", (x: T => 0, y: T => 1, z: T => 2, w: T => 3,));

impl<T> Vector4<T> {
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl<T> Vector3<T> {
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl<T> Vector3<T>
where
    T: Float,
{
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Unsigned angle in radians between both vectors, 0 if either one is
    /// too short to have a direction.
    pub fn angle(&self, other: &Vector3<T>) -> T {
        let epsilon = T::from_f64(VECTOR_EPSILON);
        let norm_squared = self.norm_squared();
        let other_norm_squared = other.norm_squared();
        if norm_squared < epsilon || other_norm_squared < epsilon {
            return T::zero();
        }
        let cos_angle = self.dot(other) / (norm_squared.sqrt() * other_norm_squared.sqrt());
        clamp_unit(cos_angle).acos()
    }

    /// Component of `self` along `onto`.
    pub fn project(&self, onto: &Vector3<T>) -> Vector3<T> {
        let onto_norm_squared = onto.norm_squared();
        if onto_norm_squared < T::from_f64(VECTOR_EPSILON) {
            return Vector3::default();
        }
        *onto * (self.dot(onto) / onto_norm_squared)
    }

    /// Component of `self` perpendicular to `onto`.
    pub fn reject(&self, onto: &Vector3<T>) -> Vector3<T> {
        *self - self.project(onto)
    }

    /// Bounces `self` off the plane whose normal is `normal`.
    pub fn reflect(&self, normal: &Vector3<T>) -> Vector3<T> {
        let normal_norm_squared = normal.norm_squared();
        if normal_norm_squared < T::from_f64(VECTOR_EPSILON) {
            return Vector3::default();
        }
        let scale = self.dot(normal) / normal_norm_squared;
        *self - *normal * (scale * T::two())
    }

    pub fn slerp(&self, to: &Vector3<T>, t: T) -> Vector3<T> {
        if t < T::from_f64(0.01) {
            return self.lerp(to, t);
        }
        let from = self.normalized();
        let to = to.normalized();
        let theta = from.angle(&to);
        let sin_theta = theta.sin();
        if sin_theta.abs() < T::from_f64(VECTOR_EPSILON) {
            return from.lerp(&to, t).normalized();
        }
        let a = ((T::one() - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        from * a + to * b
    }

    pub fn nlerp(&self, to: &Vector3<T>, t: T) -> Vector3<T> {
        self.lerp(to, t).normalized()
    }
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

impl<T> From<[T; 3]> for Vector3<T>
where
    T: Copy,
{
    fn from(value: [T; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<T> From<Vector4<T>> for [T; 4] {
    fn from(value: Vector4<T>) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}
