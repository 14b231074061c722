use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign};

use log::warn;

use crate::error::{MathError, Result};
use crate::number_traits::{Float, One, Zero};
use crate::vector::{Vector3, Vector4};

/// Per-component tolerance for matrix equality.
const MATRIX_EPSILON: f64 = 0.000_001;

pub type Matrix4f = Matrix4<f32>;

/// 4x4 matrix stored column-major.
///
/// Column 0 is the right axis, 1 the up axis, 2 the forward axis and 3 the
/// position. `m[column][row]` indexes a single element.
#[derive(Clone, Copy)]
pub struct Matrix4<T = f32> {
    values: [T; 16],
}

impl<T> Debug for Matrix4<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for row in 0..Self::ROWS {
            write!(f, "\t")?;
            for column in 0..Self::COLS {
                write!(f, "{}, ", self.values[column * Self::ROWS + row])?;
            }
            writeln!(f)?;
        }
        writeln!(f, "]")
    }
}

impl<T> Display for Matrix4<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::ROWS {
            let values = &self.values;
            writeln!(
                f,
                "{} {} {} {}",
                values[row],
                values[Self::ROWS + row],
                values[2 * Self::ROWS + row],
                values[3 * Self::ROWS + row]
            )?;
        }
        Ok(())
    }
}

impl<T> Matrix4<T> {
    const COLS: usize = 4;
    const ROWS: usize = 4;

    /// Builds a matrix from 16 values in column-major order.
    pub const fn with_values(values: [T; 16]) -> Self {
        Self { values }
    }

    pub fn as_array(&self) -> &[T; 16] {
        &self.values
    }
}

impl<T> Matrix4<T>
where
    T: Copy,
{
    #[rustfmt::skip]
    pub fn from_columns(
        right: Vector4<T>,
        up: Vector4<T>,
        forward: Vector4<T>,
        position: Vector4<T>,
    ) -> Self {
        Self::with_values([
            right.x, right.y, right.z, right.w,
            up.x, up.y, up.z, up.w,
            forward.x, forward.y, forward.z, forward.w,
            position.x, position.y, position.z, position.w,
        ])
    }

    pub fn column(&self, index: usize) -> Vector4<T> {
        let start = index * Self::ROWS;
        Vector4::new(
            self.values[start],
            self.values[start + 1],
            self.values[start + 2],
            self.values[start + 3],
        )
    }

    pub fn set_column(&mut self, index: usize, column: Vector4<T>) {
        let start = index * Self::ROWS;
        self.values[start] = column.x;
        self.values[start + 1] = column.y;
        self.values[start + 2] = column.z;
        self.values[start + 3] = column.w;
    }

    pub fn right(&self) -> Vector4<T> {
        self.column(0)
    }

    pub fn up(&self) -> Vector4<T> {
        self.column(1)
    }

    pub fn forward(&self) -> Vector4<T> {
        self.column(2)
    }

    pub fn position(&self) -> Vector4<T> {
        self.column(3)
    }

    pub fn set_right(&mut self, right: Vector4<T>) {
        self.set_column(0, right);
    }

    pub fn set_up(&mut self, up: Vector4<T>) {
        self.set_column(1, up);
    }

    pub fn set_forward(&mut self, forward: Vector4<T>) {
        self.set_column(2, forward);
    }

    pub fn set_position(&mut self, position: Vector4<T>) {
        self.set_column(3, position);
    }

    /// Swaps elements across the diagonal in place.
    pub fn transpose(&mut self) {
        for column in 0..Self::COLS {
            for row in (column + 1)..Self::ROWS {
                self.values
                    .swap(column * Self::ROWS + row, row * Self::ROWS + column);
            }
        }
    }

    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut transposed = *self;
        transposed.transpose();
        transposed
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Zero + One,
{
    #[rustfmt::skip]
    pub fn new_translation(translation: &Vector3<T>) -> Self {
        Self::with_values([
            T::one(), T::zero(), T::zero(), T::zero(),
            T::zero(), T::one(), T::zero(), T::zero(),
            T::zero(), T::zero(), T::one(), T::zero(),
            translation.x, translation.y, translation.z, T::one(),
        ])
    }

    pub fn new_scale_uniform(scale: T) -> Self {
        Self::new_scale(&Vector3::new(scale, scale, scale))
    }

    #[rustfmt::skip]
    pub fn new_scale(scale: &Vector3<T>) -> Self {
        Self::with_values([
            scale.x, T::zero(), T::zero(), T::zero(),
            T::zero(), scale.y, T::zero(), T::zero(),
            T::zero(), T::zero(), scale.z, T::zero(),
            T::zero(), T::zero(), T::zero(), T::one(),
        ])
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    /// Off-center perspective projection.
    ///
    /// # Errors
    ///
    /// Will return [`MathError::InvalidFrustum`] if the volume has zero
    /// width, height or depth.
    #[rustfmt::skip]
    pub fn new_frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Result<Self> {
        if left == right || top == bottom || near == far {
            return Err(MathError::InvalidFrustum);
        }

        let zero = T::zero();
        let two = T::two();
        Ok(Self::with_values([
            (two * near) / (right - left), zero, zero, zero,
            zero, (two * near) / (top - bottom), zero, zero,
            (right + left) / (right - left), (top + bottom) / (top - bottom), -(far + near) / (far - near), -T::one(),
            zero, zero, -(two * far * near) / (far - near), zero,
        ]))
    }

    /// Symmetric perspective projection, `fov_y` in degrees.
    ///
    /// # Errors
    ///
    /// Will return [`MathError::InvalidFrustum`] if the resulting volume is
    /// empty (zero field of view or aspect, or `near == far`).
    pub fn new_perspective(fov_y: T, aspect: T, near: T, far: T) -> Result<Self> {
        let top = near * fov_y.to_radians().half().tan();
        let right = top * aspect;
        Self::new_frustum(-right, right, -top, top, near, far)
    }

    /// Orthographic projection.
    ///
    /// # Errors
    ///
    /// Will return [`MathError::InvalidFrustum`] if the volume has zero
    /// width, height or depth.
    #[rustfmt::skip]
    pub fn new_orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Result<Self> {
        if left == right || top == bottom || near == far {
            return Err(MathError::InvalidFrustum);
        }

        let zero = T::zero();
        let two = T::two();
        Ok(Self::with_values([
            two / (right - left), zero, zero, zero,
            zero, two / (top - bottom), zero, zero,
            zero, zero, -two / (far - near), zero,
            -((right + left) / (right - left)), -((top + bottom) / (top - bottom)), -((far + near) / (far - near)), T::one(),
        ]))
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// # Errors
    ///
    /// Will return [`MathError::DegenerateLookAt`] if `up` is parallel to the
    /// viewing direction, or if `eye` and `target` coincide.
    #[rustfmt::skip]
    pub fn new_look_at(eye: &Vector3<T>, target: &Vector3<T>, up: &Vector3<T>) -> Result<Self> {
        // The camera looks down -Z.
        let forward = (*target - *eye).normalized() * -T::one();
        let right = up.cross(&forward);
        if right.approx_eq(&Vector3::default()) {
            return Err(MathError::DegenerateLookAt);
        }
        let right = right.normalized();
        let up = forward.cross(&right).normalized();

        let zero = T::zero();
        Ok(Self::with_values([
            right.x, up.x, forward.x, zero,
            right.y, up.y, forward.y, zero,
            right.z, up.z, forward.z, zero,
            -right.dot(eye), -up.dot(eye), -forward.dot(eye), T::one(),
        ]))
    }

    /// 3x3 minor built from the given columns and rows.
    fn minor(&self, columns: [usize; 3], rows: [usize; 3]) -> T {
        let m = |column: usize, row: usize| self.values[column * Self::ROWS + row];
        let [c0, c1, c2] = columns;
        let [r0, r1, r2] = rows;

        m(c0, r0) * (m(c1, r1) * m(c2, r2) - m(c1, r2) * m(c2, r1))
            - m(c1, r0) * (m(c0, r1) * m(c2, r2) - m(c0, r2) * m(c2, r1))
            + m(c2, r0) * (m(c0, r1) * m(c1, r2) - m(c0, r2) * m(c1, r1))
    }

    /// Laplace expansion along the first row.
    pub fn determinant(&self) -> T {
        self.values[0] * self.minor([1, 2, 3], [1, 2, 3])
            - self.values[4] * self.minor([0, 2, 3], [1, 2, 3])
            + self.values[8] * self.minor([0, 1, 3], [1, 2, 3])
            - self.values[12] * self.minor([0, 1, 2], [1, 2, 3])
    }

    /// Transposed cofactor matrix.
    #[must_use]
    pub fn adjugate(&self) -> Self {
        let mut adjugate = [T::zero(); 16];
        for column in 0..Self::COLS {
            for row in 0..Self::ROWS {
                let cofactor = self.minor(others(column), others(row));
                let cofactor = if (column + row) % 2 == 0 {
                    cofactor
                } else {
                    -cofactor
                };
                adjugate[row * Self::ROWS + column] = cofactor;
            }
        }
        Self::with_values(adjugate)
    }

    /// # Errors
    ///
    /// Will return [`MathError::SingularMatrix`] if the determinant is 0.
    pub fn try_inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if determinant == T::zero() {
            return Err(MathError::SingularMatrix);
        }
        Ok(self.adjugate() * determinant.recip())
    }

    /// Inverts the matrix in place. A singular matrix is left untouched.
    ///
    /// # Errors
    ///
    /// Will return [`MathError::SingularMatrix`] if the determinant is 0.
    pub fn invert(&mut self) -> Result<()> {
        *self = self.try_inverse()?;
        Ok(())
    }

    /// Inverse, or the identity (with a logged warning) for a singular
    /// matrix.
    #[must_use]
    pub fn inverse_or_identity(&self) -> Self {
        self.try_inverse().or_identity()
    }

    /// In place variant of [`Matrix4::inverse_or_identity`].
    pub fn invert_or_identity(&mut self) {
        *self = self.inverse_or_identity();
    }

    pub fn transform_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        (*self * vector.extend(T::zero())).truncate()
    }

    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        (*self * point.extend(T::one())).truncate()
    }

    /// Transforms `point` with an explicit `w` component and returns the
    /// transformed point along with its new `w`.
    pub fn transform_point_w(&self, point: &Vector3<T>, w: T) -> (Vector3<T>, T) {
        let transformed = *self * point.extend(w);
        (transformed.truncate(), transformed.w)
    }
}

fn others(excluded: usize) -> [usize; 3] {
    match excluded {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

/// Legacy fallback for degenerate matrix computations.
pub trait OrIdentity {
    type Output;

    /// Unwraps the value, or logs the error and substitutes the identity.
    fn or_identity(self) -> Self::Output;
}

impl<T> OrIdentity for Result<Matrix4<T>>
where
    T: Copy + Zero + One,
{
    type Output = Matrix4<T>;

    fn or_identity(self) -> Self::Output {
        self.unwrap_or_else(|error| {
            warn!("{error}, falling back to identity matrix");
            Matrix4::identity()
        })
    }
}

impl<T> PartialEq for Matrix4<T>
where
    T: Float,
{
    fn eq(&self, other: &Self) -> bool {
        let tolerance = T::from_f64(MATRIX_EPSILON);
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }
}

impl<T> Add for Matrix4<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut values = self.values;
        for (value, other) in values.iter_mut().zip(rhs.values) {
            *value = *value + other;
        }
        Self { values }
    }
}

impl<T> Mul<T> for Matrix4<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            values: self.values.map(|value| value * rhs),
        }
    }
}

impl<T> Mul<Vector4<T>> for Matrix4<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Self::Output {
        let row = |row: usize| {
            self.values[row] * rhs.x
                + self.values[Self::ROWS + row] * rhs.y
                + self.values[2 * Self::ROWS + row] * rhs.z
                + self.values[3 * Self::ROWS + row] * rhs.w
        };
        Vector4::new(row(0), row(1), row(2), row(3))
    }
}

impl<T> Mul<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut values = [T::zero(); 16];

        for column in 0..Self::COLS {
            for row in 0..Self::ROWS {
                values[column * Self::ROWS + row] = self.values[row]
                    * rhs.values[column * Self::ROWS]
                    + self.values[Self::ROWS + row] * rhs.values[column * Self::ROWS + 1]
                    + self.values[2 * Self::ROWS + row] * rhs.values[column * Self::ROWS + 2]
                    + self.values[3 * Self::ROWS + row] * rhs.values[column * Self::ROWS + 3];
            }
        }

        Self { values }
    }
}

impl<T> MulAssign<Self> for Matrix4<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> Index<usize> for Matrix4<T> {
    type Output = [T];

    fn index(&self, column: usize) -> &Self::Output {
        &self.values[column * Self::ROWS..(column + 1) * Self::ROWS]
    }
}

impl<T> IndexMut<usize> for Matrix4<T> {
    fn index_mut(&mut self, column: usize) -> &mut Self::Output {
        &mut self.values[column * Self::ROWS..(column + 1) * Self::ROWS]
    }
}

impl<T> From<Matrix4<T>> for [[T; 4]; 4]
where
    T: Copy,
{
    fn from(matrix: Matrix4<T>) -> Self {
        [
            matrix.column(0).into(),
            matrix.column(1).into(),
            matrix.column(2).into(),
            matrix.column(3).into(),
        ]
    }
}

pub trait Identity {
    fn identity() -> Self;
}

#[rustfmt::skip]
impl<T> Identity for Matrix4<T>
    where T: One + Zero {
    fn identity() -> Self {
        Self {
            values: [
                T::one(), T::zero(), T::zero(), T::zero(),
                T::zero(), T::one(), T::zero(), T::zero(),
                T::zero(), T::zero(), T::one(), T::zero(),
                T::zero(), T::zero(), T::zero(), T::one()
            ]
        }
    }
}

impl<T> Default for Matrix4<T>
where
    T: One + Zero,
{
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use crate::vector::Vector3f;

    use super::*;

    #[rustfmt::skip]
    fn invertible() -> Matrix4f {
        Matrix4f::with_values([
            1.0, 0.0, 0.0, 1.0,
            0.0, 2.0, 1.0, 2.0,
            2.0, 1.0, 0.0, 1.0,
            2.0, 0.0, 1.0, 4.0,
        ])
    }

    #[rustfmt::skip]
    fn singular() -> Matrix4f {
        Matrix4f::with_values([
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 39.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        ])
    }

    fn assert_vector_near(actual: Vector3f, expected: Vector3f) {
        assert_float_absolute_eq!(actual.x, expected.x, 0.000_01);
        assert_float_absolute_eq!(actual.y, expected.y, 0.000_01);
        assert_float_absolute_eq!(actual.z, expected.z, 0.000_01);
    }

    #[test]
    fn identity() {
        let m = Matrix4::<i32>::identity();

        for column in 0..4 {
            for row in 0..4 {
                assert_eq!(m[column][row], i32::from(column == row));
            }
        }
    }

    #[test]
    fn index_is_column_then_row() {
        let mut m = Matrix4::<i32>::identity();
        m[3][0] = 5;

        assert_eq!(m.as_array()[12], 5);
        assert_eq!(m.position(), Vector4::new(5, 0, 0, 1));
    }

    #[test]
    fn named_columns() {
        let mut m = Matrix4::<i32>::identity();
        m.set_up(Vector4::new(1, 2, 3, 0));

        assert_eq!(m.right(), Vector4::new(1, 0, 0, 0));
        assert_eq!(m.up(), Vector4::new(1, 2, 3, 0));
        assert_eq!(m.forward(), Vector4::new(0, 0, 1, 0));
        assert_eq!(m.as_array()[4..8], [1, 2, 3, 0]);
    }

    #[rustfmt::skip]
    #[test]
    fn mul() {
        let a = Matrix4::<i32>::with_values([
            1, 2, 3, 4,
            5, 6, 7, 8,
            9, 39, 11, 12,
            13, 14, 15, 16
        ]);
        let b = Matrix4::<i32>::with_values([
            17, 18, 19, 20,
            21, 22, 23, 24,
            25, 26, 27, 28,
            29, 30, 31, 32
        ]);

        let result = a * b;

        assert_eq!(result[0], [538, 1163, 686, 760]);
        assert_eq!(result[1], [650, 1407, 830, 920]);
        assert_eq!(result[2], [762, 1651, 974, 1080]);
        assert_eq!(result[3], [874, 1895, 1118, 1240]);
    }

    #[test]
    fn mul_assign_matches_mul() {
        let mut a = invertible();
        let b = Matrix4f::new_translation(&Vector3f::new(1.0, 2.0, 3.0));

        let expected = a * b;
        a *= b;

        assert_eq!(a, expected);
    }

    #[test]
    fn add_and_scale() {
        let sum = Matrix4f::identity() + Matrix4f::identity();

        assert_eq!(sum, Matrix4f::identity() * 2.0);
    }

    #[test]
    fn transposed() {
        let m = invertible().transposed();

        assert_float_absolute_eq!(m[0][3], 2.0, 0.0);
        assert_float_absolute_eq!(m[3][0], 1.0, 0.0);
        assert_float_absolute_eq!(m[1][2], 1.0, 0.0);
        assert_float_absolute_eq!(m[2][1], 1.0, 0.0);
        assert_eq!(m.transposed(), invertible());
    }

    #[test]
    fn determinant() {
        assert_float_absolute_eq!(Matrix4f::identity().determinant(), 1.0, 0.0);
        assert_float_absolute_eq!(invertible().determinant(), 2.0, 0.0001);
        assert_float_absolute_eq!(singular().determinant(), 0.0, 0.0);
    }

    #[test]
    fn adjugate_of_identity_is_identity() {
        assert_eq!(Matrix4f::identity().adjugate(), Matrix4f::identity());
    }

    #[test]
    fn try_inverse() {
        let inverse = invertible().try_inverse().unwrap();

        assert_float_absolute_eq!(inverse[0][0], -2.0, 0.1);
        assert_float_absolute_eq!(inverse[0][1], -0.5, 0.1);
        assert_float_absolute_eq!(inverse[0][2], 1.0, 0.1);
        assert_float_absolute_eq!(inverse[0][3], 0.5, 0.1);
        assert_float_absolute_eq!(inverse[1][0], 1.0, 0.1);
        assert_float_absolute_eq!(inverse[1][1], 0.5, 0.1);
        assert_float_absolute_eq!(inverse[1][2], 0.0, 0.1);
        assert_float_absolute_eq!(inverse[1][3], -0.5, 0.1);
        assert_float_absolute_eq!(inverse[2][0], -8.0, 0.1);
        assert_float_absolute_eq!(inverse[2][1], -1.0, 0.1);
        assert_float_absolute_eq!(inverse[2][2], 2.0, 0.1);
        assert_float_absolute_eq!(inverse[2][3], 2.0, 0.1);
        assert_float_absolute_eq!(inverse[3][0], 3.0, 0.1);
        assert_float_absolute_eq!(inverse[3][1], 0.5, 0.1);
        assert_float_absolute_eq!(inverse[3][2], -1.0, 0.1);
        assert_float_absolute_eq!(inverse[3][3], -0.5, 0.1);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = invertible();

        assert_eq!(m.try_inverse().unwrap() * m, Matrix4f::identity());
    }

    #[test]
    fn inverse_of_identity() {
        assert_eq!(Matrix4f::identity().try_inverse(), Ok(Matrix4f::identity()));
    }

    #[test]
    fn singular_matrix_is_reported() {
        let mut m = singular();

        assert_eq!(m.try_inverse(), Err(MathError::SingularMatrix));
        assert_eq!(m.invert(), Err(MathError::SingularMatrix));
        assert_eq!(m, singular());
    }

    #[test]
    fn singular_matrix_falls_back_to_identity() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut m = singular();

        assert_eq!(m.inverse_or_identity(), Matrix4f::identity());
        m.invert_or_identity();
        assert_eq!(m, Matrix4f::identity());
    }

    #[test]
    fn invert_in_place() {
        let mut m = invertible();

        m.invert().unwrap();

        assert_eq!(m * invertible(), Matrix4f::identity());
    }

    #[test]
    fn transform_point_and_vector() {
        let m = Matrix4f::new_translation(&Vector3f::new(1.0, 2.0, 3.0))
            * Matrix4f::new_scale_uniform(2.0);
        let v = Vector3f::new(1.0, 1.0, 1.0);

        assert_vector_near(m.transform_point(&v), Vector3f::new(3.0, 4.0, 5.0));
        assert_vector_near(m.transform_vector(&v), Vector3f::new(2.0, 2.0, 2.0));

        let (point, w) = m.transform_point_w(&v, 0.5);
        assert_vector_near(point, Vector3f::new(2.5, 3.0, 3.5));
        assert_float_absolute_eq!(w, 0.5, 0.0);
    }

    #[test]
    fn frustum() {
        let m = Matrix4f::new_frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0).unwrap();

        assert_float_absolute_eq!(m[0][0], 1.0, 0.000_01);
        assert_float_absolute_eq!(m[1][1], 1.0, 0.000_01);
        assert_float_absolute_eq!(m[2][2], -2.0, 0.000_01);
        assert_float_absolute_eq!(m[2][3], -1.0, 0.0);
        assert_float_absolute_eq!(m[3][2], -3.0, 0.000_01);
        assert_float_absolute_eq!(m[3][3], 0.0, 0.0);
    }

    #[test]
    fn degenerate_projections_are_rejected() {
        assert_eq!(
            Matrix4f::new_frustum(1.0, 1.0, -1.0, 1.0, 0.1, 10.0),
            Err(MathError::InvalidFrustum)
        );
        assert_eq!(
            Matrix4f::new_orthographic(-1.0, 1.0, 2.0, 2.0, 0.1, 10.0),
            Err(MathError::InvalidFrustum)
        );
        assert_eq!(
            Matrix4f::new_perspective(60.0, 1.5, 5.0, 5.0),
            Err(MathError::InvalidFrustum)
        );
        assert_eq!(
            Matrix4f::new_orthographic(-1.0, 1.0, -1.0, 1.0, 3.0, 3.0).or_identity(),
            Matrix4f::identity()
        );
    }

    #[test]
    fn perspective_matches_symmetric_frustum() {
        let perspective = Matrix4f::new_perspective(90.0, 2.0, 1.0, 10.0).unwrap();
        let frustum = Matrix4f::new_frustum(-2.0, 2.0, -1.0, 1.0, 1.0, 10.0).unwrap();

        assert_eq!(perspective, frustum);
    }

    #[test]
    fn orthographic_maps_volume_to_unit_cube() {
        let m = Matrix4f::new_orthographic(0.0, 800.0, 600.0, 0.0, -1.0, 1.0).unwrap();

        assert_vector_near(
            m.transform_point(&Vector3f::new(0.0, 600.0, 0.0)),
            Vector3f::new(-1.0, -1.0, 0.0),
        );
        assert_vector_near(
            m.transform_point(&Vector3f::new(800.0, 0.0, 0.0)),
            Vector3f::new(1.0, 1.0, 0.0),
        );
    }

    #[test]
    fn look_at() {
        let eye = Vector3f::new(0.0, 0.0, 5.0);
        let view = Matrix4f::new_look_at(
            &eye,
            &Vector3f::new(0.0, 0.0, 0.0),
            &Vector3f::new(0.0, 1.0, 0.0),
        )
        .unwrap();

        assert_vector_near(view.transform_point(&eye), Vector3f::new(0.0, 0.0, 0.0));
        assert_vector_near(
            view.transform_point(&Vector3f::new(0.0, 0.0, 0.0)),
            Vector3f::new(0.0, 0.0, -5.0),
        );
    }

    #[test]
    fn look_at_parallel_up_is_rejected() {
        let result = Matrix4f::new_look_at(
            &Vector3f::new(0.0, 0.0, 0.0),
            &Vector3f::new(0.0, 3.0, 0.0),
            &Vector3f::new(0.0, 1.0, 0.0),
        );

        assert_eq!(result, Err(MathError::DegenerateLookAt));
    }

    #[test]
    fn nested_array_is_column_major() {
        let columns: [[f32; 4]; 4] =
            Matrix4f::new_translation(&Vector3f::new(7.0, 8.0, 9.0)).into();

        assert_eq!(columns[3], [7.0, 8.0, 9.0, 1.0]);
    }

    #[test]
    fn display_prints_rows() {
        let text = format!("{}", Matrix4::<i32>::new_translation(&Vector3::new(1, 2, 3)));

        assert_eq!(text, "1 0 0 1\n0 1 0 2\n0 0 1 3\n0 0 0 1\n");
    }
}
