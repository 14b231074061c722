use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, MathError>;

/// Inputs for which a computation cannot produce a meaningful value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The matrix determinant is exactly zero.
    SingularMatrix,
    /// A projection volume with zero width, height or depth.
    InvalidFrustum,
    /// The up vector is parallel to the viewing direction.
    DegenerateLookAt,
    /// The real part of a dual quaternion has (almost) no magnitude.
    DegenerateDualQuaternion,
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::SingularMatrix => write!(f, "matrix determinant is 0"),
            MathError::InvalidFrustum => write!(f, "invalid frustum"),
            MathError::DegenerateLookAt => write!(f, "up vector is parallel to view direction"),
            MathError::DegenerateDualQuaternion => {
                write!(f, "dual quaternion real part has zero magnitude")
            }
        }
    }
}

impl std::error::Error for MathError {}
