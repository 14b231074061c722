pub use posekit_math as math;
pub use posekit_rigid as rigid;

pub use posekit_math::{MathError, Result};
