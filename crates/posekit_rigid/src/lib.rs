#![warn(clippy::pedantic)]

pub mod dual_quaternion;
pub mod transform;
