#![cfg_attr(not(test), no_std)]

/// Square root, sine and cosine. These are deliberately not re-exported at the crate root so that
/// they never get mixed up with the inherent `f32` methods of the same name, call them as
/// `elementary::sqrt(..)` instead.
///
pub mod elementary;

pub mod error;
pub use error::*;

pub mod vector;
pub use vector::*;

pub mod quaternion;
pub use quaternion::*;

#[cfg(test)]
mod tests;

pub const DEG_TO_RAD: f32 = 0.0174533;

pub const RAD_TO_DEG: f32 = 57.29578;
