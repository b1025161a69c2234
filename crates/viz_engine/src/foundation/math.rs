//! Math type aliases
//!
//! Thin aliases over nalgebra for the types the content model needs.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;
