pub mod vector;

pub use vector::{
    are_collinear, are_collinear_within, cross, difference, distance, is_parallel_span, length,
};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
