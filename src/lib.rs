//! # vecmat - Vector and Matrix Operations
//!
//! vecmat is a small linear-algebra toolkit exposing eight stateless
//! operations over `f64` vectors and matrices: normalization, angles,
//! orthogonality and parallelism checks, linear combinations, linear
//! system solving, transposition, and multiplication. Every operation
//! is a pure function, also reachable over a JSON HTTP API.
//!
//! ## Example
//!
//! ```
//! use vecmat::{angle_between, unit_vector};
//!
//! // Normalize a vector
//! let unit = unit_vector(&[3.0, 4.0]).unwrap();
//! assert_eq!(unit, vec![0.6, 0.8]);
//!
//! // Angle between perpendicular vectors
//! let angle = angle_between(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
//! assert!((angle - 90.0).abs() < 1e-9);
//! ```

pub mod ops;
pub mod server;

// Re-export the operations as the primary public API
pub use ops::{
    OpError, angle_between, linear_combination, matrix_multiply, matrix_transpose,
    orthogonality, parallelism, solve_system, unit_vector,
};
