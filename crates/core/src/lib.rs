//! Vectorial Core Library
//!
//! Small 3D vector arithmetic for graphics and physics prototypes: a `Copy`
//! value type with componentwise operators, dot and cross products, rotations
//! about the coordinate axes, translation and normalization.
//!
//! ## Conventions
//! - All angles are in degrees at the API surface ([`Degrees`])
//! - Degree/radian conversion uses the truncated pi `3.14159` unless a
//!   [`PiConvention::Precise`] is passed explicitly
//! - `a * b` on two vectors is the cross product
//! - A zero vector yields 0° from `angle_between` and is left unchanged by
//!   `normalize`; the `try_*` variants report [`VectorError::ZeroMagnitude`]
//!
//! The crate logs through `tracing` and never installs a subscriber itself.

// Core types and utilities
pub mod core_types;
pub mod error;

// Re-export core types
pub use core_types::{Degrees, PiConvention, Radians, Vector, TRUNCATED_PI};
pub use error::VectorError;
