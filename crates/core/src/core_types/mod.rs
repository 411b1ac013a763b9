//! Core types: the vector value type and the angle units it rotates by

pub mod angle;
pub mod vector;

pub use angle::{Degrees, PiConvention, Radians, TRUNCATED_PI};
pub use vector::Vector;
