//! Angle unit types for rotations and angle measurements
//!
//! `Degrees` and `Radians` are transparent `f64` newtypes so a rotation angle
//! can never be passed in the wrong unit by accident.
//!
//! # Pi convention
//! Conversions between the two units default to [`TRUNCATED_PI`] (3.14159),
//! which is the constant historical vectorial callers were built against.
//! Rotations therefore drift slightly from a full-precision rotation; use
//! [`PiConvention::Precise`] where that matters.
//!
//! # Usage
//! ```
//! use vectorial_core::core_types::angle::{Degrees, PiConvention};
//!
//! let right = Degrees::new(90.0);
//! let rad = right.to_radians_with(PiConvention::Precise);
//! assert!((*rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut, Neg};

/// Five significant digit approximation of pi used by default for
/// degree/radian conversion.
pub const TRUNCATED_PI: f64 = 3.14159;

/// Which value of pi to use when converting between degrees and radians
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PiConvention {
    /// `TRUNCATED_PI` (3.14159), bit-compatible with legacy results
    #[default]
    Truncated,
    /// `std::f64::consts::PI`
    Precise,
}

impl PiConvention {
    /// The pi constant for this convention
    #[inline]
    #[must_use]
    pub const fn pi(self) -> f64 {
        match self {
            PiConvention::Truncated => TRUNCATED_PI,
            PiConvention::Precise => std::f64::consts::PI,
        }
    }
}

// ============================================================================
// DEGREES
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Degrees {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Degrees {
    /// Zero angle
    pub const ZERO: Degrees = Degrees(0.0);

    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians using the default (truncated) pi
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        self.to_radians_with(PiConvention::default())
    }

    /// Convert to radians using the given pi convention
    #[inline]
    #[must_use]
    pub fn to_radians_with(self, convention: PiConvention) -> Radians {
        Radians(self.0 * (convention.pi() / 180.0))
    }
}

impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for f64 {
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Radians {
        d.to_radians()
    }
}

impl PartialEq<f64> for Degrees {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

// ============================================================================
// RADIANS
// ============================================================================

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Radians(f64);

impl Eq for Radians {}

impl PartialOrd for Radians {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Radians {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Radians {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Radians {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Radians {
    /// Create a new angle in radians
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to degrees using the default (truncated) pi
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        self.to_degrees_with(PiConvention::default())
    }

    /// Convert to degrees using the given pi convention
    #[inline]
    #[must_use]
    pub fn to_degrees_with(self, convention: PiConvention) -> Degrees {
        Degrees(self.0 * 180.0 / convention.pi())
    }

    /// Compute sine
    #[inline]
    #[must_use]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Compute cosine
    #[inline]
    #[must_use]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

impl From<f64> for Radians {
    fn from(v: f64) -> Self {
        Radians(v)
    }
}

impl From<Radians> for f64 {
    fn from(r: Radians) -> f64 {
        r.0
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Degrees {
        r.to_degrees()
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_convention_is_truncated() {
        assert_eq!(PiConvention::default(), PiConvention::Truncated);
        assert_eq!(PiConvention::default().pi(), 3.14159);
    }

    #[test]
    fn test_degrees_to_radians_truncated() {
        let rad = Degrees::new(180.0).to_radians();
        assert!((*rad - TRUNCATED_PI).abs() < 1e-14);
    }

    #[test]
    fn test_degrees_to_radians_precise() {
        let rad = Degrees::new(180.0).to_radians_with(PiConvention::Precise);
        assert!((*rad - std::f64::consts::PI).abs() < 1e-14);
    }

    #[test]
    fn test_radians_to_degrees_inverts_same_convention() {
        for convention in [PiConvention::Truncated, PiConvention::Precise] {
            let d = Degrees::new(37.5);
            let back = d.to_radians_with(convention).to_degrees_with(convention);
            assert!((*back - 37.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_truncated_pi_drifts_from_precise() {
        let truncated = Degrees::new(90.0).to_radians();
        let precise = Degrees::new(90.0).to_radians_with(PiConvention::Precise);
        assert!(*truncated < *precise);
        assert!((*precise - *truncated) < 2e-6);
    }

    #[test]
    fn test_angle_ordering_and_display() {
        assert!(Degrees::new(10.0) < Degrees::new(20.0));
        assert_eq!(Degrees::new(10.0).max(Degrees::new(20.0)), Degrees::new(20.0));
        assert_eq!(format!("{}", Degrees::new(90.0)), "90.0°");
        assert_eq!(format!("{}", Radians::new(1.5)), "1.5000 rad");
        assert_eq!(-Degrees::new(45.0), Degrees::new(-45.0));
    }
}
