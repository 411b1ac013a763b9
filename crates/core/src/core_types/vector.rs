//! Three-dimensional Euclidean vector value type.
//!
//! `Vector` is a plain `Copy` value of three `f64` coordinates. The magnitude
//! is always derived from the current coordinates, so no mutation (setters
//! included) can leave it stale.
//!
//! # Operators
//! - `a + b`, `a - b`, `-a`: componentwise
//! - `a * b`: **cross product**, same as [`Vector::cross_product`]
//!
//! # Degenerate input
//! A zero vector is handled the same way everywhere: [`Vector::angle_between`]
//! reports 0° and [`Vector::normalize`] leaves the vector unchanged. The
//! `try_*` variants return [`VectorError::ZeroMagnitude`] instead.
//!
//! # Usage
//! ```
//! use vectorial_core::Vector;
//!
//! let a = Vector::new(1.0, 0.0, 0.0);
//! let b = Vector::new(0.0, 1.0, 0.0);
//! assert_eq!(a * b, Vector::new(0.0, 0.0, 1.0));
//! assert!((Vector::angle_between(a, b).value() - 90.0).abs() < 1e-3);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::angle::{Degrees, PiConvention, Radians};
use crate::error::VectorError;

/// 3D vector with `f64` coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector {
    /// Create a vector from its three coordinates
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// The zero vector
    #[inline]
    #[must_use]
    pub const fn zeros() -> Self {
        Vector::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    /// Euclidean norm of the current coordinates
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    // ------------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------------

    /// Componentwise sum
    #[must_use]
    pub fn sum(a: Vector, b: Vector) -> Vector {
        Vector::new(a.x + b.x, a.y + b.y, a.z + b.z)
    }

    /// Scalar multiplication, `s * a`
    #[must_use]
    pub fn number_product(a: Vector, s: f64) -> Vector {
        Vector::new(s * a.x, s * a.y, s * a.z)
    }

    #[must_use]
    pub fn dot_product(a: Vector, b: Vector) -> f64 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    /// Right-handed cross product `a × b`
    #[must_use]
    pub fn cross_product(a: Vector, b: Vector) -> Vector {
        Vector::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    // ------------------------------------------------------------------------
    // Angles
    // ------------------------------------------------------------------------

    /// Angle between two vectors, in degrees.
    ///
    /// Returns 0° when either vector has zero magnitude. The cosine is
    /// clamped to [-1, 1] so rounding on (anti)parallel inputs cannot
    /// produce NaN.
    #[must_use]
    pub fn angle_between(a: Vector, b: Vector) -> Degrees {
        Vector::angle_between_with(a, b, PiConvention::default())
    }

    /// [`Vector::angle_between`] with an explicit pi convention for the
    /// radian to degree conversion
    #[must_use]
    pub fn angle_between_with(a: Vector, b: Vector, convention: PiConvention) -> Degrees {
        match Vector::checked_angle(a, b, convention) {
            Ok(angle) => angle,
            Err(err) => {
                debug!("{err}; reporting 0°");
                Degrees::ZERO
            }
        }
    }

    /// Angle between two vectors, failing on zero-magnitude input.
    ///
    /// # Errors
    /// [`VectorError::ZeroMagnitude`] if either vector is the zero vector,
    /// or so short (components below about 1e-162) that its squared length
    /// underflows to zero.
    pub fn try_angle_between(a: Vector, b: Vector) -> Result<Degrees, VectorError> {
        Vector::checked_angle(a, b, PiConvention::default())
    }

    fn checked_angle(
        a: Vector,
        b: Vector,
        convention: PiConvention,
    ) -> Result<Degrees, VectorError> {
        let sa = Vector::dot_product(a, a);
        let sb = Vector::dot_product(b, b);
        if sa == 0.0 || sb == 0.0 {
            return Err(VectorError::ZeroMagnitude {
                operation: "angle_between",
            });
        }

        // sqrt(s * s) rounds back to exactly s, so angle_between(v, v) is 0
        let mut denominator = (sa * sb).sqrt();
        if denominator == 0.0 || denominator.is_infinite() {
            // sa * sb left the f64 range
            denominator = sa.sqrt() * sb.sqrt();
        }

        let cos = (Vector::dot_product(a, b) / denominator).clamp(-1.0, 1.0);
        Ok(Radians::new(cos.acos()).to_degrees_with(convention))
    }

    // ------------------------------------------------------------------------
    // Rotations (angles in degrees, right-handed)
    // ------------------------------------------------------------------------

    /// Rotate about the x axis by `angle` degrees
    pub fn rotate_x(&mut self, angle: impl Into<Degrees>) {
        self.rotate_x_with(angle, PiConvention::default());
    }

    /// Rotate about the y axis by `angle` degrees
    pub fn rotate_y(&mut self, angle: impl Into<Degrees>) {
        self.rotate_y_with(angle, PiConvention::default());
    }

    /// Rotate about the z axis by `angle` degrees
    pub fn rotate_z(&mut self, angle: impl Into<Degrees>) {
        self.rotate_z_with(angle, PiConvention::default());
    }

    pub fn rotate_x_with(&mut self, angle: impl Into<Degrees>, convention: PiConvention) {
        let angle = angle.into();
        trace!(axis = "x", degrees = angle.value(), "rotate");
        (self.y, self.z) = rotate_pair(self.y, self.z, angle.to_radians_with(convention));
    }

    pub fn rotate_y_with(&mut self, angle: impl Into<Degrees>, convention: PiConvention) {
        let angle = angle.into();
        trace!(axis = "y", degrees = angle.value(), "rotate");
        // z leads x here: x' = x cos + z sin, z' = z cos - x sin
        (self.z, self.x) = rotate_pair(self.z, self.x, angle.to_radians_with(convention));
    }

    pub fn rotate_z_with(&mut self, angle: impl Into<Degrees>, convention: PiConvention) {
        let angle = angle.into();
        trace!(axis = "z", degrees = angle.value(), "rotate");
        (self.x, self.y) = rotate_pair(self.x, self.y, angle.to_radians_with(convention));
    }

    // ------------------------------------------------------------------------
    // Translation and normalization
    // ------------------------------------------------------------------------

    /// Move this vector by `offset`
    pub fn translate_over(&mut self, offset: Vector) {
        *self = Vector::sum(*self, offset);
    }

    /// Scale to unit length. A zero vector is left unchanged.
    ///
    /// The length is `sqrt(x² + y² + z²)`, so a vector whose components are
    /// all below about 1e-162 has a squared length that underflows to zero
    /// and is treated as the zero vector too.
    pub fn normalize(&mut self) {
        if let Err(err) = self.try_normalize() {
            debug!("{err}; leaving vector unchanged");
        }
    }

    /// Scale to unit length.
    ///
    /// # Errors
    /// [`VectorError::ZeroMagnitude`] for the zero vector, which is left
    /// unchanged. This includes tiny vectors such as `(1e-200, 0, 0)` whose
    /// squared length underflows to zero.
    pub fn try_normalize(&mut self) -> Result<(), VectorError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::ZeroMagnitude {
                operation: "normalize",
            });
        }

        self.x /= magnitude;
        self.y /= magnitude;
        self.z /= magnitude;
        Ok(())
    }

    /// Unit vector with the same direction. The zero vector maps to itself.
    #[must_use]
    pub fn normalized(mut self) -> Vector {
        self.normalize();
        self
    }
}

/// Rotate the pair `(a, b)` in its own plane: `a' = a cos - b sin`,
/// `b' = a sin + b cos`.
#[inline]
fn rotate_pair(a: f64, b: f64, angle: Radians) -> (f64, f64) {
    let (sin, cos) = (angle.sin(), angle.cos());
    (a * cos - b * sin, a * sin + b * cos)
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::sum(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::sum(self, -rhs)
    }
}

/// `a * b` is the cross product, not componentwise multiplication.
impl Mul for Vector {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        Vector::cross_product(self, rhs)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.translate_over(rhs);
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.translate_over(-rhs);
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector::new(x, y, z)
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> [f64; 3] {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<f64>> for Vector {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for nalgebra::Vector3<f64> {
    fn from(v: Vector) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
