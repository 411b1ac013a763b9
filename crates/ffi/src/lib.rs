//! C ABI for the vectorial core library.
//!
//! Vectors cross the boundary by value as `VectorialVector`. Pure operations
//! return a new vector or scalar; in-place operations take a pointer and
//! return a `VectorialErrorCode`, recording details for
//! `vectorial_get_last_error`.

use vectorial_core::{Vector, VectorError};

mod error;
mod helpers;

pub use error::{vectorial_get_last_error, vectorial_get_last_error_code, VectorialErrorCode};

use error::DefaultVectorialError;
use helpers::{clear_last_error, track_error};

/// C-compatible 3D vector
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VectorialVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector> for VectorialVector {
    fn from(v: Vector) -> Self {
        Self {
            x: v.x(),
            y: v.y(),
            z: v.z(),
        }
    }
}

impl From<VectorialVector> for Vector {
    fn from(v: VectorialVector) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

/// Apply `func` to the vector behind `ptr`, writing the result back only on
/// success.
///
/// # Safety
/// `ptr` must be null or point to a valid, writable `VectorialVector` that
/// is not aliased for the duration of the call.
unsafe fn with_vector_mut<F>(
    ptr: *mut VectorialVector,
    param_name: &str,
    func: F,
) -> VectorialErrorCode
where
    F: FnOnce(&mut Vector) -> Result<(), VectorError>,
{
    let Some(slot) = (unsafe { ptr.as_mut() }) else {
        return track_error(&DefaultVectorialError::null_pointer(param_name));
    };

    let mut vector = Vector::from(*slot);
    match func(&mut vector) {
        Ok(()) => {
            *slot = vector.into();
            clear_last_error()
        }
        Err(err) => track_error(&DefaultVectorialError::from(err)),
    }
}

// ============================================================================
// PURE OPERATIONS
// ============================================================================

/// Create a vector from its coordinates
#[no_mangle]
pub extern "C" fn vectorial_vector_new(x: f64, y: f64, z: f64) -> VectorialVector {
    Vector::new(x, y, z).into()
}

/// `-v`
#[no_mangle]
pub extern "C" fn vectorial_vector_negate(v: VectorialVector) -> VectorialVector {
    (-Vector::from(v)).into()
}

/// Componentwise `a + b`
#[no_mangle]
pub extern "C" fn vectorial_vector_add(a: VectorialVector, b: VectorialVector) -> VectorialVector {
    Vector::sum(a.into(), b.into()).into()
}

/// Componentwise `a - b`
#[no_mangle]
pub extern "C" fn vectorial_vector_subtract(
    a: VectorialVector,
    b: VectorialVector,
) -> VectorialVector {
    (Vector::from(a) - Vector::from(b)).into()
}

/// Right-handed cross product `a × b`
#[no_mangle]
pub extern "C" fn vectorial_vector_cross_product(
    a: VectorialVector,
    b: VectorialVector,
) -> VectorialVector {
    Vector::cross_product(a.into(), b.into()).into()
}

/// Scalar multiplication `s * a`
#[no_mangle]
pub extern "C" fn vectorial_vector_number_product(a: VectorialVector, s: f64) -> VectorialVector {
    Vector::number_product(a.into(), s).into()
}

#[no_mangle]
pub extern "C" fn vectorial_vector_dot_product(a: VectorialVector, b: VectorialVector) -> f64 {
    Vector::dot_product(a.into(), b.into())
}

#[no_mangle]
pub extern "C" fn vectorial_vector_magnitude(v: VectorialVector) -> f64 {
    Vector::from(v).magnitude()
}

/// Angle between `a` and `b` in degrees, 0 if either has zero magnitude
#[no_mangle]
pub extern "C" fn vectorial_vector_angle_between(a: VectorialVector, b: VectorialVector) -> f64 {
    Vector::angle_between(a.into(), b.into()).value()
}

// ============================================================================
// IN-PLACE OPERATIONS
// ============================================================================

/// Rotate `*v` about the x axis by `degrees`.
///
/// Returns
/// - `VectorialErrorCode::Ok` on success
/// - `VectorialErrorCode::NullPointer` if `v` is null
///
/// # Safety
/// `v` must be null or point to a valid, writable `VectorialVector`.
#[no_mangle]
pub unsafe extern "C" fn vectorial_vector_rotate_x(
    v: *mut VectorialVector,
    degrees: f64,
) -> VectorialErrorCode {
    // SAFETY: the caller guarantees `v` is null or valid and writable.
    unsafe {
        with_vector_mut(v, "v", |vector| {
            vector.rotate_x(degrees);
            Ok(())
        })
    }
}

/// Rotate `*v` about the y axis by `degrees`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `VectorialVector`.
#[no_mangle]
pub unsafe extern "C" fn vectorial_vector_rotate_y(
    v: *mut VectorialVector,
    degrees: f64,
) -> VectorialErrorCode {
    // SAFETY: the caller guarantees `v` is null or valid and writable.
    unsafe {
        with_vector_mut(v, "v", |vector| {
            vector.rotate_y(degrees);
            Ok(())
        })
    }
}

/// Rotate `*v` about the z axis by `degrees`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `VectorialVector`.
#[no_mangle]
pub unsafe extern "C" fn vectorial_vector_rotate_z(
    v: *mut VectorialVector,
    degrees: f64,
) -> VectorialErrorCode {
    // SAFETY: the caller guarantees `v` is null or valid and writable.
    unsafe {
        with_vector_mut(v, "v", |vector| {
            vector.rotate_z(degrees);
            Ok(())
        })
    }
}

/// Move `*v` by `offset`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `VectorialVector`.
#[no_mangle]
pub unsafe extern "C" fn vectorial_vector_translate_over(
    v: *mut VectorialVector,
    offset: VectorialVector,
) -> VectorialErrorCode {
    // SAFETY: the caller guarantees `v` is null or valid and writable.
    unsafe {
        with_vector_mut(v, "v", |vector| {
            vector.translate_over(offset.into());
            Ok(())
        })
    }
}

/// Scale `*v` to unit length.
///
/// Returns
/// - `VectorialErrorCode::Ok` on success
/// - `VectorialErrorCode::NullPointer` if `v` is null
/// - `VectorialErrorCode::ZeroMagnitude` if `*v` is the zero vector (left unchanged)
///
/// # Safety
/// `v` must be null or point to a valid, writable `VectorialVector`.
#[no_mangle]
pub unsafe extern "C" fn vectorial_vector_normalize(v: *mut VectorialVector) -> VectorialErrorCode {
    // SAFETY: the caller guarantees `v` is null or valid and writable.
    unsafe {
        with_vector_mut(v, "v", Vector::try_normalize)
    }
}

/// Overwrite the x coordinate of `*v`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `VectorialVector`.
#[no_mangle]
pub unsafe extern "C" fn vectorial_vector_set_x(
    v: *mut VectorialVector,
    x: f64,
) -> VectorialErrorCode {
    // SAFETY: the caller guarantees `v` is null or valid and writable.
    unsafe {
        with_vector_mut(v, "v", |vector| {
            vector.set_x(x);
            Ok(())
        })
    }
}

/// Overwrite the y coordinate of `*v`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `VectorialVector`.
#[no_mangle]
pub unsafe extern "C" fn vectorial_vector_set_y(
    v: *mut VectorialVector,
    y: f64,
) -> VectorialErrorCode {
    // SAFETY: the caller guarantees `v` is null or valid and writable.
    unsafe {
        with_vector_mut(v, "v", |vector| {
            vector.set_y(y);
            Ok(())
        })
    }
}

/// Overwrite the z coordinate of `*v`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `VectorialVector`.
#[no_mangle]
pub unsafe extern "C" fn vectorial_vector_set_z(
    v: *mut VectorialVector,
    z: f64,
) -> VectorialErrorCode {
    // SAFETY: the caller guarantees `v` is null or valid and writable.
    unsafe {
        with_vector_mut(v, "v", |vector| {
            vector.set_z(z);
            Ok(())
        })
    }
}
