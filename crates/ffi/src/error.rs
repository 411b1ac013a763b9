use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use vectorial_core::VectorError;

/// An error that can be reported to C as a code plus a message.
pub(crate) trait VectorialError {
    /// Code returned from the failing `extern "C"` function.
    fn code(&self) -> VectorialErrorCode;

    /// Message exposed through `vectorial_get_last_error`.
    fn msg(&self) -> &str;
}

/// The one concrete `VectorialError`: a code and a formatted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVectorialError {
    code: VectorialErrorCode,
    msg: String,
}

impl DefaultVectorialError {
    /// `param_name` was null.
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: VectorialErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<VectorError> for DefaultVectorialError {
    fn from(error: VectorError) -> Self {
        let code = match error {
            VectorError::ZeroMagnitude { .. } => VectorialErrorCode::ZeroMagnitude,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl VectorialError for DefaultVectorialError {
    fn code(&self) -> VectorialErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// Result of an in-place vector function; zero means success.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorialErrorCode {
    Ok = 0,

    /// The vector pointer was null.
    NullPointer = 1,

    /// The vector has zero magnitude and the operation needs a direction.
    /// The vector is left unchanged.
    ZeroMagnitude = 2,
}

thread_local! {
    /// Last error on this thread. Owning the `CString` here keeps the pointer
    /// from `vectorial_get_last_error` valid until the next call.
    static LAST_ERROR: RefCell<(Option<CString>, VectorialErrorCode)> = const { RefCell::new((None, VectorialErrorCode::Ok)) };
}

/// Borrow this thread's `(message, code)` slot.
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, VectorialErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Mutably borrow this thread's `(message, code)` slot.
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, VectorialErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call on this thread succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage).
///
/// # Lifetime
/// The returned pointer is valid until the next in-place vector call on this
/// thread. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// VectorialVector v = vectorial_vector_new(0.0, 0.0, 0.0);
/// if (vectorial_vector_normalize(&v) != Ok) {
///     const char* error = vectorial_get_last_error();
///     if (error) {
///         printf("normalize failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn vectorial_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `VectorialErrorCode::Ok` (0) if the last in-place call on this
/// thread succeeded.
#[no_mangle]
pub extern "C" fn vectorial_get_last_error_code() -> VectorialErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
