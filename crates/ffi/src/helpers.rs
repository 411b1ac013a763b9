use crate::error::{with_last_error_mut, VectorialError, VectorialErrorCode};
use std::ffi::CString;

/// Record `error` as this thread's last error.
pub(crate) fn set_last_error(error: &impl VectorialError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Record `error` and hand back its code, for early returns from the
/// `extern "C"` functions.
#[inline]
pub(crate) fn track_error(error: &impl VectorialError) -> VectorialErrorCode {
    set_last_error(error);
    error.code()
}

/// Reset this thread's last error and return `Ok`, so a stale message from
/// an earlier failed call is never reported after a success.
pub(crate) fn clear_last_error() -> VectorialErrorCode {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = VectorialErrorCode::Ok;
    });
    VectorialErrorCode::Ok
}
