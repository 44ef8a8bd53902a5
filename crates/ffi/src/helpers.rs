use crate::error::{with_last_error_mut, VecLibError, VecLibErrorCode};
use std::ffi::CString;
use veclib_core::Vec3;

/// Set the thread-local error message and code.
/// Accepts any type implementing `VecLibError` trait.
pub(crate) fn set_last_error(error: &impl VecLibError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl VecLibError) -> VecLibErrorCode {
    tracing::debug!(code = ?error.code(), "{}", error.msg());
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() -> VecLibErrorCode {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = VecLibErrorCode::Ok;
    });
    VecLibErrorCode::Ok
}

/// Copy three contiguous doubles into a `Vec3`.
///
/// # Safety
/// `ptr` must be non-null and valid for reading three `f64` values.
#[inline]
pub(crate) unsafe fn read_vec3(ptr: *const f64) -> Vec3 {
    // SAFETY: caller guarantees three readable f64s; [f64; 3] has f64 alignment.
    unsafe { Vec3::from(ptr.cast::<[f64; 3]>().read()) }
}

/// Store a `Vec3` into three contiguous doubles.
///
/// # Safety
/// `ptr` must be non-null and valid for writing three `f64` values.
#[inline]
pub(crate) unsafe fn write_vec3(ptr: *mut f64, v: Vec3) {
    // SAFETY: caller guarantees three writable f64s.
    unsafe { ptr.cast::<[f64; 3]>().write(v.to_array()) }
}
