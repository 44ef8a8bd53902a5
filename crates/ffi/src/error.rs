use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait VecLibError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> VecLibErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `VecLibError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVecLibError {
    code: VecLibErrorCode,
    msg: String,
}

impl DefaultVecLibError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"input"`, `"output"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: VecLibErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for invalid parameter.
    ///
    /// # Arguments
    /// * `message` - Description of the error
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: VecLibErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl VecLibError for DefaultVecLibError {
    fn code(&self) -> VecLibErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecLibErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter passed to function (e.g. a label that is not UTF-8).
    InvalidParameter = 2,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    static LAST_ERROR: RefCell<(Option<CString>, VecLibErrorCode)> =
        const { RefCell::new((None, VecLibErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, VecLibErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, VecLibErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made.
///
/// # Lifetime
/// The returned pointer is valid until the next `veclib_*` call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// double v[3] = {1, 2, 3};
/// if (veclib_unit3(v, NULL) != Ok) {
///     printf("unit failed: %s\n", veclib_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn veclib_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code for this thread.
///
/// Returns `VecLibErrorCode::Ok` (0) if the last call succeeded.
#[no_mangle]
pub extern "C" fn veclib_get_last_error_code() -> VecLibErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
