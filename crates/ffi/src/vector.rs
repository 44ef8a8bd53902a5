//! C ABI over the `veclib_core` vector operations.
//!
//! Every vector argument is a pointer to three contiguous `double`s. Output
//! pointers may equal input pointers: all inputs are copied into `Vec3`
//! values before anything is written.

use std::ffi::CStr;
use std::os::raw::c_char;

use veclib_core::{self as veclib, Vec3};

use crate::error::{DefaultVecLibError, VecLibErrorCode};
use crate::helpers::{clear_last_error, read_vec3, track_error, write_vec3};

/// Report the first null parameter, if any.
fn check_non_null(params: &[(&str, bool)]) -> Result<(), VecLibErrorCode> {
    match params.iter().find(|(_, is_null)| *is_null) {
        Some((name, _)) => Err(track_error(&DefaultVecLibError::null_pointer(name))),
        None => Ok(()),
    }
}

/// Dot product of `a` and `b`, stored in `*out`.
///
/// # Safety
/// `a` and `b` must each point to three readable doubles, `out` to one
/// writable double.
#[no_mangle]
pub unsafe extern "C" fn veclib_dot3(
    a: *const f64,
    b: *const f64,
    out: *mut f64,
) -> VecLibErrorCode {
    if let Err(code) = check_non_null(&[
        ("a", a.is_null()),
        ("b", b.is_null()),
        ("out", out.is_null()),
    ]) {
        return code;
    }

    let (a, b) = unsafe { (read_vec3(a), read_vec3(b)) };
    unsafe { out.write(veclib::dot(a, b)) };
    clear_last_error()
}

/// Scales `input` by `factor` into `output`. `output` may equal `input`.
///
/// # Safety
/// `input` must point to three readable doubles, `output` to three writable doubles.
#[no_mangle]
pub unsafe extern "C" fn veclib_scale3(
    factor: f64,
    input: *const f64,
    output: *mut f64,
) -> VecLibErrorCode {
    if let Err(code) = check_non_null(&[
        ("input", input.is_null()),
        ("output", output.is_null()),
    ]) {
        return code;
    }

    let input = unsafe { read_vec3(input) };
    let mut result = Vec3::ZERO;
    veclib::scale(factor, input, &mut result);
    unsafe { write_vec3(output, result) };
    clear_last_error()
}

/// Euclidean length of `v`, stored in `*out`.
///
/// # Safety
/// `v` must point to three readable doubles, `out` to one writable double.
#[no_mangle]
pub unsafe extern "C" fn veclib_length3(v: *const f64, out: *mut f64) -> VecLibErrorCode {
    if let Err(code) = check_non_null(&[("v", v.is_null()), ("out", out.is_null())]) {
        return code;
    }

    let v = unsafe { read_vec3(v) };
    unsafe { out.write(veclib::length(v)) };
    clear_last_error()
}

/// Stores `from - subtract` in `output`. `output` may equal either input.
///
/// # Safety
/// `subtract` and `from` must point to three readable doubles, `output` to
/// three writable doubles.
#[no_mangle]
pub unsafe extern "C" fn veclib_diff3(
    subtract: *const f64,
    from: *const f64,
    output: *mut f64,
) -> VecLibErrorCode {
    if let Err(code) = check_non_null(&[
        ("subtract", subtract.is_null()),
        ("from", from.is_null()),
        ("output", output.is_null()),
    ]) {
        return code;
    }

    let (subtract, from) = unsafe { (read_vec3(subtract), read_vec3(from)) };
    let mut result = Vec3::ZERO;
    veclib::difference(subtract, from, &mut result);
    unsafe { write_vec3(output, result) };
    clear_last_error()
}

/// Stores `a + b` in `output`. `output` may equal either input.
///
/// # Safety
/// `a` and `b` must point to three readable doubles, `output` to three
/// writable doubles.
#[no_mangle]
pub unsafe extern "C" fn veclib_sum3(
    a: *const f64,
    b: *const f64,
    output: *mut f64,
) -> VecLibErrorCode {
    if let Err(code) = check_non_null(&[
        ("a", a.is_null()),
        ("b", b.is_null()),
        ("output", output.is_null()),
    ]) {
        return code;
    }

    let (a, b) = unsafe { (read_vec3(a), read_vec3(b)) };
    let mut result = Vec3::ZERO;
    veclib::sum(a, b, &mut result);
    unsafe { write_vec3(output, result) };
    clear_last_error()
}

/// Stores the unit vector of `input` in `output`. `output` may equal `input`.
///
/// A zero-length `input` returns `Ok` and `output` keeps its values.
///
/// # Safety
/// `input` must point to three readable doubles, `output` to three readable
/// and writable doubles.
#[no_mangle]
pub unsafe extern "C" fn veclib_unit3(input: *const f64, output: *mut f64) -> VecLibErrorCode {
    if let Err(code) = check_non_null(&[
        ("input", input.is_null()),
        ("output", output.is_null()),
    ]) {
        return code;
    }

    let input = unsafe { read_vec3(input) };
    let mut result = unsafe { read_vec3(output) };
    veclib::unit(input, &mut result);
    unsafe { write_vec3(output, result) };
    clear_last_error()
}

/// Prints `"<label> = (x, y, z)"` and a newline to stdout.
///
/// # Safety
/// `label` must be a valid null-terminated C string, `v` must point to three
/// readable doubles.
#[no_mangle]
pub unsafe extern "C" fn veclib_prn3(label: *const c_char, v: *const f64) -> VecLibErrorCode {
    if let Err(code) = check_non_null(&[("label", label.is_null()), ("v", v.is_null())]) {
        return code;
    }

    let label = match unsafe { CStr::from_ptr(label) }.to_str() {
        Ok(label) => label,
        Err(e) => {
            return track_error(&DefaultVecLibError::invalid_parameter(format!(
                "label is not valid UTF-8: {e}"
            )));
        }
    };
    let v = unsafe { read_vec3(v) };
    veclib::print(label, v);
    clear_last_error()
}
