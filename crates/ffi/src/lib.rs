//! C bindings for the vector library.
//!
//! All functions return a `VecLibErrorCode`; details of the last failure on
//! the calling thread are available through `veclib_get_last_error()`.

mod error;
mod helpers;
mod vector;

pub use error::{veclib_get_last_error, veclib_get_last_error_code, VecLibErrorCode};
pub use vector::{
    veclib_diff3, veclib_dot3, veclib_length3, veclib_prn3, veclib_scale3, veclib_sum3,
    veclib_unit3,
};
