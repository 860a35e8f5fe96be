//! C entry points called by compiled Naviary programs.
//!
//! Output is fire-and-forget: a failed write is logged and dropped, never
//! reported to the caller.

use std::ffi::CStr;

use libc::{c_char, c_double, c_int};

use crate::message::Value;
use crate::shim::Shim;

fn emit(value: Value<'_>) {
    if let Err(err) = Shim::stdio().emit(value) {
        tracing::trace!(
            error = %err,
            kind = ?err.io_error().kind(),
            "dropped runtime output"
        );
    }
}

/// Print an integer
#[no_mangle]
pub extern "C" fn print(value: c_int) {
    emit(Value::Int(value.into()));
}

/// Print a boolean (non-zero is `true`)
#[export_name = "printBool"]
pub extern "C" fn print_bool(value: c_int) {
    emit(Value::Bool(value != 0));
}

/// Print a NUL-terminated string
#[export_name = "printString"]
pub extern "C" fn print_string(value: *const c_char) {
    if value.is_null() {
        tracing::debug!("printString called with a null pointer");
        return;
    }
    // The caller guarantees a valid NUL-terminated buffer.
    let text = unsafe { CStr::from_ptr(value) };
    emit(Value::Text(text.to_bytes()));
}

/// Print a float
#[export_name = "printFloat"]
pub extern "C" fn print_float(value: c_double) {
    emit(Value::Float(value));
}
