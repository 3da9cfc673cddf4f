//! C-compatible API for FFI hosts (PHP FFI, Python ctypes, ...).
//!
//! Arguments travel as a JSON array and results come back as a JSON envelope.
//! Every returned pointer is owned by the caller and must be released with
//! [`hello_world_free_str`].

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use serde_json::json;

use crate::boundary::{dispatch, say_hello, Arguments, Value};
use crate::common::config::AppCfg;
use crate::common::error::{HelloError, HelloResult};
use crate::common::log;

/// ABI version to coordinate with the host layer.
pub const API_VERSION: u32 = 1;

#[no_mangle]
pub extern "C" fn hello_world_api_version() -> u32 {
    API_VERSION
}

/// The fixed greeting as a C string (caller must free).
#[no_mangle]
pub extern "C" fn hello_world_say_hello() -> *const c_char {
    string_to_raw(say_hello())
}

/// Call an export by name with a JSON array of arguments.
///
/// Returns `{"ok":true,"value":..}` or `{"ok":false,"code":..,"error":".."}`
/// (caller must free).
#[no_mangle]
pub extern "C" fn hello_world_call(name: *const c_char, args_json: *const c_char) -> *const c_char {
    log::init(&AppCfg::load());

    let outcome = read_str(name, "name").and_then(|name| {
        let args = parse_args(read_str(args_json, "args")?)?;
        dispatch(name, &args)
    });

    string_to_raw(envelope(outcome).to_string())
}

/// Free strings allocated by this library.
#[no_mangle]
pub extern "C" fn hello_world_free_str(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: non-null pointers handed to the host all come from `CString::into_raw`.
    unsafe {
        drop(CString::from_raw(ptr as *mut c_char));
    }
}

fn read_str<'a>(ptr: *const c_char, what: &str) -> HelloResult<&'a str> {
    if ptr.is_null() {
        return Err(HelloError::invalid_payload(format!("{what} is null")));
    }
    // SAFETY: the host guarantees a NUL-terminated string that outlives the call.
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| HelloError::invalid_payload(format!("{what} is not valid UTF-8")))
}

fn parse_args(raw: &str) -> HelloResult<Arguments> {
    let parsed: serde_json::Value =
        serde_json::from_str(raw).map_err(|err| HelloError::invalid_payload(err.to_string()))?;

    match parsed {
        serde_json::Value::Array(items) => Ok(items.iter().map(Value::from).collect()),
        _ => Err(HelloError::invalid_payload("arguments must be a JSON array")),
    }
}

fn envelope(outcome: HelloResult<Value>) -> serde_json::Value {
    match outcome {
        Ok(value) => json!({ "ok": true, "value": value.to_json() }),
        Err(err) => json!({
            "ok": false,
            "code": err.code() as u32,
            "error": err.to_string(),
        }),
    }
}

fn string_to_raw(s: String) -> *const c_char {
    match CString::new(s) {
        Ok(cstring) => cstring.into_raw(),
        Err(_) => fallback_json_raw(),
    }
}

fn fallback_json_raw() -> *const c_char {
    CString::new("{\"ok\":false}".to_string())
        .expect("static fallback json is valid")
        .into_raw()
}
