// lib.rs - native hello-world module
pub mod api;
pub mod boundary;
pub mod common;

pub use boundary::{add, dispatch, greet, say_hello, Arguments, Operation, Value, ValueKind};
pub use common::{ArgumentTypeError, ErrorCode, HelloError, HelloResult};
