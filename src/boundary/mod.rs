//! Boundary adapter: argument validation and the exported operations.
//!
//! Host frontends live under `api`; this module knows nothing about them.

pub mod domain;
pub mod service;

pub use domain::{Arguments, Value, ValueKind};
pub use service::{add, dispatch, greet, say_hello, Operation, FIXED_GREETING};
