//! Host frontends over the boundary adapter.
//!
//! `ffi` is always built; `node` needs the `node` feature and a Node.js host to link against.

pub mod ffi;
#[cfg(feature = "node")]
pub mod node;
