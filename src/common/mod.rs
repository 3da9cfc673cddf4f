//! Shared utilities: errors, configuration and logging.
pub mod config;
pub mod error;
pub mod log;

pub use config::AppCfg;
pub use error::{ArgumentTypeError, ErrorCode, HelloError, HelloResult};
