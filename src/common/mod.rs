//! Common utilities and definitions shared across modules
//!
//! Error definitions, configuration and constants used by the converter
//! and the in-memory symbol table.

pub mod config;
pub mod consts;
pub mod error;

pub use config::Config;
pub use consts::*;
pub use error::{Error, Result};

/// Print a debug line when `ICICLE_DEBUG` is set, independent of the log backend
#[inline]
pub(crate) fn debug_log(msg: impl AsRef<str>) {
    if std::env::var(ENV_DEBUG).is_ok() {
        eprintln!("[icicle-debug] {}", msg.as_ref());
    }
}
