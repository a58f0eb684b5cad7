//! Logging utilities.
//!
//! This module centralizes logger initialization behind the standard `log`
//! facade. Everything else in the workspace logs through the macros and
//! stays backend-agnostic.

mod init;

pub use init::{init_logging, LoggingConfig};
