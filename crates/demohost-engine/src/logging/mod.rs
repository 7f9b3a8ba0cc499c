//! Logging utilities.
//!
//! Centralizes logger initialization for host binaries. Library code only
//! talks to the `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
