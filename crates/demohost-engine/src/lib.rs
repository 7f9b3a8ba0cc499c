//! Demo host engine crate.
//!
//! This crate owns the run-loop manager that hosts a single demo application:
//! lifecycle management, the fixed-timestep scheduler and the collaborator
//! traits a platform host implements.

pub mod control;
pub mod coords;
pub mod core;
pub mod host;
pub mod services;
pub mod time;

pub mod logging;
mod error;

pub use error::HostError;
