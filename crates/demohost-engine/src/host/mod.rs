//! Run-loop manager.
//!
//! Owns the application lifecycle and the fixed-timestep scheduler. The host
//! drives it once per frame; see [`DemoAppManager`].

mod accumulator;
mod config;
mod firewall;
mod manager;

#[cfg(test)]
mod test_support;

pub use config::{HostConfig, LogStatsMode};
pub use firewall::DemoAppFirewall;
pub use manager::{DemoAppManager, DemoState};
