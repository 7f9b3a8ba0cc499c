//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the run-loop manager and
//! hosted applications: the lifecycle hooks, the factory that builds the real
//! application, and the configuration handed to it.

mod app;
mod config;
mod factory;

pub use app::{AppDrawResult, DemoApp};
pub use config::{DemoAppConfig, HostServices};
pub use factory::{DemoAppFactory, DemoAppSetup};
