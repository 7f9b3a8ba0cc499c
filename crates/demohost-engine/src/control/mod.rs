//! Control signal surface shared by the host and the hosted application.

mod app_control;

pub use app_control::{AppControl, AppControlState};
