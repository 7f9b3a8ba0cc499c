//! Time subsystem.
//!
//! Provides the clock abstraction consumed by the run loop, the time-step value
//! handed to application hooks, and the simulation speed policy.

mod clock;
mod demo_time;
mod step_mode;

pub use clock::{Clock, ManualClock, SystemClock};
pub use demo_time::DemoTime;
pub use step_mode::TimeStepMode;
