//! Host collaborators consumed by the run-loop manager.
//!
//! The manager only sees these traits; concrete backends (renderer, profiler,
//! file watcher) live with the host.

mod events;
mod stats;

pub use events::{EventQueue, EventService, HostEvent};
pub use stats::{AverageFrameTime, FrameTimingSample, StatsSink};

use crate::coords::ScreenResolution;

/// Receives screen-resolution changes (usually the graphics service).
pub trait ResolutionSink {
    /// `preallocate` hints that basic 2D resources may be created up front.
    fn set_screen_resolution(&self, resolution: ScreenResolution, preallocate: bool);
}

/// Watches content files and reports changes through the event bus.
pub trait ContentMonitor {
    fn enable(&self, enabled: bool);
}

/// Renders the profiler overlay on top of the application's frame.
pub trait ProfilerOverlay {
    fn draw(&self, resolution: ScreenResolution);
}
