use crate::control::AppControl;
use crate::coords::ScreenResolution;
use crate::services::{ContentMonitor, EventService, ProfilerOverlay, ResolutionSink, StatsSink};
use crate::time::Clock;

/// Borrowed handles to the host-owned collaborators.
///
/// The composition root owns every service and must outlive the manager; the
/// manager and the applications only ever borrow them.
#[derive(Clone, Copy)]
pub struct HostServices<'h> {
    pub clock: &'h dyn Clock,
    pub control: &'h dyn AppControl,
    pub stats: &'h dyn StatsSink,
    pub events: &'h dyn EventService,
    pub resolution_sink: Option<&'h dyn ResolutionSink>,
    pub content_monitor: Option<&'h dyn ContentMonitor>,
    pub overlay: Option<&'h dyn ProfilerOverlay>,
}

impl<'h> HostServices<'h> {
    pub fn new(
        clock: &'h dyn Clock,
        control: &'h dyn AppControl,
        stats: &'h dyn StatsSink,
        events: &'h dyn EventService,
    ) -> Self {
        Self {
            clock,
            control,
            stats,
            events,
            resolution_sink: None,
            content_monitor: None,
            overlay: None,
        }
    }

    pub fn with_resolution_sink(mut self, sink: &'h dyn ResolutionSink) -> Self {
        self.resolution_sink = Some(sink);
        self
    }

    pub fn with_content_monitor(mut self, monitor: &'h dyn ContentMonitor) -> Self {
        self.content_monitor = Some(monitor);
        self
    }

    pub fn with_overlay(mut self, overlay: &'h dyn ProfilerOverlay) -> Self {
        self.overlay = Some(overlay);
        self
    }
}

/// Configuration handed to the factory when an application is allocated.
#[derive(Clone, Copy)]
pub struct DemoAppConfig<'h> {
    /// Resolution the application is constructed for.
    pub screen_resolution: ScreenResolution,

    /// Host services the application may use (e.g. to request an exit).
    pub services: HostServices<'h>,
}
