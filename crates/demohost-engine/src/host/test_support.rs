//! Recording collaborators shared by the host tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{Result, anyhow};

use crate::control::{AppControl, AppControlState};
use crate::core::{AppDrawResult, DemoApp, DemoAppConfig, DemoAppFactory, DemoAppSetup, HostServices};
use crate::coords::ScreenResolution;
use crate::services::{
    AverageFrameTime, ContentMonitor, EventQueue, FrameTimingSample, HostEvent, ProfilerOverlay,
    ResolutionSink, StatsSink,
};
use crate::time::{DemoTime, ManualClock};

use super::config::HostConfig;
use super::manager::DemoAppManager;

pub(crate) const START_US: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    PostConstruct,
    PreDestruct,
    Resized(ScreenResolution),
    PreUpdate(DemoTime),
    FixedUpdate(DemoTime),
    Update(DemoTime),
    PostUpdate(DemoTime),
    Draw(DemoTime),
    SwapBuffers,
    Event(HostEvent),
}

type CallLog = Rc<RefCell<Vec<Call>>>;

pub(crate) struct RecordingApp<'h> {
    calls: CallLog,
    control: &'h dyn AppControl,
    fail_post_construct: bool,
    fail_pre_destruct: bool,
    fail_update: bool,
    exit_on_destruct: bool,
    draw_ready: bool,
}

impl RecordingApp<'_> {
    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl DemoApp for RecordingApp<'_> {
    fn post_construct(&mut self) -> Result<()> {
        self.record(Call::PostConstruct);
        if self.fail_post_construct {
            return Err(anyhow!("post_construct exploded"));
        }
        Ok(())
    }

    fn pre_destruct(&mut self) -> Result<()> {
        self.record(Call::PreDestruct);
        if self.exit_on_destruct {
            self.control.request_exit();
        }
        if self.fail_pre_destruct {
            return Err(anyhow!("pre_destruct exploded"));
        }
        Ok(())
    }

    fn resized(&mut self, resolution: ScreenResolution) -> Result<()> {
        self.record(Call::Resized(resolution));
        Ok(())
    }

    fn pre_update(&mut self, time: DemoTime) -> Result<()> {
        self.record(Call::PreUpdate(time));
        Ok(())
    }

    fn fixed_update(&mut self, time: DemoTime) -> Result<()> {
        self.record(Call::FixedUpdate(time));
        Ok(())
    }

    fn update(&mut self, time: DemoTime) -> Result<()> {
        self.record(Call::Update(time));
        if self.fail_update {
            return Err(anyhow!("update exploded"));
        }
        Ok(())
    }

    fn post_update(&mut self, time: DemoTime) -> Result<()> {
        self.record(Call::PostUpdate(time));
        Ok(())
    }

    fn try_prepare_draw(&mut self, _time: DemoTime) -> Result<AppDrawResult> {
        Ok(if self.draw_ready {
            AppDrawResult::Completed
        } else {
            AppDrawResult::NotReady
        })
    }

    fn draw(&mut self, time: DemoTime) -> Result<()> {
        self.record(Call::Draw(time));
        Ok(())
    }

    fn try_swap_buffers(&mut self, _time: DemoTime) -> Result<AppDrawResult> {
        self.record(Call::SwapBuffers);
        Ok(AppDrawResult::Completed)
    }

    fn on_event(&mut self, event: &HostEvent) -> Result<()> {
        self.record(Call::Event(event.clone()));
        Ok(())
    }
}

/// Factory whose knobs apply to every app it allocates afterwards.
pub(crate) struct TestFactory {
    calls: CallLog,
    allocations: Cell<u32>,
    pub fail_allocate: Cell<bool>,
    pub fail_post_construct: Cell<bool>,
    pub fail_pre_destruct: Cell<bool>,
    pub fail_update: Cell<bool>,
    pub exit_on_destruct: Cell<bool>,
    pub draw_ready: Cell<bool>,
}

impl TestFactory {
    fn new(calls: CallLog) -> Self {
        Self {
            calls,
            allocations: Cell::new(0),
            fail_allocate: Cell::new(false),
            fail_post_construct: Cell::new(false),
            fail_pre_destruct: Cell::new(false),
            fail_update: Cell::new(false),
            exit_on_destruct: Cell::new(false),
            draw_ready: Cell::new(true),
        }
    }

    pub(crate) fn allocations(&self) -> u32 {
        self.allocations.get()
    }
}

impl<'h> DemoAppFactory<'h> for TestFactory {
    fn allocate(&self, config: &DemoAppConfig<'h>) -> Result<Box<dyn DemoApp + 'h>> {
        if self.fail_allocate.get() {
            return Err(anyhow!("allocation refused"));
        }
        self.allocations.set(self.allocations.get() + 1);
        Ok(Box::new(RecordingApp {
            calls: Rc::clone(&self.calls),
            control: config.services.control,
            fail_post_construct: self.fail_post_construct.get(),
            fail_pre_destruct: self.fail_pre_destruct.get(),
            fail_update: self.fail_update.get(),
            exit_on_destruct: self.exit_on_destruct.get(),
            draw_ready: self.draw_ready.get(),
        }))
    }
}

#[derive(Default)]
pub(crate) struct RecordingStats {
    pub samples: RefCell<Vec<FrameTimingSample>>,
}

impl StatsSink for RecordingStats {
    fn add_frame_times(&self, sample: FrameTimingSample) {
        self.samples.borrow_mut().push(sample);
    }

    fn average_frame_time(&self) -> AverageFrameTime {
        let samples = self.samples.borrow();
        if samples.is_empty() {
            return AverageFrameTime::default();
        }
        let n = samples.len() as f32;
        AverageFrameTime {
            total_us: samples.iter().map(|s| s.total_delta_us as f32).sum::<f32>() / n,
            update_us: samples.iter().map(|s| s.update_delta_us as f32).sum::<f32>() / n,
            draw_us: samples.iter().map(|s| s.draw_delta_us as f32).sum::<f32>() / n,
        }
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub updates: RefCell<Vec<(ScreenResolution, bool)>>,
}

impl ResolutionSink for RecordingSink {
    fn set_screen_resolution(&self, resolution: ScreenResolution, preallocate: bool) {
        self.updates.borrow_mut().push((resolution, preallocate));
    }
}

#[derive(Default)]
pub(crate) struct CountingOverlay {
    pub draws: Cell<u32>,
}

impl ProfilerOverlay for CountingOverlay {
    fn draw(&self, _resolution: ScreenResolution) {
        self.draws.set(self.draws.get() + 1);
    }
}

#[derive(Default)]
pub(crate) struct RecordingMonitor {
    pub enabled: RefCell<Vec<bool>>,
}

impl ContentMonitor for RecordingMonitor {
    fn enable(&self, enabled: bool) {
        self.enabled.borrow_mut().push(enabled);
    }
}

/// Owns every collaborator so managers can borrow them for `'_`.
pub(crate) struct Harness {
    pub clock: ManualClock,
    pub control: AppControlState,
    pub stats: RecordingStats,
    pub events: EventQueue,
    pub sink: RecordingSink,
    pub overlay: CountingOverlay,
    pub monitor: RecordingMonitor,
    pub factory: TestFactory,
    calls: CallLog,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let calls = CallLog::default();
        Self {
            clock: ManualClock::new(START_US),
            control: AppControlState::new(),
            stats: RecordingStats::default(),
            events: EventQueue::new(),
            sink: RecordingSink::default(),
            overlay: CountingOverlay::default(),
            monitor: RecordingMonitor::default(),
            factory: TestFactory::new(Rc::clone(&calls)),
            calls,
        }
    }

    pub(crate) fn services(&self) -> HostServices<'_> {
        HostServices::new(&self.clock, &self.control, &self.stats, &self.events)
            .with_resolution_sink(&self.sink)
            .with_overlay(&self.overlay)
    }

    pub(crate) fn app_config(&self, resolution: impl Into<ScreenResolution>) -> DemoAppConfig<'_> {
        DemoAppConfig {
            screen_resolution: resolution.into(),
            services: self.services(),
        }
    }

    pub(crate) fn manager(&self, config: HostConfig) -> DemoAppManager<'_> {
        DemoAppManager::new(DemoAppSetup::new(&self.factory), self.services(), config)
    }

    /// Manager whose services include the content monitor.
    pub(crate) fn manager_with_monitor(&self, config: HostConfig) -> DemoAppManager<'_> {
        let services = self.services().with_content_monitor(&self.monitor);
        DemoAppManager::new(DemoAppSetup::new(&self.factory), services, config)
    }

    pub(crate) fn manager_restarting_on_resize(&self, config: HostConfig) -> DemoAppManager<'_> {
        let setup = DemoAppSetup::new(&self.factory).with_restart_on_resize(true);
        DemoAppManager::new(setup, self.services(), config)
    }

    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}
