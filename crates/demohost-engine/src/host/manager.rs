use crate::core::{AppDrawResult, DemoApp, DemoAppConfig, DemoAppSetup, HostServices};
use crate::coords::ScreenResolution;
use crate::error::HostError;
use crate::services::FrameTimingSample;
use crate::time::{DemoTime, TimeStepMode};

use super::accumulator::StepAccumulator;
use super::config::{HostConfig, LogStatsMode};
use super::firewall::DemoAppFirewall;

/// Run state of the manager.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DemoState {
    #[default]
    Running,
    /// The application has been released; ticks do no work until resumed.
    Suspended,
}

/// Owns the active demo application and drives it.
///
/// Per frame the host calls, in order: [`process`](Self::process),
/// [`try_draw`](Self::try_draw), [`try_app_swap_buffers`](Self::try_app_swap_buffers)
/// and [`on_frame_swap_completed`](Self::on_frame_swap_completed). The
/// application is built lazily by `process` and at most one instance is alive
/// at any time.
pub struct DemoAppManager<'h> {
    setup: DemoAppSetup<'h>,
    app_config: DemoAppConfig<'h>,
    config: HostConfig,

    state: DemoState,
    app: Option<Box<dyn DemoApp + 'h>>,
    has_exit_request: bool,

    timer: StepAccumulator,
    current_time: DemoTime,

    stats_before_update: u64,
    stats_after_update: u64,
    stats_after_draw: u64,
}

impl<'h> DemoAppManager<'h> {
    pub fn new(setup: DemoAppSetup<'h>, services: HostServices<'h>, config: HostConfig) -> Self {
        if config.enable_content_monitor {
            match services.content_monitor {
                Some(monitor) => monitor.enable(true),
                None => log::warn!("content monitoring requested but no content monitor is available"),
            }
        }

        let timer = StepAccumulator::new(&config);
        let mut manager = Self {
            setup,
            app_config: DemoAppConfig {
                screen_resolution: ScreenResolution::zero(),
                services,
            },
            config,
            state: DemoState::Running,
            app: None,
            has_exit_request: false,
            timer,
            current_time: DemoTime::default(),
            stats_before_update: 0,
            stats_after_update: 0,
            stats_after_draw: 0,
        };
        manager.reset_timer();
        manager
    }

    /// Enters or leaves the suspended state.
    ///
    /// Suspending releases the application immediately. Resuming does not
    /// rebuild it; the next [`process`](Self::process) call does.
    pub fn suspend(&mut self, suspend: bool) -> Result<(), HostError> {
        if suspend {
            log::info!("suspending demo app");
            self.state = DemoState::Suspended;
            self.shutdown_app_now()
        } else {
            log::info!("resuming demo app");
            self.state = DemoState::Running;
            Ok(())
        }
    }

    pub fn state(&self) -> DemoState {
        self.state
    }

    /// Runs one tick: lifecycle management, then the fixed-timestep update.
    ///
    /// Returns `Ok(false)` when the loop should stop because an exit was
    /// requested, before or during this tick.
    pub fn process(&mut self, resolution: ScreenResolution, is_console_app: bool) -> Result<bool, HostError> {
        self.sync_exit_request();
        if self.has_exit_request {
            return Ok(false);
        }

        if self.state == DemoState::Suspended {
            return Ok(true);
        }

        if !self.manage_app_state(resolution, is_console_app)? {
            return Ok(false);
        }

        let services = self.app_config.services;
        let Some(app) = self.app.as_deref_mut() else {
            return Ok(false);
        };

        if resolution != self.app_config.screen_resolution {
            log::debug!("resolution changed {} -> {}", self.app_config.screen_resolution, resolution);
            self.app_config.screen_resolution = resolution;
            if let Some(sink) = services.resolution_sink {
                sink.set_screen_resolution(resolution, false);
            }
            app.resized(resolution).map_err(HostError::hook("resized"))?;
        }

        if services.control.has_update_timer_reset_request() {
            services.control.clear_update_timer_reset_request();
            self.timer.reset(services.clock.now_us());
        }

        let mode = services.control.time_step_mode();
        self.timer.apply_mode(mode);

        let now = services.clock.now_us();
        self.stats_before_update = now;

        let time = self.timer.advance(now, mode);
        if mode == TimeStepMode::Step {
            services.control.set_time_step_mode(TimeStepMode::Paused);
        }
        self.current_time = time;

        app.pre_update(time).map_err(HostError::hook("pre_update"))?;
        while let Some(step) = self.timer.next_fixed_step() {
            app.fixed_update(step).map_err(HostError::hook("fixed_update"))?;
        }
        app.update(time).map_err(HostError::hook("update"))?;
        app.post_update(time).map_err(HostError::hook("post_update"))?;

        self.stats_after_update = services.clock.now_us();

        self.sync_exit_request();
        Ok(!self.has_exit_request)
    }

    /// Prepares and draws the current frame.
    ///
    /// A result other than [`AppDrawResult::Completed`] from the application's
    /// draw preparation is returned unchanged and nothing is drawn.
    pub fn try_draw(&mut self) -> Result<AppDrawResult, HostError> {
        let time = self.current_time;
        let Some(app) = self.app.as_deref_mut() else {
            return Ok(AppDrawResult::Completed);
        };

        let result = app
            .try_prepare_draw(time)
            .map_err(HostError::hook("try_prepare_draw"))?;
        if result != AppDrawResult::Completed {
            return Ok(result);
        }

        app.draw(time).map_err(HostError::hook("draw"))?;

        let services = self.app_config.services;
        self.stats_after_draw = services.clock.now_us();

        if self.config.enable_stats && self.config.render_overlay && self.state == DemoState::Running {
            if let Some(overlay) = services.overlay {
                overlay.draw(self.app_config.screen_resolution);
            }
        }

        self.sync_exit_request();
        Ok(result)
    }

    pub fn try_app_swap_buffers(&mut self) -> Result<AppDrawResult, HostError> {
        let time = self.current_time;
        match self.app.as_deref_mut() {
            Some(app) => app
                .try_swap_buffers(time)
                .map_err(HostError::hook("try_swap_buffers")),
            None => Ok(AppDrawResult::Completed),
        }
    }

    /// Forwards the timing of the completed frame to the stats sink.
    pub fn on_frame_swap_completed(&self) {
        if self.state != DemoState::Running {
            return;
        }

        let sample = FrameTimingSample {
            update_delta_us: self.stats_after_update.saturating_sub(self.stats_before_update),
            draw_delta_us: self.stats_after_draw.saturating_sub(self.stats_after_update),
            total_delta_us: self.timer.last_frame_delta(),
        };

        let stats = self.app_config.services.stats;
        stats.add_frame_times(sample);

        match self.config.log_stats_mode {
            LogStatsMode::Off => {}
            LogStatsMode::Latest => {
                let fps = if sample.total_delta_us > 0 {
                    1_000_000.0 / sample.total_delta_us as f32
                } else {
                    0.0
                };
                log::info!(
                    "All: {} FPS: {:.1} Updates: {} Draw: {}",
                    sample.total_delta_us,
                    fps,
                    sample.update_delta_us,
                    sample.draw_delta_us
                );
            }
            LogStatsMode::Average => {
                let average = stats.average_frame_time();
                log::info!(
                    "Average All: {:.0} FPS: {:.1} Updates: {:.0} Draw: {:.0}",
                    average.total_us,
                    average.fps(),
                    average.update_us,
                    average.draw_us
                );
            }
        }
    }

    /// The host window regained focus; the next tick starts from a one-frame delta.
    pub fn on_activate(&mut self) {
        self.app_config.services.control.request_update_timer_reset();
    }

    pub fn on_deactivate(&mut self) {
        log::debug!("demo host deactivated");
    }

    /// Delivers pending host events to the active application.
    ///
    /// Returns the number of events delivered.
    pub fn dispatch_events(&mut self) -> Result<usize, HostError> {
        let events = self.app_config.services.events.drain();
        let Some(app) = self.app.as_deref_mut() else {
            return Ok(0);
        };
        for event in &events {
            app.on_event(event).map_err(HostError::hook("on_event"))?;
        }
        Ok(events.len())
    }

    /// Selects the timestep mode from its raw encoding, as received from a
    /// debug console or remote control channel.
    ///
    /// Unknown values are logged and leave the current mode untouched.
    pub fn set_time_step_mode_raw(&mut self, raw: u8) {
        match TimeStepMode::try_from(raw) {
            Ok(mode) => self.app_config.services.control.set_time_step_mode(mode),
            Err(err) => log::warn!("{err}; keeping {:?}", self.app_config.services.control.time_step_mode()),
        }
    }

    pub fn request_exit(&mut self) {
        self.has_exit_request = true;
    }

    /// Once this returns `true` it never returns `false` again.
    pub fn has_exit_request(&self) -> bool {
        self.has_exit_request
    }

    pub fn has_restart_request(&self) -> bool {
        self.app_config.services.control.has_app_restart_request()
    }

    /// Marks the control surface as exiting, releases the application and
    /// returns the exit code.
    pub fn close_app(&mut self) -> Result<i32, HostError> {
        let control = self.app_config.services.control;
        if !control.has_exit_request() {
            control.request_exit();
        }
        self.sync_exit_request();

        self.shutdown_app_now()?;
        Ok(control.exit_code())
    }

    /// Back-dates the update timer by one expected frame and empties the accumulator.
    pub fn reset_timer(&mut self) {
        let now = self.app_config.services.clock.now_us();
        self.timer.reset(now);
    }

    pub fn has_app(&self) -> bool {
        self.app.is_some()
    }

    pub fn screen_resolution(&self) -> ScreenResolution {
        self.app_config.screen_resolution
    }

    /// Time step handed to the last update and to draw calls.
    pub fn current_time(&self) -> DemoTime {
        self.current_time
    }

    pub fn accumulated_time_us(&self) -> u64 {
        self.timer.accumulated_time()
    }

    pub fn expected_frame_time_us(&self) -> u64 {
        self.timer.expected_frame_time()
    }

    /// Wall-clock delta used by the last tick, after mode overrides and clamping.
    pub fn last_frame_delta_us(&self) -> u64 {
        self.timer.last_frame_delta()
    }

    pub fn total_simulated_time_us(&self) -> u64 {
        self.timer.total_time()
    }

    pub fn total_fixed_simulated_time_us(&self) -> u64 {
        self.timer.total_fixed_time()
    }

    fn sync_exit_request(&mut self) {
        if !self.has_exit_request && self.app_config.services.control.has_exit_request() {
            self.has_exit_request = true;
        }
    }

    /// Handles restart requests, restart-on-resize and lazy construction.
    ///
    /// Returns `false` when no application exists and an exit is pending; the
    /// outgoing application may request the exit from its own teardown.
    fn manage_app_state(&mut self, resolution: ScreenResolution, is_console_app: bool) -> Result<bool, HostError> {
        let control = self.app_config.services.control;

        let mut apply_firewall = self.config.enable_firewall;
        let restart_request = control.has_app_restart_request();
        if restart_request {
            control.clear_app_restart_request();
            apply_firewall = true;
        }

        let resolution_changed = resolution != self.app_config.screen_resolution;
        if self.app.is_some() && (restart_request || (self.setup.restart_on_resize && resolution_changed)) {
            log::info!("restarting demo app (restart request: {restart_request})");
            self.shutdown_app_now()?;
        }

        if self.app.is_none() && control.has_exit_request() {
            self.sync_exit_request();
            return Ok(false);
        }

        if self.app.is_none() {
            self.construct_app(resolution, is_console_app, apply_firewall)?;
        }
        Ok(true)
    }

    fn construct_app(
        &mut self,
        resolution: ScreenResolution,
        is_console_app: bool,
        apply_firewall: bool,
    ) -> Result<(), HostError> {
        let services = self.app_config.services;
        if let Some(sink) = services.resolution_sink {
            sink.set_screen_resolution(resolution, self.config.preallocate_basic_2d);
        }
        self.app_config.screen_resolution = resolution;

        let use_real_app = !apply_firewall && (resolution.is_valid() || is_console_app);
        let mut app: Box<dyn DemoApp + 'h> = if use_real_app {
            log::info!("constructing demo app at {resolution}");
            self.setup
                .factory
                .allocate(&self.app_config)
                .map_err(HostError::Construct)?
        } else {
            log::info!("constructing fallback demo app at {resolution}");
            Box::new(DemoAppFirewall::new(self.app_config, self.setup.factory, is_console_app))
        };

        if let Err(err) = app.post_construct() {
            log::error!("demo app post_construct failed: {err:#}");
            if let Err(destruct_err) = app.pre_destruct() {
                log::error!("pre_destruct after failed construction also failed: {destruct_err:#}");
            }
            return Err(HostError::Construct(err));
        }

        self.app = Some(app);
        services.events.set_app_attached(true);
        Ok(())
    }

    /// Releases the application, even when its pre-destruct hook fails.
    fn shutdown_app_now(&mut self) -> Result<(), HostError> {
        let Some(mut app) = self.app.take() else {
            return Ok(());
        };

        let result = app.pre_destruct();
        drop(app);
        self.app_config.services.events.set_app_attached(false);

        result.map_err(|err| {
            log::error!("demo app pre_destruct failed: {err:#}");
            HostError::PreDestruct(err)
        })
    }
}

impl Drop for DemoAppManager<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.shutdown_app_now() {
            log::error!("demo app shutdown failed while dropping the manager, aborting: {err}");
            std::process::abort();
        }
    }
}
