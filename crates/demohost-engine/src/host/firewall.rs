use anyhow::Result;

use crate::core::{AppDrawResult, DemoApp, DemoAppConfig, DemoAppFactory};
use crate::coords::ScreenResolution;
use crate::services::HostEvent;
use crate::time::DemoTime;

/// Fallback application.
///
/// Stands in for the real application when it cannot or should not run
/// directly. When the render target is usable it builds the real application
/// itself and forwards every hook to it, but a failure in any hook only
/// disables the guarded application instead of tearing down the host. A
/// content change requests a restart so a fixed application can be retried.
pub struct DemoAppFirewall<'h> {
    config: DemoAppConfig<'h>,
    factory: &'h dyn DemoAppFactory<'h>,
    is_console_app: bool,
    app: Option<Box<dyn DemoApp + 'h>>,
    last_error: Option<String>,
}

impl<'h> DemoAppFirewall<'h> {
    pub fn new(config: DemoAppConfig<'h>, factory: &'h dyn DemoAppFactory<'h>, is_console_app: bool) -> Self {
        Self {
            config,
            factory,
            is_console_app,
            app: None,
            last_error: None,
        }
    }

    /// Whether a guarded application is currently running.
    pub fn has_app(&self) -> bool {
        self.app.is_some()
    }

    /// Description of the most recent failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn can_host_app(&self) -> bool {
        self.config.screen_resolution.is_valid() || self.is_console_app
    }

    fn guard<R>(
        &mut self,
        hook: &'static str,
        call: impl FnOnce(&mut (dyn DemoApp + 'h)) -> Result<R>,
    ) -> Option<R> {
        let app = self.app.as_deref_mut()?;
        match call(app) {
            Ok(value) => Some(value),
            Err(err) => {
                self.disable(hook, err);
                None
            }
        }
    }

    fn disable(&mut self, hook: &'static str, err: anyhow::Error) {
        log::error!("demo app failed in {hook}, running without it: {err:#}");
        self.last_error = Some(format!("{hook}: {err:#}"));

        if let Some(mut app) = self.app.take() {
            if let Err(err) = app.pre_destruct() {
                log::error!("pre_destruct of the failed demo app also failed: {err:#}");
            }
        }
    }
}

impl DemoApp for DemoAppFirewall<'_> {
    fn post_construct(&mut self) -> Result<()> {
        if !self.can_host_app() {
            log::info!(
                "firewall active without app: resolution {} is not usable",
                self.config.screen_resolution
            );
            return Ok(());
        }

        match self.factory.allocate(&self.config) {
            Ok(app) => {
                self.app = Some(app);
                self.guard("post_construct", |app| app.post_construct());
            }
            Err(err) => {
                log::error!("demo app construction failed: {err:#}");
                self.last_error = Some(format!("construct: {err:#}"));
            }
        }
        Ok(())
    }

    fn pre_destruct(&mut self) -> Result<()> {
        if let Some(mut app) = self.app.take() {
            if let Err(err) = app.pre_destruct() {
                log::error!("demo app pre_destruct failed behind firewall: {err:#}");
                self.last_error = Some(format!("pre_destruct: {err:#}"));
            }
        }
        Ok(())
    }

    fn resized(&mut self, resolution: ScreenResolution) -> Result<()> {
        self.config.screen_resolution = resolution;
        self.guard("resized", |app| app.resized(resolution));
        Ok(())
    }

    fn pre_update(&mut self, time: DemoTime) -> Result<()> {
        self.guard("pre_update", |app| app.pre_update(time));
        Ok(())
    }

    fn fixed_update(&mut self, time: DemoTime) -> Result<()> {
        self.guard("fixed_update", |app| app.fixed_update(time));
        Ok(())
    }

    fn update(&mut self, time: DemoTime) -> Result<()> {
        self.guard("update", |app| app.update(time));
        Ok(())
    }

    fn post_update(&mut self, time: DemoTime) -> Result<()> {
        self.guard("post_update", |app| app.post_update(time));
        Ok(())
    }

    fn try_prepare_draw(&mut self, time: DemoTime) -> Result<AppDrawResult> {
        Ok(self
            .guard("try_prepare_draw", |app| app.try_prepare_draw(time))
            .unwrap_or(AppDrawResult::Completed))
    }

    fn draw(&mut self, time: DemoTime) -> Result<()> {
        self.guard("draw", |app| app.draw(time));
        Ok(())
    }

    fn try_swap_buffers(&mut self, time: DemoTime) -> Result<AppDrawResult> {
        Ok(self
            .guard("try_swap_buffers", |app| app.try_swap_buffers(time))
            .unwrap_or(AppDrawResult::Completed))
    }

    fn on_event(&mut self, event: &HostEvent) -> Result<()> {
        if let HostEvent::ContentChanged(path) = event {
            log::info!("content changed ({}), requesting app restart", path.display());
            self.config.services.control.request_app_restart();
        }
        self.guard("on_event", |app| app.on_event(event));
        Ok(())
    }
}
