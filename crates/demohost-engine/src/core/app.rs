use anyhow::Result;

use crate::coords::ScreenResolution;
use crate::services::HostEvent;
use crate::time::DemoTime;

/// Outcome of a draw preparation or buffer swap request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppDrawResult {
    /// The request was carried out.
    Completed,
    /// The application is not ready; the caller should retry later without
    /// advancing any state.
    NotReady,
}

/// Lifecycle contract implemented by hosted demo applications.
///
/// Every hook except [`DemoApp::draw`] has a no-op default. Hooks report
/// failures as `anyhow::Error`; the manager decides whether a failure is
/// propagated or fatal.
pub trait DemoApp {
    /// Called once, right after the application has been allocated.
    fn post_construct(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once before the application is released.
    ///
    /// The manager releases the application even when this fails.
    fn pre_destruct(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when the host resolution changed, before any update work.
    fn resized(&mut self, resolution: ScreenResolution) -> Result<()> {
        let _ = resolution;
        Ok(())
    }

    /// Called once per tick before the fixed steps.
    fn pre_update(&mut self, time: DemoTime) -> Result<()> {
        let _ = time;
        Ok(())
    }

    /// Called zero or more times per tick, always with the base frame time as delta.
    fn fixed_update(&mut self, time: DemoTime) -> Result<()> {
        let _ = time;
        Ok(())
    }

    /// Called once per tick after the fixed steps.
    fn update(&mut self, time: DemoTime) -> Result<()> {
        let _ = time;
        Ok(())
    }

    /// Called once per tick after [`DemoApp::update`].
    fn post_update(&mut self, time: DemoTime) -> Result<()> {
        let _ = time;
        Ok(())
    }

    /// Gives the application a chance to refuse drawing this frame.
    fn try_prepare_draw(&mut self, time: DemoTime) -> Result<AppDrawResult> {
        let _ = time;
        Ok(AppDrawResult::Completed)
    }

    /// Called once per presented frame.
    fn draw(&mut self, time: DemoTime) -> Result<()>;

    /// Presents the frame. Applications that own their swap chain override this.
    fn try_swap_buffers(&mut self, time: DemoTime) -> Result<AppDrawResult> {
        let _ = time;
        Ok(AppDrawResult::Completed)
    }

    /// Called for host events forwarded by the manager.
    fn on_event(&mut self, event: &HostEvent) -> Result<()> {
        let _ = event;
        Ok(())
    }
}
