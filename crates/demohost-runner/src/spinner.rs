use anyhow::Result;

use demohost_engine::control::AppControl;
use demohost_engine::core::{DemoApp, DemoAppConfig, DemoAppFactory};
use demohost_engine::coords::ScreenResolution;
use demohost_engine::time::DemoTime;

/// Console demo: rotates a marker at a fixed angular speed and exits after a
/// fixed amount of simulated time.
pub struct Spinner<'h> {
    control: &'h dyn AppControl,
    resolution: ScreenResolution,
    run_for_us: u64,
    angle: f32,
    fixed_steps: u64,
    last_report_us: u64,
}

const DEGREES_PER_SEC: f32 = 90.0;

impl DemoApp for Spinner<'_> {
    fn post_construct(&mut self) -> Result<()> {
        log::info!("spinner started at {}", self.resolution);
        Ok(())
    }

    fn pre_destruct(&mut self) -> Result<()> {
        log::info!(
            "spinner stopping after {} fixed steps, angle {:.1}",
            self.fixed_steps,
            self.angle
        );
        Ok(())
    }

    fn resized(&mut self, resolution: ScreenResolution) -> Result<()> {
        self.resolution = resolution;
        Ok(())
    }

    fn fixed_update(&mut self, time: DemoTime) -> Result<()> {
        self.angle = (self.angle + DEGREES_PER_SEC * time.delta_secs()) % 360.0;
        self.fixed_steps += 1;
        Ok(())
    }

    fn update(&mut self, time: DemoTime) -> Result<()> {
        if time.total_us >= self.last_report_us + 1_000_000 {
            self.last_report_us = time.total_us;
            log::info!("t={:.2}s angle={:.1}", time.total_secs(), self.angle);
        }
        if time.total_us >= self.run_for_us {
            self.control.request_exit();
        }
        Ok(())
    }

    fn draw(&mut self, _time: DemoTime) -> Result<()> {
        log::trace!("draw angle={:.1}", self.angle);
        Ok(())
    }
}

pub struct SpinnerFactory {
    pub run_for_us: u64,
}

impl<'h> DemoAppFactory<'h> for SpinnerFactory {
    fn allocate(&self, config: &DemoAppConfig<'h>) -> Result<Box<dyn DemoApp + 'h>> {
        Ok(Box::new(Spinner {
            control: config.services.control,
            resolution: config.screen_resolution,
            run_for_us: self.run_for_us,
            angle: 0.0,
            fixed_steps: 0,
            last_report_us: 0,
        }))
    }
}
