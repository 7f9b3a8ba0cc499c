mod args;
mod spinner;
mod stats;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use demohost_engine::control::AppControlState;
use demohost_engine::coords::ScreenResolution;
use demohost_engine::core::{DemoAppSetup, HostServices};
use demohost_engine::host::DemoAppManager;
use demohost_engine::logging::{LoggingConfig, init_logging};
use demohost_engine::services::EventQueue;
use demohost_engine::time::SystemClock;

use args::Args;
use spinner::SpinnerFactory;
use stats::RollingStats;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default().with_precise_timestamps(true);
    if let Some(filter) = &args.log_filter {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    let clock = SystemClock::new();
    let control = AppControlState::new();
    let stats = RollingStats::new();
    let events = EventQueue::new();
    let factory = SpinnerFactory {
        run_for_us: args.run_for_us(),
    };

    let config = args.host_config();
    let frame_time = Duration::from_micros(config.base_frame_time_us);

    let exit_code = {
        let services = HostServices::new(&clock, &control, &stats, &events).with_overlay(&stats);
        let mut manager = DemoAppManager::new(DemoAppSetup::new(&factory), services, config);
        run(&mut manager, frame_time)?;
        manager.close_app().context("closing demo app")?
    };

    log::info!("demo host exiting with code {exit_code} after {} frames", stats.frames());
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

/// Console host loop: one process/draw/swap cycle per frame at the base rate.
fn run(manager: &mut DemoAppManager<'_>, frame_time: Duration) -> anyhow::Result<()> {
    let resolution = ScreenResolution::zero();
    while manager.process(resolution, true)? {
        manager.dispatch_events()?;
        manager.try_draw()?;
        manager.try_app_swap_buffers()?;
        manager.on_frame_swap_completed();
        std::thread::sleep(frame_time);
    }
    Ok(())
}
