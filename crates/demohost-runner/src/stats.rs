use std::cell::Cell;

use demohost_engine::coords::ScreenResolution;
use demohost_engine::services::{AverageFrameTime, FrameTimingSample, ProfilerOverlay, StatsSink};

/// Exponential moving average over recent frames, weighted 1/16 per new sample.
#[derive(Debug, Default)]
pub struct RollingStats {
    average: Cell<AverageFrameTime>,
    frames: Cell<u64>,
}

impl RollingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

fn blend(average: f32, sample: u64) -> f32 {
    (average * 15.0 + sample as f32) / 16.0
}

impl StatsSink for RollingStats {
    fn add_frame_times(&self, sample: FrameTimingSample) {
        let frames = self.frames.get();
        let next = if frames == 0 {
            AverageFrameTime {
                total_us: sample.total_delta_us as f32,
                update_us: sample.update_delta_us as f32,
                draw_us: sample.draw_delta_us as f32,
            }
        } else {
            let avg = self.average.get();
            AverageFrameTime {
                total_us: blend(avg.total_us, sample.total_delta_us),
                update_us: blend(avg.update_us, sample.update_delta_us),
                draw_us: blend(avg.draw_us, sample.draw_delta_us),
            }
        };
        self.average.set(next);
        self.frames.set(frames + 1);
    }

    fn average_frame_time(&self) -> AverageFrameTime {
        self.average.get()
    }
}

/// Console stand-in for the profiler overlay: the rolling average at debug level.
impl ProfilerOverlay for RollingStats {
    fn draw(&self, resolution: ScreenResolution) {
        let average = self.average.get();
        log::debug!(
            "[overlay {resolution}] {:.1} fps, update {:.0}us, draw {:.0}us",
            average.fps(),
            average.update_us,
            average.draw_us
        );
    }
}
