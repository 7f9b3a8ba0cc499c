use crate::time::{DemoTime, TimeStepMode};

use super::config::HostConfig;

/// Fixed-timestep accumulator.
///
/// Banks elapsed wall-clock time and drains it in fixed steps. All values are
/// microseconds. Timestamp arithmetic wraps so a baseline back-dated past the
/// clock origin still yields the exact delta on the next tick.
#[derive(Debug, Clone)]
pub(crate) struct StepAccumulator {
    base_frame_time: u64,
    max_frame_time: u64,
    forced_update_time: u64,
    expected_frame_time: u64,

    previous_timestamp: u64,
    accumulated_time: u64,
    last_frame_delta: u64,

    total_time: u64,
    total_fixed_time: u64,
}

impl StepAccumulator {
    pub(crate) fn new(config: &HostConfig) -> Self {
        let base_frame_time = config.base_frame_time_us.max(1);
        Self {
            base_frame_time,
            max_frame_time: config.max_frame_time_us,
            forced_update_time: config.forced_update_time_us,
            expected_frame_time: base_frame_time,
            previous_timestamp: 0,
            accumulated_time: 0,
            last_frame_delta: 0,
            total_time: 0,
            total_fixed_time: 0,
        }
    }

    /// Back-dates the baseline by one expected frame and empties the bank.
    pub(crate) fn reset(&mut self, now: u64) {
        self.previous_timestamp = now.wrapping_sub(self.expected_frame_time);
        self.accumulated_time = 0;
    }

    pub(crate) fn apply_mode(&mut self, mode: TimeStepMode) {
        self.expected_frame_time = mode.expected_frame_time(self.base_frame_time);
    }

    /// Banks the time elapsed since the previous tick and returns the
    /// variable-step time for this tick.
    ///
    /// Call [`StepAccumulator::next_fixed_step`] until it returns `None` to
    /// drain the fixed steps.
    pub(crate) fn advance(&mut self, now: u64, mode: TimeStepMode) -> DemoTime {
        if self.forced_update_time != 0 {
            self.previous_timestamp = now.wrapping_sub(self.forced_update_time);
        }

        let mut delta = now.wrapping_sub(self.previous_timestamp);
        self.previous_timestamp = now;

        match mode {
            TimeStepMode::Paused => {
                delta = 0;
                self.accumulated_time = 0;
            }
            TimeStepMode::Step => {
                delta = self.expected_frame_time;
                self.accumulated_time = 0;
            }
            _ => {}
        }

        // A stall never turns into a burst of catch-up steps.
        if delta >= self.max_frame_time {
            delta = self.expected_frame_time;
        }

        self.accumulated_time += delta;
        self.last_frame_delta = delta;

        // Speed modes report the variable delta in base-rate units.
        if mode.is_speed_multiplier() {
            delta = (self.accumulated_time / self.expected_frame_time) * self.base_frame_time;
        }

        self.total_time += delta;
        DemoTime::new(self.total_time, delta)
    }

    /// Consumes one expected frame from the bank.
    ///
    /// Fixed steps always advance the simulation by the base frame time,
    /// whatever the speed mode.
    pub(crate) fn next_fixed_step(&mut self) -> Option<DemoTime> {
        if self.accumulated_time < self.expected_frame_time {
            return None;
        }
        self.accumulated_time -= self.expected_frame_time;
        self.total_fixed_time += self.base_frame_time;
        Some(DemoTime::new(self.total_fixed_time, self.base_frame_time))
    }

    pub(crate) fn accumulated_time(&self) -> u64 {
        self.accumulated_time
    }

    pub(crate) fn expected_frame_time(&self) -> u64 {
        self.expected_frame_time
    }

    pub(crate) fn last_frame_delta(&self) -> u64 {
        self.last_frame_delta
    }

    pub(crate) fn total_time(&self) -> u64 {
        self.total_time
    }

    pub(crate) fn total_fixed_time(&self) -> u64 {
        self.total_fixed_time
    }
}
