/// How per-frame timing is written to the log.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LogStatsMode {
    #[default]
    Off,
    /// Log the timing of the frame that just completed.
    Latest,
    /// Log the stats sink's rolling average.
    Average,
}

/// Construction-time configuration for the run-loop manager.
///
/// Fixed for the lifetime of the manager instance.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Gates overlay rendering together with `render_overlay`; the overlay is
    /// only drawn when both are set. Frame timing reaches the stats sink either way.
    pub enable_stats: bool,

    pub log_stats_mode: LogStatsMode,

    /// Always wrap the real application in the fallback firewall.
    pub enable_firewall: bool,

    /// Enable the content monitor on construction.
    pub enable_content_monitor: bool,

    /// Hint forwarded to the resolution sink when an application is constructed.
    pub preallocate_basic_2d: bool,

    /// When non-zero, every tick behaves as if exactly this many microseconds
    /// elapsed. Used for deterministic capture.
    pub forced_update_time_us: u64,

    /// Whether a profiler overlay is wanted at all. Has no effect unless
    /// `enable_stats` is set.
    pub render_overlay: bool,

    /// Duration of one fixed step at normal speed, in microseconds.
    pub base_frame_time_us: u64,

    /// Frame deltas at or above this ceiling are replaced by one expected frame.
    pub max_frame_time_us: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            enable_stats: false,
            log_stats_mode: LogStatsMode::Off,
            enable_firewall: false,
            enable_content_monitor: false,
            preallocate_basic_2d: false,
            forced_update_time_us: 0,
            render_overlay: false,
            base_frame_time_us: 1_000_000 / 60,
            max_frame_time_us: 1_000_000 / 2,
        }
    }
}

impl HostConfig {
    pub fn with_stats(mut self, enabled: bool, log_mode: LogStatsMode) -> Self {
        self.enable_stats = enabled;
        self.log_stats_mode = log_mode;
        self
    }

    pub fn with_firewall(mut self, enabled: bool) -> Self {
        self.enable_firewall = enabled;
        self
    }

    pub fn with_content_monitor(mut self, enabled: bool) -> Self {
        self.enable_content_monitor = enabled;
        self
    }

    pub fn with_preallocate_basic_2d(mut self, enabled: bool) -> Self {
        self.preallocate_basic_2d = enabled;
        self
    }

    pub fn with_forced_update_time(mut self, time_us: u64) -> Self {
        self.forced_update_time_us = time_us;
        self
    }

    pub fn with_overlay(mut self, enabled: bool) -> Self {
        self.render_overlay = enabled;
        self
    }

    pub fn with_frame_times(mut self, base_frame_time_us: u64, max_frame_time_us: u64) -> Self {
        debug_assert!(base_frame_time_us > 0);
        self.base_frame_time_us = base_frame_time_us;
        self.max_frame_time_us = max_frame_time_us;
        self
    }
}
