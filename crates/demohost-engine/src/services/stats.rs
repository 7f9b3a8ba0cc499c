/// Timing sample produced once per completed update + draw cycle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameTimingSample {
    pub update_delta_us: u64,
    pub draw_delta_us: u64,
    pub total_delta_us: u64,
}

/// Rolling-average view exposed by a stats sink, in microseconds.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AverageFrameTime {
    pub total_us: f32,
    pub update_us: f32,
    pub draw_us: f32,
}

impl AverageFrameTime {
    /// Frames per second implied by `total_us`, or `0.0` when no time was recorded.
    pub fn fps(&self) -> f32 {
        if self.total_us > 0.0 {
            1_000_000.0 / self.total_us
        } else {
            0.0
        }
    }
}

/// Receives per-frame timing samples. Aggregation is the sink's business.
pub trait StatsSink {
    fn add_frame_times(&self, sample: FrameTimingSample);

    fn average_frame_time(&self) -> AverageFrameTime;
}
