/// Time-step value handed to application update and draw hooks.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DemoTime {
    /// Total simulated time in microseconds.
    pub total_us: u64,

    /// Time covered by this step in microseconds.
    pub delta_us: u64,
}

impl DemoTime {
    #[inline]
    pub const fn new(total_us: u64, delta_us: u64) -> Self {
        Self { total_us, delta_us }
    }

    /// Step delta in seconds.
    #[inline]
    pub fn delta_secs(self) -> f32 {
        self.delta_us as f32 / 1_000_000.0
    }

    /// Total simulated time in seconds.
    #[inline]
    pub fn total_secs(self) -> f64 {
        self.total_us as f64 / 1_000_000.0
    }
}
