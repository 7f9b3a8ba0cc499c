use crate::error::HostError;

/// Simulation speed policy selected through the control surface.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TimeStepMode {
    #[default]
    Normal = 0,
    Paused = 1,
    /// Advance exactly one fixed step, then fall back to `Paused`.
    Step = 2,
    Slow2X = 3,
    Slow4X = 4,
    Fast2X = 5,
    Fast4X = 6,
}

impl TimeStepMode {
    /// Wall-clock time one fixed step should take under this mode.
    ///
    /// Never returns zero so the fixed-step drain always terminates.
    pub const fn expected_frame_time(self, base_frame_time_us: u64) -> u64 {
        let expected = match self {
            TimeStepMode::Normal | TimeStepMode::Paused | TimeStepMode::Step => base_frame_time_us,
            TimeStepMode::Slow2X => base_frame_time_us * 2,
            TimeStepMode::Slow4X => base_frame_time_us * 4,
            TimeStepMode::Fast2X => base_frame_time_us / 2,
            TimeStepMode::Fast4X => base_frame_time_us / 4,
        };
        if expected == 0 { 1 } else { expected }
    }

    /// Returns `true` for the slow/fast multiplier modes.
    pub const fn is_speed_multiplier(self) -> bool {
        matches!(
            self,
            TimeStepMode::Slow2X | TimeStepMode::Slow4X | TimeStepMode::Fast2X | TimeStepMode::Fast4X
        )
    }
}

impl TryFrom<u8> for TimeStepMode {
    type Error = HostError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(TimeStepMode::Normal),
            1 => Ok(TimeStepMode::Paused),
            2 => Ok(TimeStepMode::Step),
            3 => Ok(TimeStepMode::Slow2X),
            4 => Ok(TimeStepMode::Slow4X),
            5 => Ok(TimeStepMode::Fast2X),
            6 => Ok(TimeStepMode::Fast4X),
            other => Err(HostError::UnknownTimeStepMode(other)),
        }
    }
}
