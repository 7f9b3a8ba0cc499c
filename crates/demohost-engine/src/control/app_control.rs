use std::cell::Cell;

use crate::time::TimeStepMode;

/// Control signals shared between the host and the active application.
///
/// Both sides mutate it through `&self`; implementations use interior
/// mutability. Requests stay pending until the reader clears them.
pub trait AppControl {
    /// Requests an exit with the current exit code.
    fn request_exit(&self);

    /// Requests an exit and records `code` as the process exit code.
    fn request_exit_with_code(&self, code: i32);

    fn has_exit_request(&self) -> bool;

    /// Exit code the host should terminate with.
    fn exit_code(&self) -> i32;

    fn request_app_restart(&self);
    fn has_app_restart_request(&self) -> bool;
    fn clear_app_restart_request(&self);

    fn request_update_timer_reset(&self);
    fn has_update_timer_reset_request(&self) -> bool;
    fn clear_update_timer_reset_request(&self);

    fn time_step_mode(&self) -> TimeStepMode;
    fn set_time_step_mode(&self, mode: TimeStepMode);
}

/// Single-threaded in-memory control surface.
#[derive(Debug, Default)]
pub struct AppControlState {
    exit_requested: Cell<bool>,
    exit_code: Cell<i32>,
    restart_requested: Cell<bool>,
    timer_reset_requested: Cell<bool>,
    time_step_mode: Cell<TimeStepMode>,
}

impl AppControlState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppControl for AppControlState {
    fn request_exit(&self) {
        self.exit_requested.set(true);
    }

    fn request_exit_with_code(&self, code: i32) {
        self.exit_code.set(code);
        self.exit_requested.set(true);
    }

    fn has_exit_request(&self) -> bool {
        self.exit_requested.get()
    }

    fn exit_code(&self) -> i32 {
        self.exit_code.get()
    }

    fn request_app_restart(&self) {
        self.restart_requested.set(true);
    }

    fn has_app_restart_request(&self) -> bool {
        self.restart_requested.get()
    }

    fn clear_app_restart_request(&self) {
        self.restart_requested.set(false);
    }

    fn request_update_timer_reset(&self) {
        self.timer_reset_requested.set(true);
    }

    fn has_update_timer_reset_request(&self) -> bool {
        self.timer_reset_requested.get()
    }

    fn clear_update_timer_reset_request(&self) {
        self.timer_reset_requested.set(false);
    }

    fn time_step_mode(&self) -> TimeStepMode {
        self.time_step_mode.get()
    }

    fn set_time_step_mode(&self, mode: TimeStepMode) {
        self.time_step_mode.set(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_request_keeps_code() {
        let control = AppControlState::new();
        assert!(!control.has_exit_request());
        control.request_exit_with_code(3);
        assert!(control.has_exit_request());
        assert_eq!(control.exit_code(), 3);
    }

    #[test]
    fn restart_and_timer_requests_clear_independently() {
        let control = AppControlState::new();
        control.request_app_restart();
        control.request_update_timer_reset();

        control.clear_app_restart_request();
        assert!(!control.has_app_restart_request());
        assert!(control.has_update_timer_reset_request());

        control.clear_update_timer_reset_request();
        assert!(!control.has_update_timer_reset_request());
    }

    #[test]
    fn default_mode_is_normal() {
        let control = AppControlState::new();
        assert_eq!(control.time_step_mode(), TimeStepMode::Normal);
        control.set_time_step_mode(TimeStepMode::Slow2X);
        assert_eq!(control.time_step_mode(), TimeStepMode::Slow2X);
    }
}
