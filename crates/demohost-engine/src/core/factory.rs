use anyhow::Result;

use super::app::DemoApp;
use super::config::DemoAppConfig;

/// Builds the real application for the manager.
pub trait DemoAppFactory<'h> {
    /// Allocates a new application instance for `config`.
    fn allocate(&self, config: &DemoAppConfig<'h>) -> Result<Box<dyn DemoApp + 'h>>;
}

/// Static description of the hosted application.
#[derive(Clone, Copy)]
pub struct DemoAppSetup<'h> {
    pub factory: &'h dyn DemoAppFactory<'h>,

    /// Tear the application down and rebuild it whenever the resolution changes,
    /// instead of delivering a `resized` call.
    pub restart_on_resize: bool,
}

impl<'h> DemoAppSetup<'h> {
    pub fn new(factory: &'h dyn DemoAppFactory<'h>) -> Self {
        Self {
            factory,
            restart_on_resize: false,
        }
    }

    pub fn with_restart_on_resize(mut self, enabled: bool) -> Self {
        self.restart_on_resize = enabled;
        self
    }
}
