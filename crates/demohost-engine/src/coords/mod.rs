//! Screen-space types shared between the host and the active application.

mod resolution;

pub use resolution::ScreenResolution;
