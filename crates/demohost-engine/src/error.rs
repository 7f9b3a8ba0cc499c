//! Host error types.

use thiserror::Error;

/// Errors surfaced by the run-loop manager.
///
/// Application hooks report failures as `anyhow::Error`; the manager wraps them
/// here so callers can tell a failed teardown apart from a failed update.
#[derive(Error, Debug)]
pub enum HostError {
    /// The application's pre-destruct hook failed. The application has
    /// already been released when this is returned.
    #[error("application pre-destruct failed")]
    PreDestruct(#[source] anyhow::Error),

    /// The factory or the post-construct hook failed.
    #[error("application construction failed")]
    Construct(#[source] anyhow::Error),

    /// A lifecycle hook other than construct/destruct failed.
    #[error("application hook `{hook}` failed")]
    Hook {
        /// Name of the hook that failed.
        hook: &'static str,
        /// Underlying failure.
        #[source]
        source: anyhow::Error,
    },

    /// A raw timestep mode value did not map to a known mode.
    #[error("unknown timestep mode: {0}")]
    UnknownTimeStepMode(u8),
}

impl HostError {
    pub(crate) fn hook(hook: &'static str) -> impl FnOnce(anyhow::Error) -> HostError {
        move |source| HostError::Hook { hook, source }
    }
}
