//! Error taxonomy for a single launch attempt.
//!
//! Every variant is non-fatal: it is turned into one user-facing notification
//! and the triggering command ends there.

use std::path::PathBuf;

/// Reasons a launch did not happen (or did not go cleanly).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LaunchError {
    #[error("ConEmu path is not configured. Set proper path in ConEmu.path setting")]
    NotConfigured,

    #[error("ConEmu path is invalid, please correct it.")]
    InvalidPath(PathBuf),

    #[error("{0}")]
    LaunchFailed(String),

    #[error("{0}")]
    ProcessStderr(String),

    #[error("This extension works only on Windows, sorry")]
    UnsupportedPlatform,
}

impl LaunchError {
    /// Whether pressing "Open Settings" could fix this error.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::NotConfigured | Self::InvalidPath(_))
    }
}
