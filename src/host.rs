//! Host collaborators.
//!
//! The launcher never talks to a UI or a settings store directly. The host
//! supplies both at construction time and owns their lifetime.

use anyhow::Result;

use crate::config::Config;

/// Label of the action offered with configuration errors
pub const OPEN_SETTINGS: &str = "Open Settings";

/// Label of the action offered on unsupported platforms
pub const SHOW_INFO: &str = "Show Info";

/// Project README, opened by [`SHOW_INFO`]
pub const README_URL: &str = "https://github.com/ipatalas/vscode-conemu/blob/master/README.md";

/// User-facing surface of the host (notifications, output panel, settings UI).
pub trait Host: Send + Sync {
    /// Show an informational message, optionally with a single action button.
    ///
    /// Returns the label of the button the user pressed, if any.
    fn show_info(&self, message: &str, action: Option<&str>) -> Option<String>;

    /// Show an error-level message
    fn show_error(&self, message: &str);

    /// Append a line to the diagnostic output panel, optionally bringing it to front
    fn append_output(&self, line: &str, reveal: bool);

    /// Open the host's settings UI
    fn open_settings(&self) -> Result<()>;

    /// Open an external link
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Where the current configuration comes from.
///
/// Queried on every trigger; implementations must not cache.
pub trait ConfigSource: Send + Sync {
    fn current(&self) -> Result<Config>;
}

/// Fixed configuration, mostly useful for embedding and tests
impl ConfigSource for Config {
    fn current(&self) -> Result<Config> {
        Ok(self.clone())
    }
}
