//! Configuration validator.
//!
//! Confirms the configured ConEmu executable is usable before anything is
//! launched. Re-checked on every trigger since settings can change between
//! invocations.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::ConEmuSettings;
use crate::error::LaunchError;
use crate::host::{Host, OPEN_SETTINGS};

/// Check `settings.path` against the filesystem.
pub fn validate(settings: &ConEmuSettings) -> Result<PathBuf, LaunchError> {
    if settings.path.is_empty() {
        return Err(LaunchError::NotConfigured);
    }

    let path = Path::new(&settings.path);
    if !path.exists() {
        return Err(LaunchError::InvalidPath(path.to_path_buf()));
    }

    Ok(path.to_path_buf())
}

/// Validate and, on failure, notify the user with an "Open Settings" action.
///
/// Returns the validated executable path, or `None` if unusable.
pub fn check_configuration(settings: &ConEmuSettings, host: &dyn Host) -> Option<PathBuf> {
    match validate(settings) {
        Ok(path) => {
            debug!("ConEmu executable found at {}", path.display());
            Some(path)
        }
        Err(err) => {
            warn!("Configuration check failed: {:?}", err);
            let action = err.is_configuration_error().then_some(OPEN_SETTINGS);
            let pressed = host.show_info(&err.to_string(), action);
            if pressed.as_deref() == Some(OPEN_SETTINGS) {
                if let Err(e) = host.open_settings() {
                    host.show_error(&format!("Failed to open settings: {}", e));
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings_with_path(path: &str) -> ConEmuSettings {
        ConEmuSettings {
            path: path.to_string(),
            ..ConEmuSettings::default()
        }
    }

    #[test]
    fn test_empty_path_is_not_configured() {
        assert_eq!(
            validate(&ConEmuSettings::default()),
            Err(LaunchError::NotConfigured)
        );
    }

    #[test]
    fn test_missing_path_is_invalid() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("ConEmu64.exe");
        let settings = settings_with_path(&missing.display().to_string());

        assert_eq!(validate(&settings), Err(LaunchError::InvalidPath(missing)));
    }

    #[test]
    fn test_existing_path_is_valid() {
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("ConEmu64.exe");
        std::fs::write(&exe, b"").unwrap();

        let settings = settings_with_path(&exe.display().to_string());
        assert_eq!(validate(&settings), Ok(exe));
    }

    #[test]
    fn test_rechecked_every_time() {
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("ConEmu.exe");
        let settings = settings_with_path(&exe.display().to_string());

        assert!(validate(&settings).is_err());
        std::fs::write(&exe, b"").unwrap();
        assert!(validate(&settings).is_ok());
        std::fs::remove_file(&exe).unwrap();
        assert!(validate(&settings).is_err());
    }
}
