//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::Config;

/// Default settings file written by `conemu-here init`
pub const DEFAULT_CONFIG: &str = r#"# conemu-here configuration
#
# Available options:
#   path             - Full path to ConEmu.exe or ConEmu64.exe (required)
#   reuseInstance    - Open a new tab in a running ConEmu (-Single) instead of
#                      starting a separate instance (-NoSingle) (default: true)
#   runCommand       - Command to run in the new console (-Run), empty for none
#   showTitlebarIcon - Show the launcher icon in the editor title bar (default: true)

[ConEmu]
path = ""
reuseInstance = true
runCommand = ""
showTitlebarIcon = true
"#;

impl Config {
    /// Get the global config directory path (~/.conemu-here/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".conemu-here")
    }

    /// Get the global config file path (~/.conemu-here/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Write the default settings file.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        write_atomic(path, DEFAULT_CONFIG)
    }

    /// Make sure a settings file exists at `path`, writing the default if not.
    ///
    /// Returns `true` if a new file was created.
    pub fn ensure_file(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        write_atomic(path, DEFAULT_CONFIG)?;
        Ok(true)
    }
}

/// Write via a temp file and rename so a crash never leaves a truncated config.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))
}
