//! ConEmu settings record

use serde::{Deserialize, Serialize};

/// The four options of the `ConEmu` settings namespace.
///
/// Read-only to the launcher. Nothing is enforced here; the validator
/// checks `path` lazily on every trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConEmuSettings {
    /// Filesystem path to ConEmu.exe / ConEmu64.exe
    #[serde(default)]
    pub path: String,

    /// Attach to an already running instance (`-Single`) instead of a new one (`-NoSingle`)
    #[serde(default = "default_reuse_instance")]
    pub reuse_instance: bool,

    /// Command to run inside the new terminal (`-Run`)
    #[serde(default)]
    pub run_command: String,

    /// Show the launcher icon in the editor title bar
    #[serde(default = "default_show_titlebar_icon")]
    pub show_titlebar_icon: bool,
}

fn default_reuse_instance() -> bool {
    true
}

fn default_show_titlebar_icon() -> bool {
    true
}

impl Default for ConEmuSettings {
    fn default() -> Self {
        Self {
            path: String::new(),
            reuse_instance: default_reuse_instance(),
            run_command: String::new(),
            show_titlebar_icon: default_show_titlebar_icon(),
        }
    }
}

impl ConEmuSettings {
    /// The configured run command, if any
    pub fn run_command(&self) -> Option<&str> {
        if self.run_command.is_empty() {
            None
        } else {
            Some(&self.run_command)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_empty_is_none() {
        let mut settings = ConEmuSettings::default();
        assert_eq!(settings.run_command(), None);

        settings.run_command = "ls".into();
        assert_eq!(settings.run_command(), Some("ls"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConEmuSettings::default()).unwrap();
        assert_eq!(json["reuseInstance"], true);
        assert_eq!(json["showTitlebarIcon"], true);
        assert_eq!(json["runCommand"], "");
    }
}
