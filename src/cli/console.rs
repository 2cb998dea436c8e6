//! Terminal-backed host: notifications on stderr, settings in a TOML file.

use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use conemu_here::{ConfigSource, Config, Host};

/// Host implementation for the command line
pub struct ConsoleHost {
    config_path: PathBuf,
}

impl ConsoleHost {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Offer an action as a yes/no prompt. Declined when stdin is not interactive.
    fn prompt_action(action: &str) -> Option<String> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return None;
        }

        eprint!("{}? [y/N] ", action);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        stdin.lock().read_line(&mut answer).ok()?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(action.to_string()),
            _ => None,
        }
    }
}

impl Host for ConsoleHost {
    fn show_info(&self, message: &str, action: Option<&str>) -> Option<String> {
        eprintln!("{}", message);
        action.and_then(Self::prompt_action)
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn append_output(&self, line: &str, reveal: bool) {
        if reveal {
            tracing::warn!(target: "conemu_here::output", "{}", line);
        } else {
            tracing::debug!(target: "conemu_here::output", "{}", line);
        }
    }

    fn open_settings(&self) -> Result<()> {
        if Config::ensure_file(&self.config_path)? {
            eprintln!("Created {}", self.config_path.display());
        }
        open_with_system(&self.config_path.display().to_string())
    }

    fn open_url(&self, url: &str) -> Result<()> {
        open_with_system(url)
    }
}

/// Re-reads the settings file on every trigger
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ConfigSource for FileConfigSource {
    fn current(&self) -> Result<Config> {
        Config::from_file(&self.path)
    }
}

/// Hand a file or URL to the desktop's default handler without waiting
fn open_with_system(target: &str) -> Result<()> {
    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(target);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(target);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(target);
        cmd
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to open {}", target))?;
    Ok(())
}
