//! Shared test doubles for launcher integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use conemu_here::config::ConEmuSettings;
use conemu_here::{Completion, Config, Host, Launcher, ProcessRunner};

/// Something the launcher showed or logged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Info { message: String, action: Option<String> },
    Error(String),
    Output { line: String, reveal: bool },
    SettingsOpened,
    UrlOpened(String),
}

/// Host that records everything and presses a preset button
#[derive(Default)]
pub struct RecordingHost {
    pub events: Mutex<Vec<Shown>>,
    pub press: Option<String>,
}

impl RecordingHost {
    pub fn pressing(action: &str) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            press: Some(action.to_string()),
        }
    }

    pub fn events(&self) -> Vec<Shown> {
        self.events.lock().unwrap().clone()
    }

    /// Notifications only, output panel lines left out
    pub fn notifications(&self) -> Vec<Shown> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, Shown::Info { .. } | Shown::Error(_)))
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Shown::Error(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn output_lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Shown::Output { line, .. } => Some(line),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Shown) {
        self.events.lock().unwrap().push(event);
    }
}

impl Host for RecordingHost {
    fn show_info(&self, message: &str, action: Option<&str>) -> Option<String> {
        self.push(Shown::Info {
            message: message.to_string(),
            action: action.map(str::to_string),
        });
        match (action, &self.press) {
            (Some(offered), Some(pressed)) if offered == pressed => Some(pressed.clone()),
            _ => None,
        }
    }

    fn show_error(&self, message: &str) {
        self.push(Shown::Error(message.to_string()));
    }

    fn append_output(&self, line: &str, reveal: bool) {
        self.push(Shown::Output {
            line: line.to_string(),
            reveal,
        });
    }

    fn open_settings(&self) -> anyhow::Result<()> {
        self.push(Shown::SettingsOpened);
        Ok(())
    }

    fn open_url(&self, url: &str) -> anyhow::Result<()> {
        self.push(Shown::UrlOpened(url.to_string()));
        Ok(())
    }
}

/// Runner that records command lines and answers with a fixed completion
pub struct ScriptedRunner {
    pub completion: Completion,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(completion: Completion) -> Self {
        Self {
            completion,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    async fn run(&self, command_line: &str) -> Completion {
        self.calls.lock().unwrap().push(command_line.to_string());
        self.completion.clone()
    }
}

/// A temp dir holding a stand-in ConEmu executable
pub fn fake_conemu() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let exe = dir.path().join("ConEmu64.exe");
    std::fs::write(&exe, b"").expect("Failed to write fake executable");
    (dir, exe)
}

pub fn config_for(exe: &Path, reuse_instance: bool, run_command: &str) -> Config {
    Config {
        conemu: ConEmuSettings {
            path: exe.display().to_string(),
            reuse_instance,
            run_command: run_command.to_string(),
            show_titlebar_icon: true,
        },
    }
}

/// Launcher on a supported platform with the given doubles
pub fn launcher(
    host: &Arc<RecordingHost>,
    config: Config,
    runner: &Arc<ScriptedRunner>,
) -> Launcher {
    Launcher::new(host.clone(), Arc::new(config), runner.clone()).with_platform_support(true)
}

/// Runner whose invocation task dies before completing
pub struct PanickingRunner;

#[async_trait]
impl ProcessRunner for PanickingRunner {
    async fn run(&self, _command_line: &str) -> Completion {
        panic!("runner crashed")
    }
}
