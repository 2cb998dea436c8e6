//! External process invocation and outcome classification.

use std::process::Stdio;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::error::LaunchError;
use crate::host::Host;

/// What the platform reported once the launched command completed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Process could not be created, or exited unsuccessfully
    pub error: Option<String>,
    /// Captured standard error text
    pub stderr: String,
}

impl Completion {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            stderr: String::new(),
        }
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    /// Classify the completion.
    ///
    /// A launch error and stderr output are independent: both are reported
    /// when both occur. A clean completion yields a single `Launched`.
    pub fn outcomes(&self) -> Vec<InvocationOutcome> {
        let mut outcomes = Vec::new();

        if let Some(message) = &self.error {
            outcomes.push(InvocationOutcome::LaunchFailed(message.clone()));
        }

        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            outcomes.push(InvocationOutcome::ProcessStderr(stderr.to_string()));
        }

        if outcomes.is_empty() {
            outcomes.push(InvocationOutcome::Launched);
        }
        outcomes
    }
}

/// Classified result of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    Launched,
    LaunchFailed(String),
    ProcessStderr(String),
}

impl InvocationOutcome {
    /// The error this outcome stands for, if any
    pub fn as_error(&self) -> Option<LaunchError> {
        match self {
            Self::Launched => None,
            Self::LaunchFailed(msg) => Some(LaunchError::LaunchFailed(msg.clone())),
            Self::ProcessStderr(msg) => Some(LaunchError::ProcessStderr(msg.clone())),
        }
    }

    /// Surface the outcome to the user. A clean launch shows nothing.
    pub fn report(&self, host: &dyn Host) {
        match self {
            Self::Launched => debug!("ConEmu launched"),
            Self::LaunchFailed(msg) => {
                error!("ConEmu launch failed: {}", msg);
                host.append_output(&format!("error: {}", msg), true);
                host.show_error(msg);
            }
            Self::ProcessStderr(msg) => {
                warn!("ConEmu wrote to stderr: {}", msg);
                host.append_output(&format!("stderr: {}", msg), true);
                host.show_error(msg);
            }
        }
    }
}

/// Platform process-execution facility
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run a full command line through the platform shell and wait for it
    async fn run(&self, command_line: &str) -> Completion;
}

/// Runs command lines through `cmd.exe` (or `sh` elsewhere)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    fn shell_command(command_line: &str) -> std::process::Command {
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;

            let mut cmd = std::process::Command::new("cmd");
            cmd.args(["/d", "/s", "/c"]);
            // cmd.exe parses the whole line itself; hand it over untouched
            cmd.raw_arg(format!("\"{}\"", command_line));
            cmd
        }

        #[cfg(not(windows))]
        {
            let mut cmd = std::process::Command::new("sh");
            cmd.arg("-c").arg(command_line);
            cmd
        }
    }
}

#[async_trait]
impl ProcessRunner for ShellRunner {
    async fn run(&self, command_line: &str) -> Completion {
        let mut cmd = tokio::process::Command::from(Self::shell_command(command_line));
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        match cmd.output().await {
            Err(e) => Completion::failed(e.to_string()),
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                if output.status.success() {
                    Completion::success().with_stderr(stderr)
                } else {
                    Completion::failed(format!(
                        "Command failed ({}): {}",
                        output.status, command_line
                    ))
                    .with_stderr(stderr)
                }
            }
        }
    }
}
