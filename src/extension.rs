//! Activation, command registration and the `vscode.conemu` handler.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::command::LaunchCommand;
use crate::context::LaunchContext;
use crate::error::LaunchError;
use crate::host::{ConfigSource, Host, README_URL, SHOW_INFO};
use crate::invoke::{InvocationOutcome, ProcessRunner};
use crate::validate::check_configuration;

/// Identifier of the "Open ConEmu Here" command
pub const COMMAND_ID: &str = "vscode.conemu";

/// ConEmu only exists on Windows
pub fn is_compatible_platform() -> bool {
    cfg!(windows)
}

type Handler = Box<dyn Fn(&LaunchContext) -> Option<PendingLaunch> + Send + Sync>;

/// Maps command identifiers to their handlers
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Handler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, id: &str, handler: F)
    where
        F: Fn(&LaunchContext) -> Option<PendingLaunch> + Send + Sync + 'static,
    {
        if self.handlers.insert(id.to_string(), Box::new(handler)).is_some() {
            warn!("Command {} registered twice, keeping the latest handler", id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// Dispatch a command. Unknown identifiers are an error.
    pub fn execute(&self, id: &str, context: &LaunchContext) -> Result<Option<PendingLaunch>> {
        let handler = self
            .handlers
            .get(id)
            .ok_or_else(|| anyhow!("Unknown command: {}", id))?;
        Ok(handler(context))
    }
}

/// A launch that has been issued but whose completion callback has not fired yet
pub struct PendingLaunch {
    command: LaunchCommand,
    handle: JoinHandle<Vec<InvocationOutcome>>,
    host: Arc<dyn Host>,
}

impl PendingLaunch {
    pub fn command(&self) -> &LaunchCommand {
        &self.command
    }

    /// Wait for the completion to be reported and return what was reported.
    ///
    /// If the invocation task itself died its outcomes were never reported,
    /// so the failure is reported here instead.
    pub async fn wait(self) -> Vec<InvocationOutcome> {
        match self.handle.await {
            Ok(outcomes) => outcomes,
            Err(e) => {
                let outcome = InvocationOutcome::LaunchFailed(e.to_string());
                outcome.report(self.host.as_ref());
                vec![outcome]
            }
        }
    }
}

/// The launcher with its host collaborators
pub struct Launcher {
    host: Arc<dyn Host>,
    config: Arc<dyn ConfigSource>,
    runner: Arc<dyn ProcessRunner>,
    platform_supported: bool,
}

impl Launcher {
    pub fn new(
        host: Arc<dyn Host>,
        config: Arc<dyn ConfigSource>,
        runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        Self {
            host,
            config,
            runner,
            platform_supported: is_compatible_platform(),
        }
    }

    /// Override platform detection
    pub fn with_platform_support(mut self, supported: bool) -> Self {
        self.platform_supported = supported;
        self
    }

    pub fn is_platform_supported(&self) -> bool {
        self.platform_supported
    }

    /// Activate: warn once on unsupported platforms, then register the
    /// command regardless.
    pub fn activate(self: Arc<Self>, registry: &mut CommandRegistry) {
        if !self.platform_supported {
            let message = LaunchError::UnsupportedPlatform.to_string();
            if self.host.show_info(&message, Some(SHOW_INFO)).as_deref() == Some(SHOW_INFO) {
                if let Err(e) = self.host.open_url(README_URL) {
                    warn!("Failed to open {}: {}", README_URL, e);
                }
            }
        }

        let launcher = Arc::clone(&self);
        registry.register(COMMAND_ID, move |context| launcher.trigger(context));
        debug!("Registered command {}", COMMAND_ID);
    }

    /// Handle one trigger.
    ///
    /// Returns the pending launch, or `None` when nothing was launched
    /// (unsupported platform, unusable configuration, nothing to open, or no
    /// Tokio runtime to run the invocation on).
    ///
    /// The invocation is spawned on the current Tokio runtime; called outside
    /// one, a launch failure is reported instead.
    pub fn trigger(&self, context: &LaunchContext) -> Option<PendingLaunch> {
        if !self.platform_supported {
            debug!("{} ignored on unsupported platform", COMMAND_ID);
            return None;
        }

        let config = match self.config.current() {
            Ok(config) => config,
            Err(e) => {
                self.host
                    .show_error(&format!("Failed to read ConEmu settings: {:#}", e));
                return None;
            }
        };
        let settings = config.conemu;

        check_configuration(&settings, self.host.as_ref())?;

        let target = context.resolve_target();
        self.host.append_output(
            &format!(
                "{}(uri: {}, target: {})",
                COMMAND_ID,
                context
                    .resource
                    .as_ref()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "none".to_string()),
                target
                    .as_ref()
                    .map(|t| t.display().to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            false,
        );

        let Some(target) = target else {
            info!("No file, folder or workspace to open, nothing launched");
            return None;
        };

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                InvocationOutcome::LaunchFailed(format!("Cannot launch ConEmu: {}", e))
                    .report(self.host.as_ref());
                return None;
            }
        };

        let command = LaunchCommand::build(&settings, &target);
        let settings_json = serde_json::to_string_pretty(&settings)
            .unwrap_or_else(|e| format!("<unserializable: {}>", e));
        self.host.append_output(
            &format!("config: {}\n\ncommand: {}", settings_json, command),
            false,
        );
        info!("Launching ConEmu in {}", target.display());

        let host = Arc::clone(&self.host);
        let runner = Arc::clone(&self.runner);
        let command_line = command.command_line();
        let handle = runtime.spawn(async move {
            let outcomes = runner.run(&command_line).await.outcomes();
            for outcome in &outcomes {
                outcome.report(host.as_ref());
            }
            outcomes
        });

        Some(PendingLaunch {
            command,
            handle,
            host: Arc::clone(&self.host),
        })
    }
}
