//! Open command implementation

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use conemu_here::{
    COMMAND_ID, CommandRegistry, Document, LaunchContext, Launcher, Resource, ShellRunner,
};

use super::console::{ConsoleHost, FileConfigSource};

/// Context flags as given on the command line
pub struct OpenArgs {
    pub resource: Option<String>,
    pub document: Option<PathBuf>,
    pub untitled_document: bool,
    pub workspace: Vec<PathBuf>,
}

impl OpenArgs {
    /// Build the launch context. With no flags at all the current directory
    /// stands in for the workspace root.
    fn into_context(self) -> Result<LaunchContext> {
        let mut context = LaunchContext::default();
        let empty = self.resource.is_none()
            && self.document.is_none()
            && !self.untitled_document
            && self.workspace.is_empty();

        if let Some(locator) = &self.resource {
            context = context.with_resource(Resource::parse(locator));
        }

        if let Some(path) = self.document {
            context = context.with_active_document(Document::saved(path));
        } else if self.untitled_document {
            context = context.with_active_document(Document::untitled("Untitled-1"));
        }

        for root in self.workspace {
            context = context.with_workspace_root(root);
        }

        if empty {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            context = context.with_workspace_root(cwd);
        }

        Ok(context)
    }
}

/// Trigger the launcher once and wait for the launch to complete.
///
/// Returns `false` if anything was reported as an error.
pub async fn open_command(config_path: PathBuf, args: OpenArgs) -> Result<bool> {
    let context = args.into_context()?;
    debug!("Launch context: {:?}", context);

    let host = Arc::new(ConsoleHost::new(config_path.clone()));
    let source = Arc::new(FileConfigSource::new(&config_path));
    let launcher = Arc::new(Launcher::new(host, source, Arc::new(ShellRunner)));
    let supported = launcher.is_platform_supported();

    let mut registry = CommandRegistry::new();
    launcher.activate(&mut registry);

    let Some(pending) = registry.execute(COMMAND_ID, &context)? else {
        return Ok(supported);
    };

    println!("{}", pending.command());
    let outcomes = pending.wait().await;
    Ok(outcomes.iter().all(|o| o.as_error().is_none()))
}
