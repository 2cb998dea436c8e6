//! conemu-here - open ConEmu where you are working
//!
//! Given what the editor knows at trigger time (a resource from a context
//! menu, the active document, the open workspace) this crate picks a
//! directory and starts ConEmu there, optionally reusing a running instance
//! and auto-running a command in the new console.
//!
//! ## Flow
//!
//! 1. [`validate`] checks the configured ConEmu executable
//! 2. [`context`] resolves the target directory
//! 3. [`command`] builds the ConEmu command line
//! 4. [`invoke`] runs it and classifies the completion
//!
//! [`extension`] wires these together behind a registered command, with the
//! UI and settings store supplied through the traits in [`host`].

pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod extension;
pub mod host;
pub mod invoke;
pub mod validate;

pub use command::LaunchCommand;
pub use config::{ConEmuSettings, Config};
pub use context::{Document, LaunchContext, Resource};
pub use error::LaunchError;
pub use extension::{COMMAND_ID, CommandRegistry, Launcher, PendingLaunch};
pub use host::{ConfigSource, Host};
pub use invoke::{Completion, InvocationOutcome, ProcessRunner, ShellRunner};
