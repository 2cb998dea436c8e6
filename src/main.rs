use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use conemu_here::Config;

mod cli;

#[derive(Parser)]
#[command(name = "conemu-here")]
#[command(about = "Open ConEmu in the directory of the current file, folder or workspace")]
#[command(version)]
struct Cli {
    /// Path to the settings file (defaults to ~/.conemu-here/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open ConEmu (default when no subcommand is given)
    ///
    /// Waits until ConEmu exits. With reuseInstance = true this returns as soon
    /// as a running ConEmu has picked up the new tab; if no ConEmu is running
    /// yet (or with reuseInstance = false) it stays until that window is closed.
    Open {
        /// Resource the command was invoked on (path, file:// URI or untitled:<name>)
        #[arg(long)]
        resource: Option<String>,

        /// Document in the active editor
        #[arg(long, conflicts_with = "untitled_document")]
        document: Option<PathBuf>,

        /// The active editor holds an unsaved buffer
        #[arg(long)]
        untitled_document: bool,

        /// Open workspace folder (repeatable, first one wins)
        #[arg(long)]
        workspace: Vec<PathBuf>,
    },

    /// Check that ConEmu.path points at an existing executable
    Check,

    /// Write a default settings file
    Init {
        /// Overwrite existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Show the settings file location and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);

    let ok = match cli.command {
        Some(Commands::Open {
            resource,
            document,
            untitled_document,
            workspace,
        }) => {
            let args = cli::open::OpenArgs {
                resource,
                document,
                untitled_document,
                workspace,
            };
            cli::open::open_command(config_path, args).await?
        }
        Some(Commands::Check) => cli::check::check_command(config_path).await?,
        Some(Commands::Init { force }) => {
            cli::init::init_command(&config_path, force).await?;
            true
        }
        Some(Commands::Config) => {
            cli::config::config_command(&config_path).await?;
            true
        }
        None => {
            let args = cli::open::OpenArgs {
                resource: None,
                document: None,
                untitled_document: false,
                workspace: Vec::new(),
            };
            cli::open::open_command(config_path, args).await?
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
