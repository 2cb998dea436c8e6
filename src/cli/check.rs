//! Check command implementation

use std::path::PathBuf;

use anyhow::Result;

use conemu_here::Config;
use conemu_here::validate::check_configuration;

use super::console::ConsoleHost;

/// Run the configuration validator on its own
pub async fn check_command(config_path: PathBuf) -> Result<bool> {
    let config = Config::from_file(&config_path)?;
    let host = ConsoleHost::new(config_path);

    let Some(exe) = check_configuration(&config.conemu, &host) else {
        return Ok(false);
    };

    println!("ConEmu found at {}", exe.display());
    Ok(true)
}
