//! Init command implementation

use std::path::Path;

use anyhow::Result;
use tracing::info;

use conemu_here::Config;

/// Write the default settings file
pub async fn init_command(config_path: &Path, force: bool) -> Result<()> {
    Config::write_default(config_path, force)?;
    info!("Wrote default settings to {}", config_path.display());
    println!("Created {}", config_path.display());
    println!("Set ConEmu.path to your ConEmu64.exe before running `conemu-here open`.");
    Ok(())
}
