//! Config command implementation

use std::path::Path;

use anyhow::{Context, Result};

use conemu_here::Config;

/// Print where settings are read from and what they currently say
pub async fn config_command(config_path: &Path) -> Result<()> {
    let config = Config::from_file(config_path)?;

    println!("Settings file: {}", config_path.display());
    if !config_path.exists() {
        println!("  (not found, using defaults)");
    }

    let json = serde_json::to_string_pretty(&config.conemu)
        .with_context(|| "Failed to serialize settings")?;
    println!("{}", json);
    Ok(())
}
