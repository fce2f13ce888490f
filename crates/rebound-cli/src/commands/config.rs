use anyhow::Result;

use rebound_core::AppConfig;

/// Print where the config file is read from
pub fn path() -> Result<()> {
    let path = AppConfig::config_path();
    let state = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", path.display(), state);
    Ok(())
}

/// Write the default configuration unless a file already exists
pub fn init(force: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    AppConfig::default().save()?;
    println!("Wrote default config to {}", path.display());

    Ok(())
}

/// Print the effective configuration as TOML
pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
