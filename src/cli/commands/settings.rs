//! Config file inspection and creation commands.

use crate::config::{self, Config};

/// Print where the config lives and what is in effect
pub fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    match config::config_path() {
        Some(path) if path.exists() => println!("Config file: {:?}", path),
        Some(path) => println!("Config file: {:?} (not created, using defaults)", path),
        None => println!("Config file: no config directory on this system"),
    }

    println!();
    println!("API Keys:");
    if std::env::var("IMVDB_API_KEY").is_ok_and(|k| !k.is_empty()) {
        println!("✓ IMVDb: set (IMVDB_API_KEY)");
    } else if config
        .credentials
        .imvdb_api_key
        .as_deref()
        .is_some_and(|k| !k.is_empty())
    {
        println!("✓ IMVDb: set (config file)");
    } else {
        println!("✗ IMVDb: not set");
        println!("  Get one at: https://imvdb.com/developers");
    }
    println!("  TheAudioDB: {}", config.credentials.audiodb_api_key);

    println!();
    println!("Matching:");
    println!("  Title threshold:  {:.1}", config.matching.title_threshold);
    println!("  Artist threshold: {:.1}", config.matching.artist_threshold);

    println!();
    println!("Batch:");
    println!("  Delay:         {} ms", config.batch.delay_ms);
    println!("  Confirm above: {} files", config.batch.confirm_above);
    println!("  Extensions:    {}", config.batch.extensions.join(", "));

    Ok(())
}

/// Write the default config so it can be edited by hand
pub fn cmd_init_config(force: bool) -> anyhow::Result<()> {
    if !force
        && let Some(path) = config::config_path()
        && path.exists()
    {
        println!("Config already exists at {:?}", path);
        println!("Use --force to replace it with defaults.");
        return Ok(());
    }

    let path = config::save(&Config::default()).map_err(crate::error::Error::from)?;
    println!("✓ Wrote default config to {:?}", path);
    Ok(())
}
