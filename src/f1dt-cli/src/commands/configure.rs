//! Configuration command handler

use anyhow::Result;

use crate::config::Config;

/// Handle the configure command
pub fn handle(season: Option<u16>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(season) = season {
        config.default_season = Some(season);
        config.save()?;
        println!("Default season set to {season}");
    }

    if show || season.is_none() {
        println!("Config file: {}", Config::config_path()?.display());
        match config.default_season {
            Some(season) => println!("Default season: {season}"),
            None => println!("Default season: not set"),
        }
    }

    Ok(())
}
