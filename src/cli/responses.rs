use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use radiostat::responses::{ResponseKey, ResponseStore};

use super::Config;

/// List recorded responses
pub fn show(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let path = config.responses_path(file);
    let store = ResponseStore::load(&path)
        .with_context(|| format!("Failed to load responses from {}", path.display()))?;

    if store.is_empty() {
        println!("No responses recorded in {}", path.display());
        return Ok(());
    }

    for (key, value) in store.iter() {
        println!("{}:", key);
        for line in value.lines() {
            println!("  {}", line);
        }
    }
    Ok(())
}

/// Record one response and save the whole set
pub fn set(config: &Config, file: Option<PathBuf>, key: &str, value: &str) -> Result<()> {
    let key: ResponseKey = key.parse()?;
    let path = config.responses_path(file);

    let mut store = ResponseStore::load(&path)
        .with_context(|| format!("Failed to load responses from {}", path.display()))?;
    store.set(key, value);
    store
        .save()
        .with_context(|| format!("Failed to save responses to {}", path.display()))?;

    info!("Saved '{}' to {}", key, path.display());
    Ok(())
}
