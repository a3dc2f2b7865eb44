use anyhow::{Context, Result};
use rootcalc_core::RootSettings;
use std::fs;
use std::path::Path;

/// Load settings from a JSON file, or defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<RootSettings> {
    let Some(path) = path else {
        return Ok(RootSettings::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let settings = RootSettings::from_json(&text)
        .with_context(|| format!("Invalid config file '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}
