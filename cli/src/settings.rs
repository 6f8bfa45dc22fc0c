use anyhow::{Context, Result};
use std::path::Path;
use tileflip_core::RuleSettings;

use crate::Args;

/// Reads rule settings from a TOML file, every key optional.
pub fn load_file(path: &Path) -> Result<RuleSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read settings file {}", path.display()))?;
    parse(&text).with_context(|| format!("Invalid settings file {}", path.display()))
}

pub fn parse(text: &str) -> Result<RuleSettings> {
    Ok(toml::from_str(text)?)
}

/// Settings file (or defaults) with command line overrides applied on top.
pub fn resolve(args: &Args) -> Result<RuleSettings> {
    let mut settings = match &args.settings {
        Some(path) => load_file(path)?,
        None => RuleSettings::default(),
    };

    if let Some(min_tries) = args.min_tries {
        settings.min_tries = min_tries;
    }
    if let Some(max_tries) = args.max_tries {
        settings.max_tries = max_tries;
    }
    if let Some(win_condition) = args.win_condition {
        settings.win_condition = win_condition;
    }

    Ok(settings.validate()?)
}
