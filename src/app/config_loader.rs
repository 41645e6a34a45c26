//! Loading the pager configuration from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use upwidgets::PagerConfig;

/// Reads and parses a pager configuration file.
pub fn load_pager_config(path: &Path) -> Result<PagerConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read pager config {}", path.display()))?;
    PagerConfig::from_json_str(&json)
        .with_context(|| format!("failed to parse pager config {}", path.display()))
}
