//! Pure parse/validate for app-wrapper configuration (`wrap.config.json`).

use std::fs;
use std::io;
use std::path::Path;

use super::{AppConfig, CONFIG_FILE_NAME};
use crate::error::AppError;

/// Parse and validate configuration from JSON content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load `wrap.config.json` from a directory.
pub fn load_config(dir: &Path) -> Result<AppConfig, AppError> {
    let content = fs::read_to_string(dir.join(CONFIG_FILE_NAME)).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound { AppError::ConfigMissing } else { err.into() }
    })?;
    parse_config_content(&content)
}
