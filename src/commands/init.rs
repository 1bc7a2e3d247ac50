//! Create a starter `wrap.config.json`.

use std::fs;
use std::path::Path;

use crate::config::{AppConfig, AppId, CONFIG_FILE_NAME, parse_config_content};
use crate::error::AppError;

/// Embedded starter config used when no overrides are given.
static STARTER_CONFIG: &str = include_str!("../templates/wrap.config.json");

/// Field overrides for the generated config.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub app_id: Option<String>,
    pub app_name: Option<String>,
    pub web_dir: Option<String>,
}

/// Execute the init command.
///
/// Writes the starter config into `dir`, applying any overrides, and
/// refuses to clobber an existing file.
pub fn execute(dir: &Path, options: InitOptions) -> Result<AppConfig, AppError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(AppError::ConfigExists);
    }

    let template = parse_config_content(STARTER_CONFIG)?;
    let config = AppConfig {
        app_id: match options.app_id {
            Some(id) => AppId::new(&id)?,
            None => template.app_id,
        },
        app_name: options.app_name.unwrap_or(template.app_name),
        web_dir: options.web_dir.unwrap_or(template.web_dir),
    };
    config.validate()?;

    fs::write(&path, config.to_json_pretty()?)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_template_is_valid() {
        let config = parse_config_content(STARTER_CONFIG).unwrap();
        assert_eq!(config.app_id.as_str(), "io.ionic.starter");
        assert_eq!(config.web_dir, "dist");
    }

    #[test]
    fn starter_template_matches_canonical_form() {
        let config = parse_config_content(STARTER_CONFIG).unwrap();
        assert_eq!(config.to_json_pretty().unwrap(), STARTER_CONFIG);
    }
}
