//! wrapcfg: Create and validate `wrap.config.json` app-wrapper build configuration.

pub mod commands;
pub mod config;
pub mod error;

use std::path::Path;

pub use commands::doctor::{DoctorOptions, DoctorOutcome};
pub use commands::init::InitOptions;
pub use config::{AppConfig, AppId, CONFIG_FILE_NAME, load_config, parse_config_content};
pub use error::AppError;

/// Write a starter `wrap.config.json` in `dir`.
pub fn init(dir: &Path, options: InitOptions) -> Result<AppConfig, AppError> {
    let config = commands::init::execute(dir, options)?;
    println!("✅ Created {} for '{}'", CONFIG_FILE_NAME, config.app_name);
    Ok(config)
}

/// Validate the `wrap.config.json` in `dir` and report diagnostics.
pub fn doctor(dir: &Path, options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    commands::doctor::execute(dir, options)
}

/// Load the `wrap.config.json` in `dir` and print it as pretty JSON.
pub fn show(dir: &Path) -> Result<AppConfig, AppError> {
    let config = load_config(dir)?;
    print!("{}", config.to_json_pretty()?);
    Ok(config)
}
