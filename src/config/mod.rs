pub mod app_id;
pub mod model;
pub mod parse;

pub use app_id::AppId;
pub use model::AppConfig;
pub use parse::{load_config, parse_config_content};

/// On-disk name of the app-wrapper build configuration.
pub const CONFIG_FILE_NAME: &str = "wrap.config.json";
