//! App-wrapper configuration domain model.

use serde::{Deserialize, Serialize};

use super::AppId;
use crate::error::AppError;

/// The build configuration consumed by the app-wrapper toolchain.
///
/// Serialized as camelCase JSON (`appId`, `appName`, `webDir`), the
/// shape external packaging tools expect. The record carries exactly
/// these three fields; unknown keys fail deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppConfig {
    /// Reverse-DNS application identifier.
    pub app_id: AppId,
    /// Human-readable application name.
    pub app_name: String,
    /// Relative path to the directory holding built web assets.
    pub web_dir: String,
}

impl AppConfig {
    /// Validate field constraints, failing on the first violation.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.field_issues().into_iter().next() {
            Some((field, reason)) => Err(AppError::invalid_field(field, reason)),
            None => Ok(()),
        }
    }

    /// Collect every field constraint violation.
    ///
    /// `appId` is already guaranteed valid by the `AppId` type; only the
    /// plain string fields need checking here.
    pub fn field_issues(&self) -> Vec<(&'static str, String)> {
        let mut issues = Vec::new();

        if self.app_name.trim().is_empty() {
            issues.push(("appName", "must be a non-empty string".to_string()));
        }

        if self.web_dir.is_empty() {
            issues.push(("webDir", "must be a non-empty relative path".to_string()));
        } else if self.web_dir.contains('\\') {
            issues.push(("webDir", "must use forward slashes".to_string()));
        } else if std::path::Path::new(&self.web_dir).is_absolute() {
            issues.push(("webDir", "must be a relative path".to_string()));
        } else if self.web_dir.split('/').any(|part| part == "." || part == "..") {
            issues.push(("webDir", "must not contain '.' or '..' components".to_string()));
        }

        issues
    }

    /// Canonical pretty-printed JSON form, used for both `init` and `show`.
    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppConfig {
        AppConfig {
            app_id: AppId::new("io.ionic.starter").unwrap(),
            app_name: "Capacitor Error Copy".to_string(),
            web_dir: "dist".to_string(),
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_app_name_fails() {
        let mut config = sample();
        config.app_name = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidField { field: "appName", .. }));
    }

    #[test]
    fn empty_web_dir_fails() {
        let mut config = sample();
        config.web_dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn absolute_web_dir_fails() {
        let mut config = sample();
        config.web_dir = "/var/www/dist".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidField { field: "webDir", .. }));
    }

    #[test]
    fn traversing_web_dir_fails() {
        let mut config = sample();
        config.web_dir = "../dist".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn nested_web_dir_is_allowed() {
        let mut config = sample();
        config.web_dir = "build/web".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn serializes_camel_case() {
        let rendered = sample().to_json_pretty().unwrap();
        assert!(rendered.contains("\"appId\": \"io.ionic.starter\""));
        assert!(rendered.contains("\"appName\": \"Capacitor Error Copy\""));
        assert!(rendered.contains("\"webDir\": \"dist\""));
    }

    #[test]
    fn pretty_form_is_stable() {
        let config = sample();
        assert_eq!(config.to_json_pretty().unwrap(), config.to_json_pretty().unwrap());
    }
}
