use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

/// A validated reverse-DNS application identifier.
///
/// Guarantees:
/// - At least two dot-delimited segments
/// - Every segment is non-empty
/// - Segments contain only ASCII alphanumerics, `-`, or `_`
/// - No segment starts with a digit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppId(String);

impl AppId {
    /// Validate and create a new identifier.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if validate_app_id(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidAppId(id.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_app_id(id: &str) -> bool {
    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() < 2 {
        return false;
    }
    segments.iter().all(|segment| valid_segment(segment))
}

fn valid_segment(segment: &str) -> bool {
    let Some(first) = segment.chars().next() else {
        return false;
    };
    if first.is_ascii_digit() {
        return false;
    }
    segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl std::ops::Deref for AppId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AppId> for String {
    fn from(val: AppId) -> Self {
        val.0
    }
}

impl Serialize for AppId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AppId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AppId::new(&s).map_err(serde::de::Error::custom)
    }
}
