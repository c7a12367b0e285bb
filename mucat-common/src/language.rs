use std::fmt;

use serde::{Deserialize, Serialize};

/// UI language code sent to the catalog API (`lang=` query parameter).
///
/// Any string is accepted; the API decides what it understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub const KOREAN: &'static str = "ko";
    pub const JAPANESE: &'static str = "ja";
    pub const ENGLISH: &'static str = "en";
    pub const CHINESE: &'static str = "zh";

    /// Languages the catalog carries localized names for, in selector order.
    pub const CATALOG: [&'static str; 4] =
        [Self::KOREAN, Self::JAPANESE, Self::ENGLISH, Self::CHINESE];

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::new(Self::KOREAN)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
