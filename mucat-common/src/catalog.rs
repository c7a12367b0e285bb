//! Catalog entities with per-language names

use serde::{Deserialize, Serialize};

use crate::LanguageCode;

/// Names of a catalog entity in each supported language.
///
/// Flattened into the owning record, so the wire shape is
/// `{"id": 1, "name_ko": "...", "name_ja": "...", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedNames {
    #[serde(default)]
    pub name_ko: Option<String>,
    #[serde(default)]
    pub name_ja: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_zh: Option<String>,
}

impl LocalizedNames {
    /// Name for `lang`, if the catalog has one. Empty names count as missing.
    pub fn get(&self, lang: &LanguageCode) -> Option<&str> {
        let name = match lang.as_str() {
            LanguageCode::KOREAN => self.name_ko.as_deref(),
            LanguageCode::JAPANESE => self.name_ja.as_deref(),
            LanguageCode::ENGLISH => self.name_en.as_deref(),
            LanguageCode::CHINESE => self.name_zh.as_deref(),
            _ => None,
        };
        name.filter(|n| !n.is_empty())
    }

    /// Name for `lang`, falling back to ko, en, ja, zh in that order.
    pub fn display_name(&self, lang: &LanguageCode) -> Option<&str> {
        self.get(lang).or_else(|| {
            [&self.name_ko, &self.name_en, &self.name_ja, &self.name_zh]
                .into_iter()
                .find_map(|n| n.as_deref().filter(|n| !n.is_empty()))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistData {
    pub id: i64,
    #[serde(flatten)]
    pub names: LocalizedNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupData {
    pub id: i64,
    #[serde(flatten)]
    pub names: LocalizedNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumData {
    pub id: i64,
    #[serde(flatten)]
    pub names: LocalizedNames,
}
