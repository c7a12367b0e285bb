//! Values held by the UI state cells

use std::fmt;
use std::str::FromStr;

use mucat_common::MusicData;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// One entry of the character filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum FilterSelection {
    Artist(i64),
    Group(i64),
}

impl FilterSelection {
    pub fn matches(&self, music: &MusicData) -> bool {
        match *self {
            FilterSelection::Artist(id) => music.artists.iter().any(|a| a.id == id),
            FilterSelection::Group(id) => music.groups.iter().any(|g| g.id == id),
        }
    }
}

/// Ordered artist/group selection narrowing the music list.
///
/// An empty filter lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterFilter(Vec<FilterSelection>);

impl CharacterFilter {
    pub fn new(selections: Vec<FilterSelection>) -> Self {
        Self(selections)
    }

    pub fn selections(&self) -> &[FilterSelection] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, selection: FilterSelection) -> bool {
        self.0.contains(&selection)
    }

    /// Add `selection` at the end, or remove it if already present
    pub fn toggle(&mut self, selection: FilterSelection) {
        if let Some(pos) = self.0.iter().position(|s| *s == selection) {
            self.0.remove(pos);
        } else {
            self.0.push(selection);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// True if the filter is empty or any selection appears on the track
    pub fn matches(&self, music: &MusicData) -> bool {
        self.is_empty() || self.0.iter().any(|s| s.matches(music))
    }

    /// Tracks passing the filter, in their original order
    pub fn apply<'a>(&self, musics: &'a [MusicData]) -> Vec<&'a MusicData> {
        musics.iter().filter(|m| self.matches(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mucat_common::{ArtistRow, GroupRow};

    fn music(id: i64, artists: &[i64], groups: &[i64]) -> MusicData {
        MusicData {
            id,
            music_name: format!("track {id}"),
            groups: groups
                .iter()
                .map(|&id| GroupRow {
                    id,
                    name: format!("group {id}"),
                    color: None,
                })
                .collect(),
            artists: artists
                .iter()
                .map(|&id| ArtistRow {
                    id,
                    name: format!("artist {id}"),
                    color: None,
                })
                .collect(),
            albums: vec![],
            announce_date: String::new(),
            lyrics: String::new(),
            stream_url: None,
            mv_url: None,
        }
    }

    #[test]
    fn test_theme_defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::default().to_string(), "light");
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(UnknownTheme("sepia".to_string()))
        );
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = CharacterFilter::default();
        assert!(filter.matches(&music(1, &[], &[])));
    }

    #[test]
    fn test_filter_matches_artist_or_group() {
        let filter = CharacterFilter::new(vec![
            FilterSelection::Artist(10),
            FilterSelection::Group(20),
        ]);

        assert!(filter.matches(&music(1, &[10], &[])));
        assert!(filter.matches(&music(2, &[], &[20])));
        assert!(!filter.matches(&music(3, &[20], &[10])));
    }

    #[test]
    fn test_apply_preserves_order() {
        let musics = vec![
            music(1, &[10], &[]),
            music(2, &[11], &[]),
            music(3, &[10], &[]),
        ];
        let filter = CharacterFilter::new(vec![FilterSelection::Artist(10)]);

        let ids: Vec<i64> = filter.apply(&musics).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut filter = CharacterFilter::default();
        filter.toggle(FilterSelection::Artist(1));
        filter.toggle(FilterSelection::Group(2));
        filter.toggle(FilterSelection::Artist(3));
        filter.toggle(FilterSelection::Artist(1));

        assert_eq!(
            filter.selections(),
            &[FilterSelection::Group(2), FilterSelection::Artist(3)]
        );
    }

    #[test]
    fn test_selection_serializes_tagged() {
        let json = serde_json::to_string(&FilterSelection::Group(4)).unwrap();
        assert_eq!(json, r#"{"kind":"group","id":4}"#);
    }
}
