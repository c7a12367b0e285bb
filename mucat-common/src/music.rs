//! Music tracks and the row projections used for list rendering

use serde::{Deserialize, Serialize};

/// Artist as listed on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRow {
    pub id: i64,
    pub name: String,
    /// CSS color used for the artist chip
    #[serde(default)]
    pub color: Option<String>,
}

/// Group as listed on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Album as listed on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// A track with its denormalized groups, artists and albums.
///
/// Dates are kept as the strings the API sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicData {
    pub id: i64,
    pub music_name: String,
    #[serde(default)]
    pub groups: Vec<GroupRow>,
    #[serde(default)]
    pub artists: Vec<ArtistRow>,
    #[serde(default)]
    pub albums: Vec<AlbumRow>,
    #[serde(default)]
    pub announce_date: String,
    #[serde(default)]
    pub lyrics: String,
    #[serde(default)]
    pub stream_url: Option<String>,
    #[serde(default)]
    pub mv_url: Option<String>,
}

impl MusicData {
    /// Stream URL, if one is set and non-empty
    pub fn stream_link(&self) -> Option<&str> {
        non_empty(&self.stream_url)
    }

    /// Music video URL, if one is set and non-empty
    pub fn video_link(&self) -> Option<&str> {
        non_empty(&self.mv_url)
    }
}

/// Flattened track for list views, without the associations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicRow {
    pub id: i64,
    pub music_name: String,
    #[serde(default)]
    pub announce_date: String,
    #[serde(default)]
    pub lyrics: String,
    #[serde(default)]
    pub stream_url: Option<String>,
    #[serde(default)]
    pub mv_url: Option<String>,
}

impl MusicRow {
    pub fn stream_link(&self) -> Option<&str> {
        non_empty(&self.stream_url)
    }

    pub fn video_link(&self) -> Option<&str> {
        non_empty(&self.mv_url)
    }
}

impl From<&MusicData> for MusicRow {
    fn from(music: &MusicData) -> Self {
        Self {
            id: music.id,
            music_name: music.music_name.clone(),
            announce_date: music.announce_date.clone(),
            lyrics: music.lyrics.clone(),
            stream_url: music.stream_url.clone(),
            mv_url: music.mv_url.clone(),
        }
    }
}

fn non_empty(url: &Option<String>) -> Option<&str> {
    url.as_deref().filter(|u| !u.is_empty())
}
