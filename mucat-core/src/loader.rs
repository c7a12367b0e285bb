//! Page data loader for the music list

use mucat_common::{LanguageCode, MusicData};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::ApiConfig;
use crate::context::AppState;

pub const MUSIC_ENDPOINT: &str = "/api/music";

/// First record of the window requested on page load (1-based, inclusive)
pub const WINDOW_START: u32 = 1;
/// Last record of the window requested on page load (inclusive)
pub const WINDOW_END: u32 = 100;

#[derive(Debug, Serialize)]
struct MusicQuery<'a> {
    start: u32,
    end: u32,
    lang: &'a str,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed music list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of a page load, keeping "no results" and "failed" apart.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<MusicData>),
    Failed(LoadError),
}

impl LoadOutcome {
    /// Loaded tracks, or an empty slice if the load failed
    pub fn musics(&self) -> &[MusicData] {
        match self {
            LoadOutcome::Loaded(musics) => musics,
            LoadOutcome::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Failed(e) => Some(e),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }

    /// Collapse into the `{ musics }` page data, empty on failure
    pub fn into_page_data(self) -> MusicPageData {
        match self {
            LoadOutcome::Loaded(musics) => MusicPageData { musics },
            LoadOutcome::Failed(_) => MusicPageData::default(),
        }
    }
}

/// Data handed to the music list page. Serializes as `{"musics": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MusicPageData {
    pub musics: Vec<MusicData>,
}

/// Fetches the music list for the page currently being rendered.
#[derive(Debug, Clone)]
pub struct MusicLoader {
    config: ApiConfig,
    http: reqwest::Client,
}

impl MusicLoader {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Fetch the fixed record window in `lang`.
    pub async fn fetch_musics(&self, lang: &LanguageCode) -> Result<Vec<MusicData>, LoadError> {
        let url = self.config.endpoint(MUSIC_ENDPOINT);
        debug!(
            "Requesting musics {}..={} (lang={}) from {}",
            WINDOW_START, WINDOW_END, lang, url
        );

        let resp = self
            .http
            .get(&url)
            .query(&MusicQuery {
                start: WINDOW_START,
                end: WINDOW_END,
                lang: lang.as_str(),
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let body = resp.bytes().await?;
        let musics: Vec<MusicData> = serde_json::from_slice(&body)?;
        Ok(musics)
    }

    /// Load the music list using the language currently held by `state`.
    ///
    /// Never fails; errors are logged and reported as [`LoadOutcome::Failed`].
    pub async fn load(&self, state: &AppState) -> LoadOutcome {
        let lang = state.language.peek();
        self.load_language(&lang).await
    }

    /// Load the music list in `lang`. Same error handling as [`Self::load`].
    pub async fn load_language(&self, lang: &LanguageCode) -> LoadOutcome {
        match self.fetch_musics(lang).await {
            Ok(musics) => {
                info!("Loaded {} musics (lang={})", musics.len(), lang);
                LoadOutcome::Loaded(musics)
            }
            Err(e) => {
                error!("Failed to load musics: {e}");
                LoadOutcome::Failed(e)
            }
        }
    }
}
