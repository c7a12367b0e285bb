//! mucat-core - UI state and page data loading for the music catalog
//!
//! Holds the reactive state cells shared by the view components and the
//! loader that fetches the music list from the catalog API.

pub mod config;
pub mod context;
pub mod loader;
pub mod preferences;
pub mod state;

#[cfg(test)]
mod test_helpers;

pub use config::ApiConfig;
pub use context::AppState;
pub use loader::{LoadError, LoadOutcome, MusicLoader, MusicPageData};
pub use preferences::{CharacterFilter, FilterSelection, Theme};
pub use state::{StateCell, SubscriptionId};
