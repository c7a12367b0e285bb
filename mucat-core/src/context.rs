use mucat_common::LanguageCode;

use crate::preferences::{CharacterFilter, Theme};
use crate::state::StateCell;

/// UI state shared by the page components.
///
/// Created once by the host inside its root scope (see
/// `use_context_provider`) and handed to whatever needs it. Copies share the
/// same cells.
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    /// Language used for names and for the `lang` request parameter
    pub language: StateCell<LanguageCode>,
    pub theme: StateCell<Theme>,
    /// Artist/group selection narrowing the music list
    pub character_filter: StateCell<CharacterFilter>,
}

impl AppState {
    pub fn new(language: LanguageCode, theme: Theme) -> Self {
        Self {
            language: StateCell::new(language),
            theme: StateCell::new(theme),
            character_filter: StateCell::new(CharacterFilter::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LanguageCode::default(), Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::FilterSelection;
    use crate::test_helpers::in_scope;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_defaults() {
        in_scope(|| {
            let state = AppState::default();

            assert_eq!(state.language.peek().as_str(), "ko");
            assert_eq!(state.theme.peek().as_str(), "light");
            assert!(state.character_filter.peek().is_empty());
        });
    }

    #[test]
    fn test_cells_are_independent() {
        in_scope(|| {
            let state = AppState::default();
            let language_changes = Rc::new(Cell::new(0));
            let handle = language_changes.clone();
            state
                .language
                .subscribe(move |_| handle.set(handle.get() + 1));

            state.theme.set(Theme::Dark);
            state
                .character_filter
                .update(|f| f.toggle(FilterSelection::Artist(1)));

            assert_eq!(language_changes.get(), 0);
            assert_eq!(state.language.peek(), LanguageCode::default());
            assert_eq!(state.theme.peek(), Theme::Dark);
        });
    }

    #[test]
    fn test_copies_share_cells() {
        in_scope(|| {
            let state = AppState::default();
            let view = state;

            view.language.set("ja".into());

            assert_eq!(state.language.peek().as_str(), "ja");
        });
    }
}
