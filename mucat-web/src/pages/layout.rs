use crate::theme::apply_theme;
use crate::Route;
use dioxus::prelude::*;
use mucat_common::LanguageCode;
use mucat_core::{AppState, Theme};

#[component]
pub fn AppLayout() -> Element {
    let state: AppState = use_context();

    use_effect(move || apply_theme(state.theme.get()));

    let current_language = state.language.get();
    let theme_label = match state.theme.get() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    rsx! {
        header { class: "app-header",
            h1 { "Music" }
            select {
                value: "{current_language}",
                onchange: move |evt: Event<FormData>| {
                    state.language.set(LanguageCode::new(evt.value()));
                },
                for code in LanguageCode::CATALOG {
                    option {
                        key: "{code}",
                        value: code,
                        selected: current_language.as_str() == code,
                        "{code}"
                    }
                }
            }
            button {
                onclick: move |_| {
                    state.theme.update(|t| *t = t.toggled());
                },
                "{theme_label}"
            }
        }
        main { Outlet::<Route> {} }
    }
}
