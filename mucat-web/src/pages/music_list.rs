use dioxus::prelude::*;
use mucat_common::{LanguageCode, MusicData, MusicRow};
use mucat_core::{AppState, CharacterFilter, FilterSelection, LoadOutcome, MusicLoader};

#[component]
pub fn MusicList() -> Element {
    let state: AppState = use_context();
    let loader: MusicLoader = use_context();

    let data = use_resource(move || {
        // Reading the language reloads the list when it changes
        let lang = state.language.get();
        let loader = loader.clone();
        async move {
            tracing::debug!("Loading music list for {}", lang);
            loader.load(&state).await
        }
    });
    let read = data.read();

    let result: Result<Vec<MusicData>, String> = match &*read {
        Some(LoadOutcome::Loaded(musics)) => Ok(musics.clone()),
        Some(LoadOutcome::Failed(e)) => Err(e.to_string()),
        None => {
            return rsx! {
                div { class: "status", "Loading..." }
            };
        }
    };
    drop(read);

    let musics = match result {
        Ok(musics) => musics,
        Err(e) => {
            return rsx! {
                div { class: "status error", "Failed to load music list: {e}" }
            };
        }
    };

    if musics.is_empty() {
        return rsx! {
            div { class: "status", "No music yet." }
        };
    }

    let current_filter = state.character_filter.get();
    let visible: Vec<MusicData> = current_filter
        .apply(&musics)
        .into_iter()
        .cloned()
        .collect();
    let lang = state.language.get();

    rsx! {
        if !current_filter.is_empty() {
            div { class: "filter-bar",
                span { "{visible.len()} of {musics.len()}" }
                button {
                    class: "chip",
                    onclick: move |_| {
                        state.character_filter.update(CharacterFilter::clear);
                    },
                    "Clear filter"
                }
            }
        }
        ul { class: "music-list",
            for music in visible {
                MusicItem {
                    key: "{music.id}",
                    music: music.clone(),
                    lang: lang.clone(),
                    filter: current_filter.clone(),
                    on_toggle: move |selection: FilterSelection| {
                        state.character_filter.update(|f| f.toggle(selection));
                    },
                }
            }
        }
    }
}

#[component]
fn MusicItem(
    music: MusicData,
    lang: LanguageCode,
    filter: CharacterFilter,
    on_toggle: EventHandler<FilterSelection>,
) -> Element {
    let row = MusicRow::from(&music);
    let stream = row.stream_link().map(str::to_string);
    let video = row.video_link().map(str::to_string);

    rsx! {
        li { class: "music-item", lang: "{lang}",
            div { class: "title", "{row.music_name}" }
            div { class: "meta",
                "{row.announce_date}"
                if let Some(url) = stream {
                    " · "
                    a { href: "{url}", target: "_blank", "Listen" }
                }
                if let Some(url) = video {
                    " · "
                    a { href: "{url}", target: "_blank", "MV" }
                }
            }
            div {
                for group in music.groups.iter() {
                    {
                        let selection = FilterSelection::Group(group.id);
                        rsx! {
                            Chip {
                                key: "g{group.id}",
                                label: group.name.clone(),
                                color: group.color.clone(),
                                active: filter.contains(selection),
                                onclick: move |_| on_toggle.call(selection),
                            }
                        }
                    }
                }
                for artist in music.artists.iter() {
                    {
                        let selection = FilterSelection::Artist(artist.id);
                        rsx! {
                            Chip {
                                key: "a{artist.id}",
                                label: artist.name.clone(),
                                color: artist.color.clone(),
                                active: filter.contains(selection),
                                onclick: move |_| on_toggle.call(selection),
                            }
                        }
                    }
                }
                for album in music.albums.iter() {
                    span { key: "al{album.id}", class: "meta",
                        " {album.name}"
                        if let Some(date) = &album.release_date {
                            " ({date})"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Chip(
    label: String,
    color: Option<String>,
    active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let style = color
        .map(|c| format!("border-left: 4px solid {c};"))
        .unwrap_or_default();

    rsx! {
        button {
            class: if active { "chip active" } else { "chip" },
            style: "{style}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
