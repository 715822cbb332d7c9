use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    infra::arcdata::{ArcDataClient, SourceReport},
    ui::{
        components::notice::{push_notice, Notice, NoticeLevel, NoticeStack},
        pages::{SearchPage, SettingsPage},
        shell::Shell,
    },
    util::{assets, persistence::load_progress_settings},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Search {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_progress_settings() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let notices = use_signal(Vec::<Notice>::new);
    use_context_provider(|| notices.clone());

    // Per-file provenance of the last data load, shown on the settings page.
    let reports = use_signal(Vec::<SourceReport>::new);
    use_context_provider(|| reports.clone());

    let _game_data = use_resource({
        let state = state.clone();
        let notices = notices.clone();
        let reports = reports.clone();
        move || async move { load_game_data(state.clone(), notices.clone(), reports.clone()).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        NoticeStack {}
    }
}

/// One startup pass: fetch (or reuse cached) game data, then derive the
/// first index snapshot. The records stay in memory afterwards so settings
/// edits rebuild without touching the network.
async fn load_game_data(
    mut state: Signal<AppState>,
    notices: Signal<Vec<Notice>>,
    mut reports: Signal<Vec<SourceReport>>,
) -> bool {
    let client = match ArcDataClient::new() {
        Ok(client) => client,
        Err(err) => {
            push_notice(
                notices.clone(),
                NoticeLevel::Error,
                format!("Failed to initialise data client: {err}"),
            );
            return false;
        }
    };

    match client.load_game_data().await {
        Ok(data) => {
            if data.any_stale() {
                push_notice(
                    notices.clone(),
                    NoticeLevel::Warning,
                    "Some game data came from a stale cache; requirements may be outdated.",
                );
            }
            reports.set(data.reports);
            state.with_mut(|st| st.install_data(data.modules, data.projects));
            true
        }
        Err(err) => {
            push_notice(
                notices.clone(),
                NoticeLevel::Error,
                format!("Failed to load game data: {err}"),
            );
            false
        }
    }
}

#[component]
pub fn Search() -> Element {
    rsx! { Shell { SearchPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
