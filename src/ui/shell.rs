use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let data_ready = state.with(|st| st.data_ready);
    let subtitle = if data_ready {
        format!("{} · is it safe to recycle?", version_label())
    } else {
        format!("{} · loading game data…", version_label())
    };

    rsx! {
        header { class: "app-header",
            div { class: "app-title",
                h1 { "{APP_NAME}" }
                p { "{subtitle}" }
            }
            nav { class: "app-nav",
                NavButton {
                    active: matches!(current_route, Route::Search {}),
                    onclick: move |_| { nav.push(Route::Search {}); },
                    label: "🔍 Search",
                }
                NavButton {
                    active: matches!(current_route, Route::Settings {}),
                    onclick: move |_| { nav.push(Route::Settings {}); },
                    label: "⚙️ Progress",
                }
            }
        }
        main { class: "app-main",
            {children}
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-btn active" } else { "nav-btn" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
