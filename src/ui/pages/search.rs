use dioxus::prelude::*;

use crate::domain::{resolve, AppState};

/// The main lookup view: every keystroke resolves the query against the
/// current index snapshot and renders the preformatted result lines.
#[component]
pub fn SearchPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut query = use_signal(String::new);

    let data_ready = state.with(|st| st.data_ready);
    let lines = state.with(|st| resolve(&query(), &st.index));

    rsx! {
        input {
            class: "search-input",
            r#type: "text",
            placeholder: "Item name, e.g. metal parts",
            autofocus: true,
            value: query(),
            oninput: move |evt| query.set(evt.value()),
        }
        if !data_ready {
            p { class: "hint", "Fetching hideout and expedition data…" }
        } else if lines.is_empty() {
            p { class: "hint",
                "Type an item name to see which hideout upgrades and expedition phases still need it."
            }
        } else {
            ul { class: "result-list",
                for (idx, line) in lines.into_iter().enumerate() {
                    ResultLine { key: "{idx}", line }
                }
            }
        }
    }
}

#[component]
fn ResultLine(line: String) -> Element {
    if line.is_empty() {
        return rsx! { li { class: "result-spacer" } };
    }

    let class = if line.starts_with('❌') {
        "result-line result-header-needed"
    } else if line.starts_with('✅') {
        "result-line result-header-safe"
    } else {
        "result-line result-usage"
    };

    rsx! {
        li { class: "{class}", "{line}" }
    }
}
