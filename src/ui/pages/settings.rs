use dioxus::prelude::*;

use crate::{
    domain::{AppState, ProgressSettings},
    infra::arcdata::{CacheStatus, SourceReport},
    ui::components::notice::{push_notice, Notice, NoticeLevel},
    util::{
        persistence::save_progress_settings,
        version::{check_for_update, version_label, APP_REPO_URL},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let notices = use_context::<Signal<Vec<Notice>>>();
    let reports = use_context::<Signal<Vec<SourceReport>>>();

    let module_rows = state.with(|st| {
        st.modules_meta
            .iter()
            .map(|meta| {
                (
                    meta.name.clone(),
                    meta.max_level,
                    st.settings.workstation_level(&meta.name),
                )
            })
            .collect::<Vec<_>>()
    });
    let expedition_label = state.with(|st| {
        st.projects_meta
            .first()
            .map(|meta| meta.name.clone())
            .unwrap_or_else(|| "Expedition Phase".to_string())
    });
    let expedition_max = state.with(|st| st.expedition_max_stage());
    let expedition_phase = state.with(|st| st.settings.expedition_phase());
    let report_rows = reports();

    let on_check_updates = {
        let notices = notices.clone();
        move |_| {
            let notices = notices.clone();
            spawn(async move {
                match check_for_update().await {
                    Ok(info) => {
                        let level = if info.update_available() {
                            NoticeLevel::Warning
                        } else {
                            NoticeLevel::Success
                        };
                        push_notice(notices, level, info.to_string());
                    }
                    Err(err) => {
                        push_notice(
                            notices,
                            NoticeLevel::Error,
                            format!("Update check failed: {err}"),
                        );
                    }
                }
            });
        }
    };

    rsx! {
        section { class: "panel",
            h2 { "Hideout Modules" }
            if module_rows.is_empty() {
                p { class: "hint", "Module data has not loaded yet." }
            }
            for (name, max_level, level) in module_rows {
                StepperRow {
                    key: "{name}",
                    label: name.clone(),
                    max: max_level,
                    value: level,
                    onchange: {
                        let state = state.clone();
                        let notices = notices.clone();
                        move |new_level| {
                            let name = name.clone();
                            apply_progress_change(state.clone(), notices.clone(), move |settings| {
                                settings.set_workstation_level(&name, new_level);
                            });
                        }
                    },
                }
            }
        }

        section { class: "panel",
            h2 { "Expedition" }
            StepperRow {
                label: expedition_label,
                max: expedition_max,
                value: expedition_phase,
                onchange: {
                    let state = state.clone();
                    let notices = notices.clone();
                    move |new_phase| {
                        apply_progress_change(state.clone(), notices.clone(), move |settings| {
                            settings.set_expedition_phase(new_phase);
                        });
                    }
                },
            }
        }

        section { class: "panel",
            h2 { "Data Status" }
            if report_rows.is_empty() {
                p { class: "hint", "No data loaded yet." }
            } else {
                ul { class: "status-list",
                    for report in report_rows {
                        li { key: "{report.name}",
                            span { class: "{status_class(report.status)}", "{report.name}" }
                            span { class: "age", "fetched {report.age} ago" }
                        }
                    }
                }
            }
        }

        section { class: "panel",
            h2 { "About" }
            button { class: "panel-btn", onclick: on_check_updates, "Check for Updates" }
            p { class: "version-note", "{version_label()} · data from the community arcraiders-data repository" }
            p { class: "version-note",
                a { href: APP_REPO_URL, target: "_blank", rel: "noreferrer", "Source on GitHub" }
            }
        }
    }
}

/// Mutates the progress settings, swaps in a fresh index snapshot, and
/// persists. A failed save keeps the in-memory change and tells the user.
fn apply_progress_change(
    mut state: Signal<AppState>,
    notices: Signal<Vec<Notice>>,
    change: impl FnOnce(&mut ProgressSettings),
) {
    state.with_mut(|st| {
        change(&mut st.settings);
        st.rebuild();
    });

    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_progress_settings(&snapshot) {
        push_notice(
            notices,
            NoticeLevel::Error,
            format!("Failed to save progress: {err}"),
        );
    }
}

#[component]
fn StepperRow(label: String, max: u32, value: u32, onchange: EventHandler<u32>) -> Element {
    rsx! {
        div { class: "stepper-row",
            label {
                "{label}"
                span { class: "max-note", "/ {max}" }
            }
            input {
                class: "stepper-input",
                r#type: "number",
                min: "0",
                max: "{max}",
                value: "{value}",
                oninput: move |evt| {
                    let clamped = evt.value().trim().parse::<u32>().unwrap_or(0).min(max);
                    onchange.call(clamped);
                },
            }
        }
    }
}

fn status_class(status: CacheStatus) -> &'static str {
    match status {
        CacheStatus::Fresh => "status-fresh",
        CacheStatus::Cached => "status-cached",
        CacheStatus::Stale => "status-stale",
    }
}
