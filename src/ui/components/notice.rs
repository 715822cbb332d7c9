//! Transient status notices: data-load problems, save failures, and update
//! check results. Notices expire on their own; one sweep loop serves the
//! whole stack.

use std::time::{Duration, Instant};

use dioxus::prelude::*;

use crate::util::generate_id;

const NOTICE_LIFETIME: Duration = Duration::from_secs(6);
const SWEEP_INTERVAL: Duration = Duration::from_secs(1);
const MAX_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Warning => "notice-warning",
            NoticeLevel::Error => "notice-error",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub text: String,
    posted: Instant,
}

impl Notice {
    fn expired(&self) -> bool {
        self.posted.elapsed() >= NOTICE_LIFETIME
    }
}

/// Appends a notice, dropping the oldest ones past the stack cap.
pub fn push_notice(
    mut notices: Signal<Vec<Notice>>,
    level: NoticeLevel,
    text: impl Into<String>,
) {
    let notice = Notice {
        id: generate_id("notice"),
        level,
        text: text.into(),
        posted: Instant::now(),
    };
    notices.with_mut(|entries| {
        entries.push(notice);
        if entries.len() > MAX_NOTICES {
            let excess = entries.len() - MAX_NOTICES;
            entries.drain(..excess);
        }
    });
}

#[component]
pub fn NoticeStack() -> Element {
    let mut notices = use_context::<Signal<Vec<Notice>>>();

    let _sweep = use_future(move || async move {
        loop {
            tokio::time::sleep(SWEEP_INTERVAL).await;
            // Only touch the signal when something actually expired.
            let any_expired = notices.with(|entries| entries.iter().any(Notice::expired));
            if any_expired {
                notices.with_mut(|entries| entries.retain(|notice| !notice.expired()));
            }
        }
    });

    let entries = notices();
    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    let cards = entries.into_iter().map(|notice| {
        let class = format!("notice {}", notice.level.css_class());
        let dismiss_id = notice.id.clone();
        rsx! {
            li { key: "{notice.id}", class: "{class}",
                p { "{notice.text}" }
                button {
                    class: "notice-dismiss",
                    onclick: move |_| {
                        notices.with_mut(|entries| entries.retain(|entry| entry.id != dismiss_id));
                    },
                    "✕"
                }
            }
        }
    });

    rsx! {
        div { class: "notice-stack",
            ul { {cards} }
        }
    }
}
