use std::{sync::Arc, time::SystemTime};

use dioxus::prelude::*;

use crate::{
    app::use_locale,
    domain::{Bundles, CollectionState, Text, Theme},
    ui::theme,
    util::format::humanize_age,
};

/// Text to show instead of the collection, if any. A refresh over existing
/// data keeps the data on screen; an empty collection reads as a failure.
pub fn placeholder<'a>(
    state: CollectionState,
    is_empty: bool,
    loading: &'a str,
    failed: &'a str,
) -> Option<&'a str> {
    match state {
        CollectionState::Failed => Some(failed),
        CollectionState::Loading if is_empty => Some(loading),
        CollectionState::Loading | CollectionState::Ready => None,
    }
}

/// Freshness line under a fetched collection: when it last succeeded and,
/// if the latest refresh failed, why.
#[component]
pub fn FetchStatus(
    fetched_at: Option<SystemTime>,
    last_error: Option<String>,
    theme: Theme,
) -> Element {
    let bundles = use_context::<Arc<Bundles>>();
    let locale = use_locale();

    let updated = fetched_at.map(|at| {
        bundles
            .text(locale, Text::StatusUpdated)
            .replace("{age}", &humanize_age(at))
    });
    let failed_label = bundles.text(locale, Text::StatusLastError);

    rsx! {
        div { class: "fetch-status",
            if let Some(updated) = updated {
                span { class: "{theme::text_muted(theme)}", "{updated}" }
            }
            if let Some(reason) = last_error {
                span { class: "fetch-error", "{failed_label}: {reason}" }
            }
        }
    }
}
