use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::use_locale,
    domain::{Bundles, Preferences, Text, TraderStore},
    ui::{
        components::fetch_status::{placeholder, FetchStatus},
        theme,
    },
    util::assets::resolve_image,
};

#[component]
pub fn TradersPage() -> Element {
    let store = use_context::<Signal<TraderStore>>();
    let preferences = use_context::<Signal<Preferences>>();
    let bundles = use_context::<Arc<Bundles>>();
    let locale = use_locale();
    let theme = preferences.with(|prefs| prefs.theme);

    let (state, is_empty, traders) =
        store.with(|st| (st.state(), st.is_empty(), st.collection()));
    let (fetched_at, last_error) =
        store.with(|st| (st.fetched_at(), st.last_error().map(str::to_owned)));
    let currency_label = bundles.text(locale, Text::TradersCurrency);

    let status = placeholder(
        state,
        is_empty,
        bundles.text(locale, Text::TradersLoading),
        bundles.text(locale, Text::TradersFailed),
    );

    let cards = traders
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|trader| {
            (
                trader.normalized_name.clone(),
                trader.name.clone(),
                resolve_image(&trader.image_4x_link).into_owned(),
                format!("{} ({})", trader.currency.name, trader.currency.short_name),
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        section { class: "{theme::panel(theme)}",
            FetchStatus { fetched_at: fetched_at, last_error: last_error, theme: theme }
            if let Some(text) = status {
                p { class: "{theme::text_muted(theme)}", "{text}" }
            } else {
                div { class: "trader-grid",
                    for (slug, name, image, currency) in cards {
                        article { key: "{slug}", class: "trader-card {theme::panel(theme)}",
                            img { src: "{image}", alt: "{name}" }
                            h3 { "{name}" }
                            p { class: "{theme::text_muted(theme)}", "{currency_label}: {currency}" }
                        }
                    }
                }
            }
        }
    }
}
