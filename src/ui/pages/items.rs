use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::use_locale,
    domain::{Bundles, Item, ItemStore, Preferences, Text, Theme},
    ui::{
        components::fetch_status::{placeholder, FetchStatus},
        theme,
    },
    util::format::format_currency,
};

/// Rendering thousands of cards at once stalls the webview.
const MAX_VISIBLE: usize = 120;

#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub image: String,
    pub best_offer: Option<(String, String)>,
    pub min_level_for_flea: Option<i32>,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            short_name: item.short_name.clone(),
            image: item.grid_image_link.clone(),
            best_offer: item.best_offer().map(|offer| {
                (
                    offer.vendor.name.clone(),
                    format!("{} ₽", format_currency(offer.price_rub as f64)),
                )
            }),
            min_level_for_flea: item.min_level_for_flea,
        }
    }
}

/// Case-insensitive match on name or short name, capped at `limit` rows.
pub fn filter_items(items: &[Item], query: &str, limit: usize) -> Vec<ItemRow> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.short_name.to_lowercase().contains(&needle)
        })
        .take(limit)
        .map(ItemRow::from)
        .collect()
}

#[component]
pub fn ItemsPage() -> Element {
    let store = use_context::<Signal<ItemStore>>();
    let preferences = use_context::<Signal<Preferences>>();
    let bundles = use_context::<Arc<Bundles>>();
    let locale = use_locale();
    let theme = preferences.with(|prefs| prefs.theme);
    let mut query = use_signal(String::new);

    let (state, is_empty, items) = store.with(|st| (st.state(), st.is_empty(), st.collection()));
    let (fetched_at, last_error) =
        store.with(|st| (st.fetched_at(), st.last_error().map(str::to_owned)));
    let rows = items
        .as_deref()
        .map(|items| filter_items(items, &query(), MAX_VISIBLE))
        .unwrap_or_default();

    let status = placeholder(
        state,
        is_empty,
        bundles.text(locale, Text::ItemsLoading),
        bundles.text(locale, Text::ItemsFailed),
    );
    let search_hint = bundles.text(locale, Text::ItemsSearch).to_string();
    let best_label = bundles.text(locale, Text::ItemsBestOffer).to_string();
    let no_offers = bundles.text(locale, Text::ItemsNoOffers).to_string();
    let flea_label = bundles.text(locale, Text::ItemsFleaLevel).to_string();

    rsx! {
        section { class: "{theme::panel(theme)}",
            input {
                class: "{theme::input(theme)}",
                placeholder: "{search_hint}",
                value: query(),
                oninput: move |evt| query.set(evt.value()),
            }
            FetchStatus { fetched_at: fetched_at, last_error: last_error, theme: theme }
            if let Some(text) = status {
                p { class: "{theme::text_muted(theme)}", "{text}" }
            } else {
                div { class: "item-grid",
                    for row in rows {
                        ItemCard {
                            key: "{row.id}",
                            row: row.clone(),
                            best_label: best_label.clone(),
                            no_offers: no_offers.clone(),
                            flea_label: flea_label.clone(),
                            theme: theme,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ItemCard(
    row: ItemRow,
    best_label: String,
    no_offers: String,
    flea_label: String,
    theme: Theme,
) -> Element {
    rsx! {
        article { class: "item-card {theme::panel(theme)}",
            img { src: "{row.image}", alt: "{row.short_name}" }
            div {
                h3 { "{row.name}" }
                p { class: "{theme::text_muted(theme)}", "{row.short_name}" }
                if let Some((vendor, price)) = row.best_offer.clone() {
                    p { "{best_label}: " span { class: "price", "{price}" } " · {vendor}" }
                } else {
                    p { class: "{theme::text_muted(theme)}", "{no_offers}" }
                }
                if let Some(level) = row.min_level_for_flea {
                    p { class: "{theme::text_muted(theme)}", "{flea_label}: {level}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SellOffer, Vendor};

    fn item(name: &str, short_name: &str, offers: Vec<(&str, i64)>) -> Item {
        Item {
            id: short_name.to_lowercase(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            normalized_name: name.to_lowercase().replace(' ', "-"),
            description: None,
            base_price: 0,
            weight: 0.0,
            height: 1,
            image_8x_link: String::new(),
            inspect_image_link: String::new(),
            grid_image_link: format!("https://assets.tarkov.dev/{short_name}.webp"),
            avg_24h_price: None,
            link: String::new(),
            wiki_link: String::new(),
            min_level_for_flea: None,
            sell_for: offers
                .into_iter()
                .map(|(vendor, price_rub)| SellOffer {
                    price: price_rub,
                    currency: "RUB".to_string(),
                    price_rub,
                    vendor: Vendor {
                        name: vendor.to_string(),
                        normalized_name: vendor.to_lowercase(),
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn filter_matches_name_or_short_name() {
        let items = vec![
            item("Graphics card", "GPU", vec![]),
            item("Bitcoin", "0.2BTC", vec![]),
            item("LEDX Skin Transilluminator", "LEDX", vec![]),
        ];

        let by_short = filter_items(&items, "gpu", 10);
        assert_eq!(by_short.len(), 1);
        assert_eq!(by_short[0].name, "Graphics card");

        let by_name = filter_items(&items, "  transillum ", 10);
        assert_eq!(by_name[0].short_name, "LEDX");

        assert_eq!(filter_items(&items, "", 2).len(), 2);
    }

    #[test]
    fn row_shows_best_offer_in_roubles() {
        let row = ItemRow::from(&item("Graphics card", "GPU", vec![("Therapist", 265_000)]));
        assert_eq!(
            row.best_offer,
            Some(("Therapist".to_string(), "265 000,00 ₽".to_string()))
        );
    }
}
