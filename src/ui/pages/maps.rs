use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::use_locale,
    domain::{Bundles, MapStore, Preferences, Text},
    ui::theme,
};

#[component]
pub fn MapsPage() -> Element {
    let store = use_context::<Signal<MapStore>>();
    let preferences = use_context::<Signal<Preferences>>();
    let bundles = use_context::<Arc<Bundles>>();
    let locale = use_locale();
    let theme = preferences.with(|prefs| prefs.theme);

    let maps = store.with(|st| st.maps());
    let title = bundles.text(locale, Text::MapsTitle);

    rsx! {
        section { class: "{theme::panel(theme)}",
            h2 { "{title}" }
            div { class: "map-grid",
                for map in maps.iter() {
                    article { key: "{map.short_name}", class: "map-card {theme::panel(theme)}",
                        h3 { "{map.name}" }
                        p { class: "{theme::text_muted(theme)}", "{map.file_name}" }
                    }
                }
            }
        }
    }
}
