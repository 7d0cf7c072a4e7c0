use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    app::{persist_preferences, refresh_items, refresh_traders, use_locale, ApiHandle},
    domain::{Bundles, ItemStore, Locale, Preferences, Text, Theme, TraderStore},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let preferences = use_context::<Signal<Preferences>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let bundles = use_context::<Arc<Bundles>>();
    let api = use_context::<ApiHandle>();
    let items = use_context::<Signal<ItemStore>>();
    let traders = use_context::<Signal<TraderStore>>();
    let locale = use_locale();
    let current_theme = preferences.with(|prefs| prefs.theme);

    let saved = bundles.text(locale, Text::SettingsSaved).to_string();
    let save_failed = bundles.text(locale, Text::SettingsSaveFailed).to_string();

    let apply = move |next: Preferences| {
        let mut preferences = preferences;
        preferences.set(next);
        if persist_preferences(&preferences) {
            push_toast(toasts, ToastKind::Success, saved.clone());
        } else {
            push_toast(toasts, ToastKind::Error, save_failed.clone());
        }
    };

    let on_locale = {
        let apply = apply.clone();
        move |evt: Event<FormData>| {
            if let Some(choice) = Locale::from_tag(&evt.value()) {
                let mut next = preferences();
                next.locale = Some(choice);
                apply(next);
            }
        }
    };

    let set_theme = move |choice: Theme| {
        let mut next = preferences();
        next.theme = choice;
        apply(next);
    };
    let on_dark = set_theme.clone();
    let on_light = set_theme;

    let items_loading = items.with(|st| st.is_loading());
    let traders_loading = traders.with(|st| st.is_loading());
    let refreshing = items_loading || traders_loading;

    let refreshing_text = bundles.text(locale, Text::RefreshStarted).to_string();
    let on_refresh = {
        let bundles = bundles.clone();
        move |_| {
            let api_items = api.clone();
            spawn(async move { refresh_items(api_items, items).await });
            let api_traders = api.clone();
            let bundles = bundles.clone();
            spawn(async move {
                refresh_traders(api_traders, traders, toasts, bundles, preferences).await
            });
            push_toast(toasts, ToastKind::Info, refreshing_text.clone());
        }
    };

    rsx! {
        div { class: "settings",
            section { class: "{theme::panel(current_theme)}",
                h2 { "{bundles.text(locale, Text::SettingsLanguage)}" }
                select {
                    class: "{theme::input(current_theme)}",
                    value: "{locale.code()}",
                    onchange: on_locale,
                    for choice in Locale::ALL {
                        option { key: "{choice.code()}", value: "{choice.code()}", selected: choice == locale, "{choice.name()}" }
                    }
                }
            }

            section { class: "{theme::panel(current_theme)}",
                h2 { "{bundles.text(locale, Text::SettingsTheme)}" }
                div { class: "button-row",
                    button {
                        class: "{theme::nav_button(current_theme, current_theme == Theme::Dark)}",
                        onclick: move |_| on_dark(Theme::Dark),
                        "{bundles.text(locale, Text::SettingsThemeDark)}"
                    }
                    button {
                        class: "{theme::nav_button(current_theme, current_theme == Theme::Light)}",
                        onclick: move |_| on_light(Theme::Light),
                        "{bundles.text(locale, Text::SettingsThemeLight)}"
                    }
                }
            }

            section { class: "{theme::panel(current_theme)}",
                button {
                    class: "{theme::btn_primary(current_theme)}",
                    disabled: refreshing,
                    onclick: on_refresh,
                    "{bundles.text(locale, Text::SettingsRefresh)}"
                }
            }
        }
    }
}
