use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{error, warn};

use crate::{
    config::AppConfig,
    domain::{
        negotiate_locale, system_language, Bundles, ItemStore, Locale, MapStore, Preferences,
        StateHolder, Text, TraderStore,
    },
    infra::{maps::all_maps, tarkov::TarkovClient},
    pipeline::{fetch_items, fetch_maps, fetch_traders},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{ItemsPage, MapsPage, SettingsPage, TradersPage},
        shell::Shell,
        theme,
    },
    util::{
        assets,
        persistence::{load_preferences, save_preferences},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/items")]
    Items {},
    #[route("/traders")]
    Traders {},
    #[route("/maps")]
    Maps {},
    #[route("/settings")]
    Settings {},
}

/// API client shared through context. `None` when the configured endpoint
/// could not be turned into a client.
#[derive(Clone)]
pub struct ApiHandle(pub Option<Arc<TarkovClient>>);

impl<T: 'static> StateHolder<T> for Signal<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        self.with_mut(f)
    }
}

#[component]
pub fn App() -> Element {
    let preferences = use_signal(|| load_preferences().unwrap_or_default());
    use_context_provider(|| preferences);

    let bundles = use_hook(|| Arc::new(Bundles::embedded()));
    use_context_provider(|| bundles.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let config = use_context::<AppConfig>();
    let api = use_hook(|| ApiHandle(build_client(&config)));
    use_context_provider(|| api.clone());

    let items = use_signal(ItemStore::new);
    use_context_provider(|| items);
    let traders = use_signal(TraderStore::new);
    use_context_provider(|| traders);
    let maps = use_signal(|| MapStore::new(all_maps()));
    use_context_provider(|| maps);

    let _items = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { refresh_items(api, items).await }
        }
    });

    let _traders = use_resource({
        let api = api.clone();
        let bundles = bundles.clone();
        move || {
            let api = api.clone();
            let bundles = bundles.clone();
            async move { refresh_traders(api, traders, toasts, bundles, preferences).await }
        }
    });

    let _maps = use_resource(move || async move { fetch_maps(maps).await });

    let root_class = theme::root(preferences().theme);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        div { class: "{root_class}",
            Router::<Route> {}
            Toast {}
        }
    }
}

fn build_client(config: &AppConfig) -> Option<Arc<TarkovClient>> {
    match TarkovClient::with_endpoint(&config.api_url) {
        Ok(client) => Some(Arc::new(client)),
        Err(err) => {
            error!("failed to initialise tarkov.dev client: {err}");
            None
        }
    }
}

pub async fn refresh_items(api: ApiHandle, mut items: Signal<ItemStore>) {
    match api.0 {
        Some(client) => fetch_items(client.as_ref(), items).await,
        None => items.with_mut(|st| {
            let ticket = st.begin_fetch();
            st.fail_fetch(ticket, "API client unavailable");
        }),
    }
}

/// Trader failures are surfaced as a toast in the language active when the
/// fetch settles.
pub async fn refresh_traders(
    api: ApiHandle,
    mut traders: Signal<TraderStore>,
    toasts: Signal<Vec<ToastMessage>>,
    bundles: Arc<Bundles>,
    preferences: Signal<Preferences>,
) {
    let Some(client) = api.0 else {
        traders.with_mut(|st| {
            let ticket = st.begin_fetch();
            st.fail_fetch(ticket, "API client unavailable");
        });
        let text = bundles.text(peek_locale(preferences), Text::ApiUnavailable);
        push_toast(toasts, ToastKind::Error, text);
        return;
    };

    if let Err(err) = fetch_traders(client.as_ref(), traders).await {
        let text = bundles.text(peek_locale(preferences), Text::TradersFailed);
        push_toast(toasts, ToastKind::Error, format!("{text} ({err})"));
    }
}

/// Language in effect: explicit preference, then system language, then English.
pub fn use_locale() -> Locale {
    let preferences = use_context::<Signal<Preferences>>();
    let stored = preferences.with(|prefs| prefs.locale);
    negotiate_locale(stored, system_language().as_deref())
}

/// Same resolution as [`use_locale`], read without subscribing the caller.
fn peek_locale(preferences: Signal<Preferences>) -> Locale {
    let stored = preferences.peek().locale;
    negotiate_locale(stored, system_language().as_deref())
}

pub fn persist_preferences(preferences: &Signal<Preferences>) -> bool {
    let snapshot = preferences.with(|prefs| prefs.clone());
    match save_preferences(&snapshot) {
        Ok(()) => true,
        Err(err) => {
            warn!("failed to persist preferences: {err}");
            false
        }
    }
}

#[component]
pub fn Items() -> Element {
    rsx! { Shell { ItemsPage {} } }
}

#[component]
pub fn Traders() -> Element {
    rsx! { Shell { TradersPage {} } }
}

#[component]
pub fn Maps() -> Element {
    rsx! { Shell { MapsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
