//! Supported UI languages and their message bundles.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::util::assets;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Matches on the primary subtag, so `es-ES`, `es_ES.UTF-8` and `ES` all
    /// resolve to Spanish.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(|c| c == '-' || c == '_' || c == '.' || c == '@')
            .next()?
            .trim()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|locale| locale.code() == primary)
    }
}

/// Picks the stored preference, then the system language, then English.
pub fn negotiate_locale(stored: Option<Locale>, system_tag: Option<&str>) -> Locale {
    stored
        .or_else(|| system_tag.and_then(Locale::from_tag))
        .unwrap_or_default()
}

/// First non-empty language tag from the usual POSIX locale variables.
pub fn system_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Text {
    AppTitle,
    NavItems,
    NavTraders,
    NavMaps,
    NavSettings,
    ItemsLoading,
    ItemsFailed,
    ItemsSearch,
    ItemsBestOffer,
    ItemsNoOffers,
    ItemsFleaLevel,
    TradersLoading,
    TradersFailed,
    TradersCurrency,
    MapsTitle,
    SettingsLanguage,
    SettingsTheme,
    SettingsThemeDark,
    SettingsThemeLight,
    SettingsRefresh,
    SettingsSaved,
    SettingsSaveFailed,
    RefreshStarted,
    ApiUnavailable,
    StatusUpdated,
    StatusLastError,
}

impl Text {
    pub const ALL: [Text; 26] = [
        Text::AppTitle,
        Text::NavItems,
        Text::NavTraders,
        Text::NavMaps,
        Text::NavSettings,
        Text::ItemsLoading,
        Text::ItemsFailed,
        Text::ItemsSearch,
        Text::ItemsBestOffer,
        Text::ItemsNoOffers,
        Text::ItemsFleaLevel,
        Text::TradersLoading,
        Text::TradersFailed,
        Text::TradersCurrency,
        Text::MapsTitle,
        Text::SettingsLanguage,
        Text::SettingsTheme,
        Text::SettingsThemeDark,
        Text::SettingsThemeLight,
        Text::SettingsRefresh,
        Text::SettingsSaved,
        Text::SettingsSaveFailed,
        Text::RefreshStarted,
        Text::ApiUnavailable,
        Text::StatusUpdated,
        Text::StatusLastError,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Text::AppTitle => "app.title",
            Text::NavItems => "nav.items",
            Text::NavTraders => "nav.traders",
            Text::NavMaps => "nav.maps",
            Text::NavSettings => "nav.settings",
            Text::ItemsLoading => "items.loading",
            Text::ItemsFailed => "items.failed",
            Text::ItemsSearch => "items.search",
            Text::ItemsBestOffer => "items.best_offer",
            Text::ItemsNoOffers => "items.no_offers",
            Text::ItemsFleaLevel => "items.flea_level",
            Text::TradersLoading => "traders.loading",
            Text::TradersFailed => "traders.failed",
            Text::TradersCurrency => "traders.currency",
            Text::MapsTitle => "maps.title",
            Text::SettingsLanguage => "settings.language",
            Text::SettingsTheme => "settings.theme",
            Text::SettingsThemeDark => "settings.theme_dark",
            Text::SettingsThemeLight => "settings.theme_light",
            Text::SettingsRefresh => "settings.refresh",
            Text::SettingsSaved => "settings.saved",
            Text::SettingsSaveFailed => "settings.save_failed",
            Text::RefreshStarted => "toast.refreshing",
            Text::ApiUnavailable => "toast.api_unavailable",
            Text::StatusUpdated => "status.updated",
            Text::StatusLastError => "status.last_error",
        }
    }
}

type Bundle = HashMap<String, String>;

#[derive(Clone, Debug, Default)]
pub struct Bundles {
    bundles: HashMap<Locale, Bundle>,
}

impl Bundles {
    /// Loads every bundle compiled into the binary. Unparseable bundles are
    /// skipped so lookups fall back to English.
    pub fn embedded() -> Self {
        Self::from_sources(
            Locale::ALL
                .into_iter()
                .filter_map(|locale| assets::locale_bundle(locale.code()).map(|raw| (locale, raw))),
        )
    }

    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (Locale, &'a str)>) -> Self {
        let mut bundles = HashMap::new();
        for (locale, raw) in sources {
            match serde_json::from_str::<Bundle>(raw) {
                Ok(bundle) => {
                    bundles.insert(locale, bundle);
                }
                Err(err) => warn!(locale = locale.code(), "skipping malformed locale bundle: {err}"),
            }
        }
        Self { bundles }
    }

    pub fn text<'a>(&'a self, locale: Locale, text: Text) -> &'a str {
        let key = text.key();
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::En, key))
            .unwrap_or(key)
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.bundles
            .get(&locale)
            .and_then(|bundle| bundle.get(key))
            .map(String::as_str)
    }
}
