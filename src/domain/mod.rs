//! Tarkov reference data, its normalization and the caches that hold it.

pub mod entities;
pub mod locale;
pub mod normalize;
pub mod preferences;
pub mod store;

pub use entities::{Currency, GameMap, Item, SellOffer, Trader, Vendor};
pub use locale::{negotiate_locale, system_language, Bundles, Locale, Text};
pub use normalize::{normalize_items, relabel_traders};
pub use preferences::{Preferences, Theme};
pub use store::{CollectionState, ItemStore, MapStore, StateHolder, TraderStore};
