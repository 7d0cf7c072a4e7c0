pub mod items;
pub mod maps;
pub mod settings;
pub mod traders;

pub use items::ItemsPage;
pub use maps::MapsPage;
pub use settings::SettingsPage;
pub use traders::TradersPage;
