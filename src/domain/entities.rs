use serde::{Deserialize, Serialize};

pub type ItemId = String;

/// Vendor whose offers are the flea market's internal reference prices.
pub const REFERENCE_VENDOR: &str = "ref";

/// Trader slug the API uses for the BTR driver, shown as the flea market.
pub const BTR_DRIVER: &str = "btr-driver";
pub const FLEA_MARKET: &str = "flea-market";

/// Local asset substituted for the flea market trader portrait.
pub const FLEA_MARKET_IMAGE: &str = "/images/flea.svg";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub short_name: String,
    pub normalized_name: String,
    pub description: Option<String>,
    pub base_price: i64,
    pub weight: f64,
    pub height: i32,
    pub image_8x_link: String,
    pub inspect_image_link: String,
    pub grid_image_link: String,
    pub avg_24h_price: Option<i64>,
    pub link: String,
    pub wiki_link: String,
    pub min_level_for_flea: Option<i32>,
    pub sell_for: Vec<SellOffer>,
}

impl Item {
    /// Highest paying offer. Only meaningful once offers are normalized.
    pub fn best_offer(&self) -> Option<&SellOffer> {
        self.sell_for.first()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SellOffer {
    pub price: i64,
    pub currency: String,
    pub price_rub: i64,
    pub vendor: Vendor,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub normalized_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    pub name: String,
    pub normalized_name: String,
    pub image_link: String,
    pub image_4x_link: String,
    pub currency: Currency,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub normalized_name: String,
    pub short_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameMap {
    pub name: &'static str,
    pub short_name: &'static str,
    pub file_name: &'static str,
    pub file_thumbnail: &'static str,
    pub aspect_ratio: (u32, u32),
}
