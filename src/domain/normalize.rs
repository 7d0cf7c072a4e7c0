//! Pure post-processing applied to every fetched collection before it is cached.

use std::collections::HashSet;

use super::entities::{
    Item, SellOffer, Trader, BTR_DRIVER, FLEA_MARKET, FLEA_MARKET_IMAGE, REFERENCE_VENDOR,
};

pub fn normalize_items(items: Vec<Item>) -> Vec<Item> {
    items
        .into_iter()
        .map(|item| Item {
            sell_for: normalize_sell_offers(item.sell_for),
            ..item
        })
        .collect()
}

/// Drops reference offers, keeps the best offer per vendor and orders the rest
/// by rouble price, highest first. Ties keep their incoming order.
pub fn normalize_sell_offers(offers: Vec<SellOffer>) -> Vec<SellOffer> {
    let mut offers: Vec<SellOffer> = offers
        .into_iter()
        .filter(|offer| offer.vendor.normalized_name != REFERENCE_VENDOR)
        .collect();
    offers.sort_by(|a, b| b.price_rub.cmp(&a.price_rub));

    let mut seen = HashSet::new();
    offers.retain(|offer| seen.insert(offer.vendor.normalized_name.clone()));
    offers
}

pub fn relabel_traders(traders: Vec<Trader>) -> Vec<Trader> {
    traders.into_iter().map(relabel_trader).collect()
}

pub fn relabel_trader(trader: Trader) -> Trader {
    if trader.normalized_name != BTR_DRIVER {
        return trader;
    }

    Trader {
        normalized_name: FLEA_MARKET.to_string(),
        image_4x_link: FLEA_MARKET_IMAGE.to_string(),
        ..trader
    }
}
