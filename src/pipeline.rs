//! Fetch → normalize → cache triggers for the three data pipelines.

use tracing::{debug, error, info, warn};

use crate::{
    domain::{normalize_items, relabel_traders, ItemStore, MapStore, StateHolder, TraderStore},
    infra::{
        maps::all_maps,
        tarkov::{TarkovApi, TarkovClientError},
    },
};

/// Refreshes the item cache. Failures are logged and recorded on the store,
/// never returned: the previous collection stays in place.
pub async fn fetch_items<A, H>(api: &A, mut store: H)
where
    A: TarkovApi + ?Sized,
    H: StateHolder<ItemStore>,
{
    let ticket = store.update(|st| st.begin_fetch());

    let applied = match api.items().await {
        Ok(items) => {
            let items = normalize_items(items);
            info!(count = items.len(), "fetched items");
            store.update(|st| st.complete_fetch(ticket, items))
        }
        Err(err) => {
            error!("failed to fetch items: {err}");
            store.update(|st| st.fail_fetch(ticket, err.to_string()))
        }
    };

    if !applied {
        debug!("discarded superseded item fetch");
    }
}

/// Refreshes the trader cache, relabeling the BTR driver as the flea market.
/// The error is handed back to the caller after the store is updated.
pub async fn fetch_traders<A, H>(api: &A, mut store: H) -> Result<(), TarkovClientError>
where
    A: TarkovApi + ?Sized,
    H: StateHolder<TraderStore>,
{
    let ticket = store.update(|st| st.begin_fetch());

    match api.traders().await {
        Ok(traders) => {
            let traders = relabel_traders(traders);
            info!(count = traders.len(), "fetched traders");
            if !store.update(|st| st.complete_fetch(ticket, traders)) {
                debug!("discarded superseded trader fetch");
            }
            Ok(())
        }
        Err(err) => {
            warn!("failed to fetch traders: {err}");
            store.update(|st| st.fail_fetch(ticket, err.to_string()));
            Err(err)
        }
    }
}

/// Installs the bundled map catalog.
pub async fn fetch_maps<H>(mut store: H)
where
    H: StateHolder<MapStore>,
{
    let maps = all_maps();
    store.update(|st| st.replace(maps));
    debug!(count = maps.len(), "loaded map catalog");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FLEA_MARKET_IMAGE;
    use crate::domain::{Currency, Item, SellOffer, Trader, Vendor};
    use crate::infra::tarkov::MockTarkovApi;
    use tracing_test::traced_test;

    fn offer(vendor: &str, price_rub: i64) -> SellOffer {
        SellOffer {
            price: price_rub,
            currency: "RUB".to_string(),
            price_rub,
            vendor: Vendor {
                name: vendor.to_string(),
                normalized_name: vendor.to_string(),
            },
        }
    }

    fn salewa(sell_for: Vec<SellOffer>) -> Item {
        Item {
            id: "544fb45d4bdc2dee738b4568".to_string(),
            name: "Salewa first aid kit".to_string(),
            short_name: "Salewa".to_string(),
            normalized_name: "salewa-first-aid-kit".to_string(),
            description: Some("A first aid kit".to_string()),
            base_price: 21_000,
            weight: 0.6,
            height: 2,
            image_8x_link: String::new(),
            inspect_image_link: String::new(),
            grid_image_link: String::new(),
            avg_24h_price: None,
            link: "https://tarkov.dev/item/salewa-first-aid-kit".to_string(),
            wiki_link: String::new(),
            min_level_for_flea: Some(15),
            sell_for,
        }
    }

    fn trader(slug: &str) -> Trader {
        Trader {
            name: slug.to_string(),
            normalized_name: slug.to_string(),
            image_link: format!("{slug}.webp"),
            image_4x_link: format!("{slug}-4x.webp"),
            currency: Currency {
                name: "Roubles".to_string(),
                normalized_name: "roubles".to_string(),
                short_name: "RUB".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn item_fetch_drops_reference_vendor() {
        let mut api = MockTarkovApi::new();
        api.expect_items()
            .times(1)
            .returning(|| Ok(vec![salewa(vec![offer("ref", 500), offer("prapor", 300)])]));

        let mut store = ItemStore::new();
        fetch_items(&api, &mut store).await;

        let items = store.collection().expect("items cached");
        assert_eq!(items[0].sell_for, vec![offer("prapor", 300)]);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    #[traced_test]
    async fn failed_item_fetch_keeps_previous_collection() {
        let mut api = MockTarkovApi::new();
        let mut calls = 0;
        api.expect_items().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![salewa(vec![offer("therapist", 9000)])])
            } else {
                Err(TarkovClientError::Api("upstream unavailable".to_string()))
            }
        });

        let mut store = ItemStore::new();
        fetch_items(&api, &mut store).await;
        let before = store.collection().expect("first fetch succeeded");

        fetch_items(&api, &mut store).await;

        assert!(!store.is_loading());
        assert_eq!(store.collection().as_deref(), Some(&before[..]));
        assert_eq!(store.last_error(), Some("api error: upstream unavailable"));
        assert!(logs_contain("failed to fetch items"));
    }

    #[tokio::test]
    async fn failed_first_item_fetch_leaves_store_empty() {
        let mut api = MockTarkovApi::new();
        api.expect_items()
            .returning(|| Err(TarkovClientError::GraphQl("syntax".to_string())));

        let mut store = ItemStore::new();
        fetch_items(&api, &mut store).await;

        assert!(!store.is_loading());
        assert!(store.collection().is_none());
    }

    #[tokio::test]
    async fn repeated_item_fetches_are_identical() {
        let mut api = MockTarkovApi::new();
        api.expect_items().times(2).returning(|| {
            Ok(vec![salewa(vec![
                offer("skier", 100),
                offer("ref", 1_000),
                offer("jaeger", 250),
                offer("fence", 250),
            ])])
        });

        let mut store = ItemStore::new();
        fetch_items(&api, &mut store).await;
        let first = store.collection().unwrap();
        fetch_items(&api, &mut store).await;
        let second = store.collection().unwrap();

        assert_eq!(first, second);
        let vendors: Vec<_> = second[0]
            .sell_for
            .iter()
            .map(|o| o.vendor.normalized_name.as_str())
            .collect();
        assert_eq!(vendors, vec!["jaeger", "fence", "skier"]);
    }

    #[tokio::test]
    async fn trader_fetch_relabels_btr_driver() {
        let mut api = MockTarkovApi::new();
        api.expect_traders()
            .returning(|| Ok(vec![trader("prapor"), trader("btr-driver")]));

        let mut store = TraderStore::new();
        fetch_traders(&api, &mut store).await.unwrap();

        let traders = store.collection().unwrap();
        assert_eq!(traders[0], trader("prapor"));
        assert_eq!(traders[1].normalized_name, "flea-market");
        assert_eq!(traders[1].image_4x_link, FLEA_MARKET_IMAGE);
        assert_eq!(traders[1].image_link, "btr-driver.webp");
    }

    #[tokio::test]
    async fn trader_failure_is_returned_and_loading_clears() {
        let mut api = MockTarkovApi::new();
        api.expect_traders()
            .returning(|| Err(TarkovClientError::Api("boom".to_string())));

        let mut store = TraderStore::new();
        let result = fetch_traders(&api, &mut store).await;

        assert!(matches!(result, Err(TarkovClientError::Api(_))));
        assert!(!store.is_loading());
        assert!(store.collection().is_none());
    }

    #[tokio::test]
    async fn map_fetch_installs_catalog() {
        let mut store = MapStore::new(&[]);
        fetch_maps(&mut store).await;
        fetch_maps(&mut store).await;

        assert_eq!(store.maps().len(), 11);
        assert_eq!(store.maps(), all_maps());
    }
}
