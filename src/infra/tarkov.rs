//! Thin asynchronous client for the tarkov.dev GraphQL API.
//!
//! - One fixed query per collection, no variables or pagination.
//! - Returns domain types; normalization happens in the pipelines.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Currency, Item, SellOffer, Trader, Vendor};
use crate::util::version::user_agent;

pub const DEFAULT_API_URL: &str = "https://api.tarkov.dev/graphql";

const QUERY_ALL_ITEMS: &str = r#"
query {
  items {
    avg24hPrice
    basePrice
    description
    height
    id
    image8xLink
    inspectImageLink
    gridImageLink
    link
    name
    normalizedName
    shortName
    weight
    wikiLink
    minLevelForFlea
    sellFor {
      price
      currency
      priceRUB
      vendor {
        name
        normalizedName
      }
    }
  }
}
"#;

const QUERY_ALL_TRADERS: &str = r#"
query {
  traders {
    name
    normalizedName
    imageLink
    image4xLink
    currency {
      name
      normalizedName
      shortName
    }
  }
}
"#;

#[derive(Debug, Error)]
pub enum TarkovClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("graphql error: {0}")]
    GraphQl(String),
    #[error("api error: {0}")]
    Api(String),
}

/// Remote accessors for the networked pipelines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TarkovApi: Send + Sync {
    async fn items(&self) -> Result<Vec<Item>, TarkovClientError>;
    async fn traders(&self) -> Result<Vec<Trader>, TarkovClientError>;
}

#[derive(Clone)]
pub struct TarkovClient {
    http: Client,
    endpoint: Url,
}

impl TarkovClient {
    pub fn with_endpoint(endpoint: &str) -> Result<Self, TarkovClientError> {
        let endpoint = Url::parse(endpoint)?;
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self { http, endpoint })
    }

    async fn query<T>(&self, query: &str) -> Result<T, TarkovClientError>
    where
        T: DeserializeOwned,
    {
        debug!(endpoint = %self.endpoint, "sending graphql query");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphQlRequest { query })
            .send()
            .await?
            .error_for_status()?;
        let envelope: GraphQlEnvelope<T> = response.json().await?;
        envelope.into_result()
    }
}

#[async_trait]
impl TarkovApi for TarkovClient {
    async fn items(&self) -> Result<Vec<Item>, TarkovClientError> {
        let data: ItemsData = self.query(QUERY_ALL_ITEMS).await?;
        Ok(data.items.into_iter().map(Item::from).collect())
    }

    async fn traders(&self) -> Result<Vec<Trader>, TarkovClientError> {
        let data: TradersData = self.query(QUERY_ALL_TRADERS).await?;
        Ok(data.traders.into_iter().map(Trader::from).collect())
    }
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorDto>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorDto {
    message: String,
}

impl<T> GraphQlEnvelope<T> {
    fn into_result(self) -> Result<T, TarkovClientError> {
        if !self.errors.is_empty() {
            let message = self
                .errors
                .into_iter()
                .map(|err| err.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(TarkovClientError::GraphQl(message));
        }

        self.data
            .ok_or_else(|| TarkovClientError::Api("response missing data".into()))
    }
}

#[derive(Debug, Deserialize)]
struct ItemsData {
    items: Vec<ItemDto>,
}

#[derive(Debug, Deserialize)]
struct TradersData {
    traders: Vec<TraderDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemDto {
    id: String,
    name: Option<String>,
    short_name: Option<String>,
    normalized_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    base_price: i64,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    height: i32,
    #[serde(default)]
    image8x_link: Option<String>,
    #[serde(default)]
    inspect_image_link: Option<String>,
    #[serde(default)]
    grid_image_link: Option<String>,
    #[serde(default)]
    avg24h_price: Option<i64>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    wiki_link: Option<String>,
    #[serde(default)]
    min_level_for_flea: Option<i32>,
    #[serde(default)]
    sell_for: Vec<SellOfferDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SellOfferDto {
    price: i64,
    currency: String,
    #[serde(rename = "priceRUB")]
    price_rub: i64,
    vendor: VendorDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VendorDto {
    name: String,
    normalized_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TraderDto {
    name: String,
    normalized_name: String,
    #[serde(default)]
    image_link: Option<String>,
    #[serde(default)]
    image4x_link: Option<String>,
    currency: CurrencyDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyDto {
    name: String,
    normalized_name: String,
    #[serde(default)]
    short_name: Option<String>,
}

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        let name = dto.name.unwrap_or_else(|| "Unknown item".to_string());
        Self {
            id: dto.id,
            short_name: dto.short_name.unwrap_or_else(|| name.clone()),
            normalized_name: dto.normalized_name.unwrap_or_default(),
            name,
            description: dto.description,
            base_price: dto.base_price,
            weight: dto.weight.unwrap_or_default(),
            height: dto.height,
            image_8x_link: dto.image8x_link.unwrap_or_default(),
            inspect_image_link: dto.inspect_image_link.unwrap_or_default(),
            grid_image_link: dto.grid_image_link.unwrap_or_default(),
            avg_24h_price: dto.avg24h_price,
            link: dto.link.unwrap_or_default(),
            wiki_link: dto.wiki_link.unwrap_or_default(),
            min_level_for_flea: dto.min_level_for_flea,
            sell_for: dto.sell_for.into_iter().map(SellOffer::from).collect(),
        }
    }
}

impl From<SellOfferDto> for SellOffer {
    fn from(dto: SellOfferDto) -> Self {
        Self {
            price: dto.price,
            currency: dto.currency,
            price_rub: dto.price_rub,
            vendor: Vendor {
                name: dto.vendor.name,
                normalized_name: dto.vendor.normalized_name,
            },
        }
    }
}

impl From<TraderDto> for Trader {
    fn from(dto: TraderDto) -> Self {
        Self {
            name: dto.name,
            normalized_name: dto.normalized_name,
            image_link: dto.image_link.unwrap_or_default(),
            image_4x_link: dto.image4x_link.unwrap_or_default(),
            currency: Currency {
                short_name: dto
                    .currency
                    .short_name
                    .unwrap_or_else(|| dto.currency.name.clone()),
                name: dto.currency.name,
                normalized_name: dto.currency.normalized_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS_RESPONSE: &str = r#"{
      "data": {
        "items": [
          {
            "avg24hPrice": 31000,
            "basePrice": 20000,
            "description": null,
            "height": 1,
            "id": "5448be9a4bdc2dfd2f8b456a",
            "image8xLink": "https://assets.tarkov.dev/rgd-8x.webp",
            "inspectImageLink": "https://assets.tarkov.dev/rgd-image.webp",
            "gridImageLink": "https://assets.tarkov.dev/rgd-grid.webp",
            "link": "https://tarkov.dev/item/rgd-5",
            "name": "RGD-5 hand grenade",
            "normalizedName": "rgd-5-hand-grenade",
            "shortName": "RGD-5",
            "weight": 0.31,
            "wikiLink": "https://escapefromtarkov.fandom.com/wiki/RGD-5",
            "minLevelForFlea": 20,
            "sellFor": [
              { "price": 12000, "currency": "RUB", "priceRUB": 12000,
                "vendor": { "name": "Prapor", "normalizedName": "prapor" } },
              { "price": 95, "currency": "USD", "priceRUB": 13110,
                "vendor": { "name": "Peacekeeper", "normalizedName": "peacekeeper" } }
            ]
          }
        ]
      }
    }"#;

    #[test]
    fn decodes_items_envelope() {
        let envelope: GraphQlEnvelope<ItemsData> = serde_json::from_str(ITEMS_RESPONSE).unwrap();
        let items: Vec<Item> = envelope
            .into_result()
            .unwrap()
            .items
            .into_iter()
            .map(Item::from)
            .collect();

        assert_eq!(items.len(), 1);
        let grenade = &items[0];
        assert_eq!(grenade.short_name, "RGD-5");
        assert_eq!(grenade.avg_24h_price, Some(31000));
        assert_eq!(grenade.description, None);
        assert_eq!(grenade.min_level_for_flea, Some(20));
        assert_eq!(grenade.sell_for.len(), 2);
        assert_eq!(grenade.sell_for[1].price_rub, 13110);
        assert_eq!(grenade.sell_for[1].vendor.normalized_name, "peacekeeper");
    }

    #[test]
    fn decodes_traders_envelope() {
        let raw = r#"{"data":{"traders":[{
            "name": "BTR Driver",
            "normalizedName": "btr-driver",
            "imageLink": "https://assets.tarkov.dev/btr.webp",
            "image4xLink": "https://assets.tarkov.dev/btr-4x.webp",
            "currency": {"name": "Roubles", "normalizedName": "roubles", "shortName": "RUB"}
        }]}}"#;
        let envelope: GraphQlEnvelope<TradersData> = serde_json::from_str(raw).unwrap();
        let traders: Vec<Trader> = envelope
            .into_result()
            .unwrap()
            .traders
            .into_iter()
            .map(Trader::from)
            .collect();

        assert_eq!(traders[0].normalized_name, "btr-driver");
        assert_eq!(traders[0].image_4x_link, "https://assets.tarkov.dev/btr-4x.webp");
        assert_eq!(traders[0].currency.short_name, "RUB");
    }

    #[test]
    fn graphql_errors_become_client_errors() {
        let raw = r#"{"data": null, "errors": [{"message": "rate limited"}, {"message": "try later"}]}"#;
        let envelope: GraphQlEnvelope<ItemsData> = serde_json::from_str(raw).unwrap();

        match envelope.into_result() {
            Err(TarkovClientError::GraphQl(message)) => assert_eq!(message, "rate limited; try later"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_data_is_an_api_error() {
        let envelope: GraphQlEnvelope<TradersData> = serde_json::from_str("{}").unwrap();
        assert!(matches!(envelope.into_result(), Err(TarkovClientError::Api(_))));
    }

    #[test]
    fn rejects_invalid_endpoint() {
        assert!(matches!(
            TarkovClient::with_endpoint("not a url"),
            Err(TarkovClientError::InvalidUrl(_))
        ));
    }
}
