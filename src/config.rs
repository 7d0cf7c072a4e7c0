//! Runtime configuration read from `TARKOVPEDIA_*` environment variables.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::infra::tarkov::DEFAULT_API_URL;

const ENV_PREFIX: &str = "TARKOVPEDIA_";
const DEFAULT_LOG: &str = "tarkovpedia=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment: {0}")]
    Env(#[from] envy::Error),
    #[error("invalid api url {url}: {source}")]
    InvalidApiUrl {
        url: String,
        source: url::ParseError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// GraphQL endpoint (`TARKOVPEDIA_API_URL`).
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Log directive used when `RUST_LOG` is unset (`TARKOVPEDIA_LOG`).
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_log() -> String {
    DEFAULT_LOG.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log: default_log(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment, falling back to defaults on bad input.
    ///
    /// Runs before the subscriber is installed, so problems are returned to
    /// the caller for logging rather than logged here.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::from_env() {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        envy::prefixed(ENV_PREFIX)
            .from_env::<Self>()
            .map_err(ConfigError::from)
            .and_then(Self::validated)
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Self>(pairs)
            .map_err(ConfigError::from)
            .and_then(Self::validated)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        Url::parse(&self.api_url).map_err(|source| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            source,
        })?;
        Ok(self)
    }
}
