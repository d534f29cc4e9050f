use crate::{Config, FetchError, WeatherData, WeatherQuery, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

pub use weatherapi::ApiSettings;

/// Source of forecast data for a location.
///
/// `WeatherClient` only talks to this trait, so tests can swap in a fake.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherData, FetchError>;
}

/// Construct the WeatherAPI provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<WeatherApiProvider> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No WeatherAPI key configured.\n\
                 Hint: run `weather configure` and enter your API key."
        )
    })?;

    WeatherApiProvider::new(ApiSettings {
        api_key: api_key.to_owned(),
        base_url: config.base_url.clone(),
        timeout: config.timeout(),
    })
}
