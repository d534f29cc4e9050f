use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{FetchError, WeatherData, WeatherQuery};

use super::WeatherProvider;

/// Connection settings for WeatherAPI.com.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_key: String,
    /// e.g. `https://api.weatherapi.com/v1`; `/forecast.json` is appended.
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    forecast_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client for WeatherAPI")?;

        let forecast_url = format!("{}/forecast.json", settings.base_url.trim_end_matches('/'));

        Ok(Self { api_key: settings.api_key, forecast_url, http })
    }
}

/// Error envelope WeatherAPI sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: Option<WaErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    message: Option<String>,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherData, FetchError> {
        debug!(location = query.location(), "requesting WeatherAPI forecast");

        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query.location()),
                ("days", "1"),
                ("aqi", "yes"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), location = query.location(), "WeatherAPI request failed");

            if status == StatusCode::BAD_REQUEST {
                return Err(FetchError::NotFound);
            }

            // An unreadable error body only loses the upstream message.
            let body = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<WaErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message);

            return Err(FetchError::upstream(status.as_u16(), message));
        }

        let body = res.text().await?;

        let data: WeatherData = serde_json::from_str(&body)
            .map_err(|e| FetchError::transport(format!("Failed to parse weather data: {e}")))?;

        if data.today().is_none() {
            return Err(FetchError::transport("Weather response contained no forecast day"));
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> ApiSettings {
        ApiSettings {
            api_key: "KEY".into(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn forecast_url_appends_endpoint() {
        let provider = WeatherApiProvider::new(settings("https://api.weatherapi.com/v1")).unwrap();
        assert_eq!(provider.forecast_url, "https://api.weatherapi.com/v1/forecast.json");
    }

    #[test]
    fn forecast_url_tolerates_trailing_slash() {
        let provider = WeatherApiProvider::new(settings("http://localhost:8080/")).unwrap();
        assert_eq!(provider.forecast_url, "http://localhost:8080/forecast.json");
    }

    #[test]
    fn error_body_message_is_extracted() {
        let body = r#"{"error":{"code":2008,"message":"API key has been disabled."}}"#;
        let parsed: WaErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.error.and_then(|e| e.message).as_deref(),
            Some("API key has been disabled.")
        );
    }
}
