//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com forecast provider behind an injectable trait
//! - `WeatherClient`, the observable fetch state machine
//! - Pure classifiers that turn raw fields into display categories
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use classify::{
    AqiLevel, ClothingSuggestion, ConditionCategory, UvLevel, classify_aqi, classify_condition,
    classify_uv, is_daytime, suggest_clothing,
};
pub use client::{FetchState, WeatherClient};
pub use config::Config;
pub use error::FetchError;
pub use model::{
    AirQuality, Condition, CurrentConditions, Forecast, ForecastDay, HourForecast, Location,
    WeatherData, WeatherQuery,
};
pub use provider::{ApiSettings, WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
