//! Caller-owned fetch state machine.
//!
//! `WeatherClient` holds a single [`FetchState`] cell and publishes every
//! transition through a `tokio::sync::watch` channel:
//!
//! ```text
//! Idle ──fetch──▶ Loading ──ok──▶ Success
//!                    │                │
//!                    └──err──▶ Failure ◀┘ (next fetch goes back to Loading)
//! ```
//!
//! Overlapping fetches are sequenced: only the most recently started request
//! may write its outcome, so a slow stale response never replaces a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, instrument};

use crate::{
    Config, WeatherData, WeatherQuery,
    provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider},
};

/// Observable state of the most recent search.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(WeatherData),
    Failure(String),
}

impl FetchState {
    pub fn data(&self) -> Option<&WeatherData> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct WeatherClient<P> {
    provider: P,
    state: watch::Sender<FetchState>,
    latest_ticket: AtomicU64,
}

impl WeatherClient<WeatherApiProvider> {
    /// Client backed by WeatherAPI.com, configured from `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(provider_from_config(config)?))
    }
}

impl<P: WeatherProvider> WeatherClient<P> {
    pub fn new(provider: P) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self { provider, state, latest_ticket: AtomicU64::new(0) }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every published transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Search for `location` and publish the outcome.
    ///
    /// Blank input is ignored without touching the state.
    #[instrument(skip(self))]
    pub async fn fetch_weather(&self, location: &str) {
        let Some(query) = WeatherQuery::new(location) else {
            debug!("ignoring blank location");
            return;
        };

        // Ticket and Loading are published under one lock, so a request that
        // finished in between cannot be reset to Loading.
        let mut ticket = 0;
        self.state.send_modify(|state| {
            ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
            *state = FetchState::Loading;
        });

        let outcome = match self.provider.fetch(&query).await {
            Ok(data) => FetchState::Success(data),
            Err(err) => FetchState::Failure(err.to_string()),
        };

        // Checked under the channel lock so a newer request that has already
        // taken its ticket cannot be overwritten.
        let applied = self.state.send_if_modified(|state| {
            if self.latest_ticket.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *state = outcome;
            true
        });

        if !applied {
            debug!(ticket, "discarding response superseded by a newer search");
        }
    }
}
