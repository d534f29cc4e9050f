use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Location not found. Please check the city name and try again.";
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to fetch weather data";
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "An unexpected error occurred";
pub const TIMEOUT_MESSAGE: &str = "The weather service did not respond in time";
pub const CONNECT_MESSAGE: &str = "Could not connect to the weather service";

/// Ways a weather fetch can fail.
///
/// `Display` yields the message shown to the user, so callers that do not
/// care about the distinction can simply call `to_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Upstream rejected the location (HTTP 400).
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// Upstream answered with another non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    /// Build an upstream error, falling back to a generic message when the
    /// response body carried none.
    pub fn upstream(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string());
        FetchError::Upstream { status, message }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            FetchError::Transport(TRANSPORT_FALLBACK_MESSAGE.to_string())
        } else {
            FetchError::Transport(message)
        }
    }
}

// reqwest puts the request URL, API key included, into its Display output.
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::transport(TIMEOUT_MESSAGE)
        } else if err.is_connect() {
            FetchError::transport(CONNECT_MESSAGE)
        } else {
            FetchError::transport(err.without_url().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_fixed_message() {
        assert_eq!(FetchError::NotFound.to_string(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn upstream_uses_body_message_when_present() {
        let err = FetchError::upstream(500, Some("server down".into()));
        assert_eq!(err.to_string(), "server down");
    }

    #[test]
    fn upstream_falls_back_without_message() {
        assert_eq!(FetchError::upstream(503, None).to_string(), UPSTREAM_FALLBACK_MESSAGE);
        assert_eq!(
            FetchError::upstream(503, Some("  ".into())).to_string(),
            UPSTREAM_FALLBACK_MESSAGE
        );
    }

    #[test]
    fn transport_falls_back_on_empty_message() {
        assert_eq!(FetchError::transport("").to_string(), TRANSPORT_FALLBACK_MESSAGE);
        assert_eq!(FetchError::transport("connection reset").to_string(), "connection reset");
    }
}
