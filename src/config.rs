//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::ClientError;

/// Default base URL for the TON API mainnet gateway.
pub const DEFAULT_BASE_URL: &str = "https://ton.getblock.io/mainnet/";

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MIN_API_KEY_LEN: usize = 8;

/// Connection settings for a [`TonClient`](crate::TonClient).
///
/// Immutable after construction; the client owns its copy for its whole
/// lifetime. Validation happens here, so a constructed config never fails
/// the client at call time.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API gateway. Endpoint paths are appended to it.
    pub base_url: Url,
    /// Key sent as the `x-api-key` header on every request.
    pub api_key: String,
    /// Per-request timeout; the sole guard against hung calls.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the default mainnet gateway with the
    /// default 30 second timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the API key is empty or shorter
    /// than 8 characters. This is a sanity check only, not a validation of
    /// the key itself.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        // DEFAULT_BASE_URL is a compile-time constant, parsing cannot fail.
        let base_url = Url::parse(DEFAULT_BASE_URL)?;
        Self::with_options(api_key, base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a configuration with a custom gateway URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the API key fails the length
    /// sanity check.
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: Url,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let config = Self {
            base_url,
            api_key: api_key.into(),
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ClientError> {
        if self.api_key.is_empty() {
            return Err(ClientError::Config("API key is required".to_string()));
        }
        if self.api_key.len() < MIN_API_KEY_LEN {
            return Err(ClientError::Config("API key is too short".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_mainnet_gateway() {
        let config = ClientConfig::new("test-api-key").unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let err = ClientConfig::new("").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn short_api_key_is_rejected() {
        let err = ClientConfig::new("abc").unwrap_err();
        assert!(matches!(err, ClientError::Config(msg) if msg.contains("too short")));
    }

    #[test]
    fn custom_options_are_kept() {
        let url = Url::parse("https://testnet.example.com/api/").unwrap();
        let config =
            ClientConfig::with_options("test-api-key", url.clone(), Duration::from_secs(5))
                .unwrap();
        assert_eq!(config.base_url, url);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
