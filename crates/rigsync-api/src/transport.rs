// Shared transport configuration for building the reqwest::Client that
// backs `HttpGateway`.
//
// Per-call timeouts come from the caller's timeout class, so the client
// itself only carries a connect timeout.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::Error;

const USER_AGENT: &str = concat!("rigsync/", env!("CARGO_PKG_VERSION"));

/// How to reach the device's RPC endpoint.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Device base URL (e.g. `http://172.16.0.1:8000`).
    pub base_url: Url,
    /// Optional bearer token sent with every call.
    pub token: Option<SecretString>,
    /// TCP connect timeout, independent of the per-call timeout class.
    pub connect_timeout: Duration,
}

impl TransportConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            token: None,
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        if let Some(ref token) = self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|e| Error::InvalidConfig(format!("invalid token header: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn token_with_control_characters_is_a_config_error() {
        let mut transport = TransportConfig::new(Url::parse("http://172.16.0.1:8000").unwrap());
        transport.token = Some(SecretString::from("line\nbreak".to_owned()));

        let err = transport.build_client().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ref m) if m.contains("token")), "{err:?}");
    }

    #[test]
    fn plain_token_builds_a_client() {
        let mut transport = TransportConfig::new(Url::parse("http://172.16.0.1:8000").unwrap());
        transport.token = Some(SecretString::from("s3cret".to_owned()));
        assert!(transport.build_client().is_ok());
    }
}
