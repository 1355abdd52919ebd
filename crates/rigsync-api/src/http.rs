// JSON-over-HTTP gateway.
//
// Every method maps to `POST {base}/rpc/{Method}` with the JSON-encoded
// arguments as body. A 2xx answer carries the JSON result (empty body
// means `null`), 422 carries a validation failure, anything else is a
// device-side error. Error bodies look like `{"error": "..."}`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::gateway::{Method, RemoteGateway};
use crate::transport::TransportConfig;

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`RemoteGateway`] that talks to the device over HTTP.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpGateway {
    /// Build a gateway from a `TransportConfig`.
    pub fn new(transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: transport.base_url.clone(),
        })
    }

    /// Create a gateway with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The device base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/rpc/{method}`
    pub(crate) fn method_url(&self, method: Method) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/rpc/{method}"))?)
    }

    async fn parse_response(method: Method, resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;
        trace!(%method, %status, len = body.len(), "rpc response");

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| body.chars().take(200).collect());
            return Err(if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
                Error::Rejected { method, message }
            } else {
                Error::Remote {
                    method,
                    status: status.as_u16(),
                    message,
                }
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            method,
            message: e.to_string(),
            body,
        })
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn call(&self, method: Method, args: Value, timeout: Duration) -> Result<Value, Error> {
        let url = self.method_url(method)?;
        debug!(%method, "POST {}", url);

        let resp = self
            .http
            .post(url)
            .timeout(timeout)
            .json(&args)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(method, timeout)
                } else {
                    Error::Transport(e)
                }
            })?;

        Self::parse_response(method, resp).await
    }
}
