// Favorites HTTP client
//
// Wraps `reqwest::Client` with endpoint resolution, anti-forgery header
// injection, and reply classification. Every call is exactly one POST;
// nothing is retried here.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{AddFavoriteBody, FavoriteAck, RemoveFavoriteBody, ToggleReply};
use crate::transport::TransportConfig;

/// Endpoint paths and the anti-forgery header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub add: String,
    pub remove: String,
    pub csrf_header: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            add: "/favorites/add/".into(),
            remove: "/favorites/remove/".into(),
            csrf_header: "X-CSRFToken".into(),
        }
    }
}

/// Raw HTTP client for the add/remove favorite endpoints.
///
/// Both endpoints answer `{ success, action?, error? }` regardless of the
/// HTTP status, so the body alone decides the result.
pub struct FavoritesClient {
    http: reqwest::Client,
    base_url: Url,
    endpoints: Endpoints,
    timeout: Option<Duration>,
}

impl FavoritesClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// A cookie jar is added when the config has none, since the endpoints
    /// sit behind the page's session login.
    pub fn new(
        base_url: Url,
        endpoints: Endpoints,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let http = config.build_client()?;
        Ok(Self {
            http,
            base_url,
            endpoints,
            timeout: Some(config.timeout),
        })
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, endpoints: Endpoints) -> Self {
        Self {
            http,
            base_url,
            endpoints,
            timeout: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ── Operations ───────────────────────────────────────────────────

    /// `POST <add-endpoint>` with `{ type, data }`.
    pub async fn add<T: Serialize + ?Sized>(
        &self,
        kind: &str,
        data: &T,
        token: Option<&SecretString>,
    ) -> Result<FavoriteAck, Error> {
        let url = self.base_url.join(&self.endpoints.add)?;
        self.post(url, &AddFavoriteBody { kind, data }, token).await
    }

    /// `POST <remove-endpoint>` with `{ type, image_url }`.
    pub async fn remove(
        &self,
        kind: &str,
        image_url: &str,
        token: Option<&SecretString>,
    ) -> Result<FavoriteAck, Error> {
        let url = self.base_url.join(&self.endpoints.remove)?;
        self.post(url, &RemoveFavoriteBody { kind, image_url }, token)
            .await
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn post(
        &self,
        url: Url,
        body: &impl Serialize,
        token: Option<&SecretString>,
    ) -> Result<FavoriteAck, Error> {
        debug!("POST {}", url);

        let token = token.map_or("", |t| t.expose_secret());
        let resp = self
            .http
            .post(url)
            .header(self.endpoints.csrf_header.as_str(), token)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.transport_error(e))?;
        debug!(%status, "favorites reply received");

        parse_ack(&text)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.map_or(0, |t| t.as_secs()),
            }
        } else {
            Error::Transport(err)
        }
    }
}

/// Classify a reply body.
///
/// Non-JSON is a `Deserialization` error; JSON that does not fit the
/// envelope, or `success: true` without a known action, is malformed.
pub(crate) fn parse_ack(body: &str) -> Result<FavoriteAck, Error> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: body.to_owned(),
        })?;

    let reply: ToggleReply =
        serde_json::from_value(value).map_err(|_| Error::MalformedResponse {
            body: body.to_owned(),
        })?;

    match (reply.success, reply.action) {
        (false, _) => Err(Error::Rejected {
            message: reply.error.filter(|e| !e.is_empty()),
        }),
        (true, Some(ack)) => Ok(ack),
        (true, None) => Err(Error::MalformedResponse {
            body: body.to_owned(),
        }),
    }
}
