//! Bearer-token acquisition and caching for the game-metadata provider.
//!
//! [`TokenCache`] performs the OAuth client-credentials exchange against
//! the identity endpoint and keeps the resulting token until someone calls
//! [`invalidate`](TokenCache::invalidate) -- there is no TTL-based expiry.
//! The `expires_in` hint from the provider is recorded for observability
//! only. Concurrent cache misses coalesce: the exchange runs while the
//! cache mutex is held, so simultaneous callers share one in-flight
//! request instead of stampeding the token endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

use gameverse_core::CoreError;

use crate::credentials::Credentials;

/// Production identity endpoint for the client-credentials exchange.
pub const DEFAULT_OAUTH_URL: &str = "https://id.twitch.tv/oauth2/token";

/// A cached bearer token plus acquisition metadata.
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The bearer token value attached to provider requests.
    pub value: String,
    /// When the token was obtained.
    pub obtained_at: DateTime<Utc>,
    /// Lifetime hint reported by the identity endpoint, in seconds.
    /// Recorded for diagnostics; never used to expire the cache.
    pub ttl_hint_seconds: Option<u64>,
}

/// Successful exchange payload. Anything without `access_token` is a
/// rejection regardless of HTTP status.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<u64>,
}

/// Owns the provider bearer token shared by all in-flight requests.
///
/// One instance per process (or per test). Tests force re-acquisition
/// deterministically through [`invalidate`](Self::invalidate) rather than
/// waiting out a clock.
pub struct TokenCache {
    http: reqwest::Client,
    oauth_url: String,
    credentials: Option<Credentials>,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    /// Create a cache talking to `oauth_url` with the given credentials.
    ///
    /// The `reqwest::Client` is shared with the data client so both reuse
    /// one connection pool.
    pub fn new(http: reqwest::Client, oauth_url: String, credentials: Option<Credentials>) -> Self {
        Self {
            http,
            oauth_url,
            credentials,
            cached: Mutex::new(None),
        }
    }

    /// Return the cached token, acquiring one first if the cache is empty.
    ///
    /// Fails with [`CoreError::MissingCredentials`] before any network I/O
    /// when no credentials are configured, and with
    /// [`CoreError::UpstreamAuth`] when the exchange is rejected or the
    /// response carries no token field.
    pub async fn get_token(&self) -> Result<String, CoreError> {
        let Some(credentials) = self.credentials.as_ref() else {
            return Err(CoreError::MissingCredentials);
        };

        // Holding the lock across the exchange is what coalesces
        // concurrent misses into a single upstream call.
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(token.value.clone());
        }

        let token = self.exchange(credentials).await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    /// Drop the cached token so the next request re-acquires.
    ///
    /// Called by the data client on any 401 from the provider.
    pub async fn invalidate(&self) {
        let mut cached = self.cached.lock().await;
        if cached.take().is_some() {
            tracing::debug!("cached bearer token invalidated");
        }
    }

    /// Perform the client-credentials exchange.
    async fn exchange(&self, credentials: &Credentials) -> Result<CachedToken, CoreError> {
        let response = self
            .http
            .post(&self.oauth_url)
            .query(&[
                ("client_id", credentials.client_id()),
                ("client_secret", credentials.client_secret()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), body = %body, "credential exchange rejected");
            return Err(CoreError::UpstreamAuth {
                status: status.as_u16(),
            });
        }

        let payload: TokenResponse = response.json().await.map_err(|err| {
            tracing::warn!(error = %err, "credential exchange returned an unreadable payload");
            CoreError::UpstreamAuth {
                status: status.as_u16(),
            }
        })?;

        let Some(value) = payload.access_token else {
            tracing::warn!(
                status = status.as_u16(),
                "credential exchange response lacks an access token"
            );
            return Err(CoreError::UpstreamAuth {
                status: status.as_u16(),
            });
        };

        tracing::debug!(
            ttl_hint_seconds = payload.expires_in,
            "bearer token acquired"
        );

        Ok(CachedToken {
            value,
            obtained_at: Utc::now(),
            ttl_hint_seconds: payload.expires_in,
        })
    }
}

/// Map a transport-level [`reqwest::Error`] into the domain taxonomy.
pub(crate) fn request_error(err: reqwest::Error) -> CoreError {
    if err.is_timeout() {
        CoreError::UpstreamTimeout
    } else {
        CoreError::Transport(err.to_string())
    }
}
