//! HTTP client for the IGDB data endpoints.
//!
//! Every operation acquires a bearer token through [`TokenCache`] first;
//! a token failure propagates as-is so callers can tell "service
//! unavailable" apart from "no results". Query bodies use the provider's
//! text query language with fixed field manifests -- the only
//! caller-controlled fragment (the search term) is quote-escaped before
//! interpolation.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;

use gameverse_core::pagination::LOOKUP_PAGE_SIZE;
use gameverse_core::{CoreError, LookupEntry};

use crate::credentials::Credentials;
use crate::models::{GameDetail, GameSummary, NamedRef, RawGame, SearchQuery};
use crate::token::{request_error, TokenCache, DEFAULT_OAUTH_URL};

/// Production base URL for the game-metadata API.
pub const DEFAULT_API_URL: &str = "https://api.igdb.com/v4";

/// Timeout applied to every upstream call.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Field manifest for search results. Fixed, never user-controlled.
const GAME_SUMMARY_FIELDS: &str = "name, genres.name, platforms.name, first_release_date, \
     summary, cover.url, rating, rating_count";

/// Field manifest for the detail endpoint: the summary set plus story,
/// media, and association expansions.
const GAME_DETAIL_FIELDS: &str = "name, genres.name, platforms.name, first_release_date, \
     summary, cover.url, rating, rating_count, storyline, \
     involved_companies.company.name, screenshots.url, videos.video_id, \
     websites.category, websites.url, game_modes.name, themes.name, \
     player_perspectives.name";

/// Construction-time configuration for [`IgdbClient`].
///
/// Defaults target the production provider; tests override the URLs to
/// point at a local mock server.
#[derive(Debug, Clone)]
pub struct IgdbConfig {
    pub credentials: Option<Credentials>,
    pub api_url: String,
    pub oauth_url: String,
}

impl Default for IgdbConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            api_url: DEFAULT_API_URL.to_string(),
            oauth_url: DEFAULT_OAUTH_URL.to_string(),
        }
    }
}

/// Client for the game-metadata provider.
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` pools
/// connections across concurrent requests.
pub struct IgdbClient {
    http: reqwest::Client,
    api_url: String,
    credentials: Option<Credentials>,
    tokens: TokenCache,
}

impl IgdbClient {
    /// Create a client from explicit configuration.
    pub fn new(config: IgdbConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("reqwest client construction cannot fail with static options");

        let tokens = TokenCache::new(http.clone(), config.oauth_url, config.credentials.clone());

        Self {
            http,
            api_url: config.api_url,
            credentials: config.credentials,
            tokens,
        }
    }

    /// Whether provider credentials were configured.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Search the catalog.
    ///
    /// Zero matches and non-array payloads both yield an empty list --
    /// the one documented downgrade in the system. Everything else
    /// (auth, transport, malformed array elements) stays an error.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<GameSummary>, CoreError> {
        let body = format!(
            "search \"{}\"; fields {GAME_SUMMARY_FIELDS}; limit {}; offset {};",
            escape_term(&query.term),
            query.limit,
            query.offset,
        );

        let value = self.query("games", body).await?;
        if !value.is_array() {
            tracing::debug!(term = %query.term, "non-array search payload, returning empty result");
            return Ok(Vec::new());
        }

        let raw: Vec<RawGame> = serde_json::from_value(value).map_err(|err| {
            CoreError::UpstreamProtocol {
                status: 200,
                message: format!("unexpected search payload shape: {err}"),
            }
        })?;

        tracing::debug!(term = %query.term, count = raw.len(), "search completed");
        Ok(raw.into_iter().map(GameSummary::from).collect())
    }

    /// Fetch the full detail record for one game.
    ///
    /// The provider answers with a 0-or-1-element array; an empty array
    /// means the id does not exist and maps to `Ok(None)`.
    pub async fn get_by_id(&self, id: u64) -> Result<Option<GameDetail>, CoreError> {
        let body = format!("where id = {id}; fields {GAME_DETAIL_FIELDS};");

        let value = self.query("games", body).await?;
        let raw: Vec<RawGame> =
            serde_json::from_value(value).map_err(|err| CoreError::UpstreamProtocol {
                status: 200,
                message: format!("unexpected detail payload shape: {err}"),
            })?;

        Ok(raw.into_iter().next().map(GameDetail::from))
    }

    /// List the provider's genre reference table.
    pub async fn list_genres(&self) -> Result<Vec<LookupEntry>, CoreError> {
        self.lookup("genres").await
    }

    /// List the provider's platform reference table.
    pub async fn list_platforms(&self) -> Result<Vec<LookupEntry>, CoreError> {
        self.lookup("platforms").await
    }

    /// Fetch a fixed-size `{ id, name }` reference list.
    async fn lookup(&self, endpoint: &str) -> Result<Vec<LookupEntry>, CoreError> {
        let body = format!("fields name; limit {LOOKUP_PAGE_SIZE};");

        let value = self.query(endpoint, body).await?;
        if !value.is_array() {
            return Ok(Vec::new());
        }

        let raw: Vec<NamedRef> =
            serde_json::from_value(value).map_err(|err| CoreError::UpstreamProtocol {
                status: 200,
                message: format!("unexpected {endpoint} payload shape: {err}"),
            })?;

        Ok(raw
            .into_iter()
            .map(|r| LookupEntry {
                id: r.id,
                name: r.name,
            })
            .collect())
    }

    /// Send one query-language request and return the JSON payload.
    ///
    /// A 401 invalidates the token cache before failing, so the next
    /// request re-acquires instead of replaying a dead token.
    async fn query(&self, endpoint: &str, body: String) -> Result<serde_json::Value, CoreError> {
        let token = self.tokens.get_token().await?;
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CoreError::MissingCredentials)?;

        let response = self
            .http
            .post(format!("{}/{}", self.api_url, endpoint))
            .header("Client-ID", credentials.client_id())
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.tokens.invalidate().await;
            tracing::warn!(endpoint, "bearer token rejected by provider, cache invalidated");
            return Err(CoreError::UpstreamAuth {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(
                endpoint,
                status = status.as_u16(),
                body = %body_text,
                "game provider returned an error"
            );
            // The raw body is logged above but never propagated; error
            // responses can quote back request fragments.
            return Err(CoreError::UpstreamProtocol {
                status: status.as_u16(),
                message: format!("{endpoint} request failed"),
            });
        }

        response
            .json()
            .await
            .map_err(|err| CoreError::UpstreamProtocol {
                status: status.as_u16(),
                message: format!("invalid JSON payload: {err}"),
            })
    }
}

/// Escape a search term for interpolation into a quoted query-language
/// string literal.
fn escape_term(term: &str) -> String {
    term.replace('\\', "\\\\").replace('"', "\\\"")
}
