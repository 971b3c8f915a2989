//! Typed client for the GameVerse API surface.
//!
//! Wraps every router endpoint with response validation and base-URL
//! composition that works across deployment environments: the base URL
//! comes from `GAMEVERSE_API_URL` (or a constructor argument) and may or
//! may not already carry the `/api` prefix -- [`GameVerseClient`] never
//! produces a doubled `/api` segment either way.

use serde::Deserialize;

use gameverse_core::LookupEntry;
use gameverse_igdb::{GameDetail, GameSummary};
use gameverse_trivia::TriviaQuestion;

/// Default API base for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable holding the deployed API base URL.
pub const BASE_URL_ENV: &str = "GAMEVERSE_API_URL";

/// Errors produced by the API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status code.
    #[error("server answered status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("invalid JSON response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Request(err.to_string())
    }
}

/// Acknowledgement returned by the review endpoint.
#[derive(Debug, Deserialize)]
struct ReviewAck {
    success: bool,
}

#[derive(Debug, Deserialize)]
struct SessionToken {
    token: String,
}

/// Client for one GameVerse API deployment.
pub struct GameVerseClient {
    http: reqwest::Client,
    base_url: String,
}

impl GameVerseClient {
    /// Client against an explicit base URL (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client against `GAMEVERSE_API_URL`, falling back to localhost.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Search the game catalog.
    pub async fn search_games(
        &self,
        term: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<GameSummary>, ClientError> {
        let mut params = vec![("query", term.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            params.push(("offset", offset.to_string()));
        }
        self.get_json("/api/games", &params).await
    }

    /// Fetch one game's detail record; `None` when the id is unknown.
    pub async fn get_game(&self, id: u64) -> Result<Option<GameDetail>, ClientError> {
        match self.get_json(&format!("/api/games/{id}"), &[]).await {
            Ok(detail) => Ok(Some(detail)),
            Err(ClientError::Status { status: 404 }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// List the genre reference table.
    pub async fn list_genres(&self) -> Result<Vec<LookupEntry>, ClientError> {
        self.get_json("/api/genres", &[]).await
    }

    /// List the platform reference table.
    pub async fn list_platforms(&self) -> Result<Vec<LookupEntry>, ClientError> {
        self.get_json("/api/platforms", &[]).await
    }

    /// Fetch a processed trivia question batch.
    pub async fn get_trivia_questions(
        &self,
        count: u8,
        category: Option<u32>,
        difficulty: Option<&str>,
    ) -> Result<Vec<TriviaQuestion>, ClientError> {
        let mut params = vec![("count", count.to_string())];
        if let Some(category) = category {
            params.push(("category", category.to_string()));
        }
        if let Some(difficulty) = difficulty {
            params.push(("difficulty", difficulty.to_string()));
        }
        self.get_json("/api/trivia/questions", &params).await
    }

    /// List trivia categories.
    pub async fn list_trivia_categories(&self) -> Result<Vec<LookupEntry>, ClientError> {
        self.get_json("/api/trivia/categories", &[]).await
    }

    /// Request a trivia session token.
    pub async fn get_trivia_token(&self) -> Result<String, ClientError> {
        let payload: SessionToken = self.get_json("/api/trivia/token", &[]).await?;
        Ok(payload.token)
    }

    /// Submit a review; returns the server's acknowledgement flag.
    pub async fn submit_review(
        &self,
        game_id: u64,
        user_id: &str,
        review: &str,
    ) -> Result<bool, ClientError> {
        let response = self
            .http
            .post(self.url("/api/reviews"))
            .json(&serde_json::json!({
                "game_id": game_id,
                "user_id": user_id,
                "review": review,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let ack: ReviewAck = response
            .json()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))?;
        Ok(ack.success)
    }

    /// Compose a full URL without doubling the `/api` segment when the
    /// base already ends with it.
    fn url(&self, path: &str) -> String {
        if self.base_url.ends_with("/api") && path.starts_with("/api") {
            format!("{}{}", self.base_url, &path["/api".len()..])
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// GET an endpoint, validate the status, and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_composition_avoids_doubled_api_segment() {
        let plain = GameVerseClient::new("https://backend.example.com");
        assert_eq!(
            plain.url("/api/games"),
            "https://backend.example.com/api/games"
        );

        let with_api = GameVerseClient::new("https://backend.example.com/api");
        assert_eq!(
            with_api.url("/api/games"),
            "https://backend.example.com/api/games"
        );
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = GameVerseClient::new("https://backend.example.com/");
        assert_eq!(client.url("/health"), "https://backend.example.com/health");
    }
}
