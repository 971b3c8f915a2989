use std::sync::Arc;

use gameverse_igdb::IgdbClient;
use gameverse_trivia::TriviaClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every field is behind an `Arc`. The two provider
/// clients are constructed once at startup so the token cache and the
/// HTTP connection pools are shared across all requests.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Game-metadata provider client (token cache included).
    pub games: Arc<IgdbClient>,
    /// Trivia provider client.
    pub trivia: Arc<TriviaClient>,
}
