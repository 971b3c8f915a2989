//! Handlers for the game catalog surface.
//!
//! Thin request/response translation over the game-provider client: parse
//! and bound the query parameters, call the client, let `AppError` map
//! failures to status codes.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use gameverse_core::{CoreError, LookupEntry};
use gameverse_igdb::{GameDetail, GameSummary, SearchQuery};

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for catalog search (`?query=&limit=&offset=`).
///
/// `limit`/`offset` are clamped, never forwarded raw.
#[derive(Debug, Deserialize)]
pub struct GameSearchParams {
    #[serde(alias = "search")]
    pub query: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/games
///
/// Catalog search. An empty or missing term short-circuits to an empty
/// list without touching the provider.
pub async fn search_games(
    State(state): State<AppState>,
    Query(params): Query<GameSearchParams>,
) -> AppResult<Json<Vec<GameSummary>>> {
    let term = params.query.unwrap_or_default().trim().to_string();
    if term.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let query = SearchQuery::new(term, params.limit, params.offset);
    let games = state.games.search(&query).await?;

    tracing::debug!(term = %query.term, count = games.len(), "catalog search served");
    Ok(Json(games))
}

/// GET /api/games/{id}
///
/// Full detail for one game; 404 when the provider has no such id.
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<GameDetail>> {
    match state.games.get_by_id(id).await? {
        Some(detail) => Ok(Json(detail)),
        None => Err(CoreError::NotFound { entity: "game", id }.into()),
    }
}

/// GET /api/genres
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<LookupEntry>>> {
    Ok(Json(state.games.list_genres().await?))
}

/// GET /api/platforms
pub async fn list_platforms(State(state): State<AppState>) -> AppResult<Json<Vec<LookupEntry>>> {
    Ok(Json(state.games.list_platforms().await?))
}
