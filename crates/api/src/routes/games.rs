//! Route definitions for the game catalog.
//!
//! Mounted at the `/api` root of the route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Catalog routes.
///
/// ```text
/// GET /games          -> search_games
/// GET /games/{id}     -> get_game
/// GET /genres         -> list_genres
/// GET /platforms      -> list_platforms
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(games::search_games))
        .route("/games/{id}", get(games::get_game))
        .route("/genres", get(games::list_genres))
        .route("/platforms", get(games::list_platforms))
}
