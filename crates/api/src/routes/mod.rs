pub mod games;
pub mod health;
pub mod reviews;
pub mod trivia;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                 catalog search (GET)
/// /games/{id}            game detail (GET)
/// /genres                genre reference list (GET)
/// /platforms             platform reference list (GET)
///
/// /trivia/questions      question batch (GET)
/// /trivia/categories     category reference list (GET)
/// /trivia/token          session token (GET)
///
/// /reviews               submit review (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(games::router())
        .nest("/trivia", trivia::router())
        .merge(reviews::router())
}
