//! Route definitions for the trivia surface.
//!
//! Mounted at `/trivia` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::trivia;
use crate::state::AppState;

/// Trivia routes mounted at `/trivia`.
///
/// ```text
/// GET /questions      -> get_questions
/// GET /categories     -> list_categories
/// GET /token          -> session_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(trivia::get_questions))
        .route("/categories", get(trivia::list_categories))
        .route("/token", get(trivia::session_token))
}
