//! Route definition for review submissions.

use axum::routing::post;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Review routes.
///
/// ```text
/// POST /reviews       -> submit_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/reviews", post(reviews::submit_review))
}
