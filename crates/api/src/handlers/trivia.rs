//! Handlers for the trivia surface.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use gameverse_core::pagination::DEFAULT_QUESTION_COUNT;
use gameverse_core::LookupEntry;
use gameverse_trivia::{QuestionKind, QuestionOptions, TriviaQuestion};

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for a question batch
/// (`?count=&category=&difficulty=&kind=`).
#[derive(Debug, Deserialize)]
pub struct TriviaQuestionParams {
    pub count: Option<i64>,
    pub category: Option<u32>,
    pub difficulty: Option<String>,
    pub kind: Option<String>,
}

/// Session-token response payload.
#[derive(Debug, Serialize)]
pub struct SessionTokenResponse {
    pub token: String,
}

/// GET /api/trivia/questions
///
/// The count bound is enforced by the client before it touches the
/// network; an out-of-range value surfaces here as a 400.
pub async fn get_questions(
    State(state): State<AppState>,
    Query(params): Query<TriviaQuestionParams>,
) -> AppResult<Json<Vec<TriviaQuestion>>> {
    let options = QuestionOptions {
        count: params.count.unwrap_or(DEFAULT_QUESTION_COUNT),
        category: params.category,
        difficulty: params.difficulty,
        kind: params
            .kind
            .as_deref()
            .and_then(QuestionKind::parse)
            .unwrap_or_default(),
    };

    Ok(Json(state.trivia.get_questions(&options).await?))
}

/// GET /api/trivia/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<LookupEntry>>> {
    Ok(Json(state.trivia.list_categories().await?))
}

/// GET /api/trivia/token
pub async fn session_token(State(state): State<AppState>) -> AppResult<Json<SessionTokenResponse>> {
    let token = state.trivia.get_session_token().await?;
    Ok(Json(SessionTokenResponse { token }))
}
