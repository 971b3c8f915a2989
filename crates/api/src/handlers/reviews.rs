//! Handler for review submissions.
//!
//! Reviews are acknowledged but not persisted: the submission is
//! validated, logged, and answered with a success flag.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Incoming review payload. All fields are required.
#[derive(Debug, Deserialize)]
pub struct ReviewSubmission {
    pub game_id: Option<u64>,
    pub user_id: Option<String>,
    pub review: Option<String>,
}

/// Acknowledgement payload.
#[derive(Debug, Serialize)]
pub struct ReviewAck {
    pub success: bool,
}

/// POST /api/reviews
pub async fn submit_review(Json(submission): Json<ReviewSubmission>) -> AppResult<Json<ReviewAck>> {
    let game_id = submission
        .game_id
        .ok_or_else(|| AppError::BadRequest("game_id is required".to_string()))?;

    let user_id = submission
        .user_id
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("user_id is required".to_string()))?;

    let review = submission
        .review
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("review is required".to_string()))?;

    tracing::info!(
        game_id,
        user_id = %user_id,
        chars = review.chars().count(),
        "review received"
    );

    Ok(Json(ReviewAck { success: true }))
}
