//! HTTP client for the trivia-question provider.
//!
//! Three endpoints, all GET: a question batch (with the provider's own
//! response-code envelope), the category reference list, and a session
//! token that deduplicates questions across batches. No authentication.

use std::time::Duration;

use rand::seq::SliceRandom;

use gameverse_core::pagination::validate_question_count;
use gameverse_core::{CoreError, LookupEntry};

use crate::html::decode_entities;
use crate::models::{
    Difficulty, QuestionOptions, RawCategoriesResponse, RawQuestion, RawQuestionsResponse,
    RawTokenResponse, TriviaQuestion,
};

/// Production base URL. Fixed; overridable only through
/// [`TriviaClient::with_base_url`] so tests can target a local mock.
pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// Category bucket used when the caller does not pick one: video games.
pub const DEFAULT_CATEGORY: u32 = 15;

const QUESTIONS_PATH: &str = "/api.php";
const CATEGORIES_PATH: &str = "/api_category.php";
const TOKEN_PATH: &str = "/api_token.php";

/// Timeout applied to every upstream call.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the trivia provider. Cheap to share behind an `Arc`.
pub struct TriviaClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for TriviaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TriviaClient {
    /// Client against the production provider.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternate base URL (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("reqwest client construction cannot fail with static options");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch and process a question batch.
    ///
    /// Validates `count` before any network call, defaults the category
    /// to the video-games bucket, and silently drops a malformed
    /// difficulty. A non-zero provider response code is a hard failure:
    /// it means the provider rejected the parameters, which is not the
    /// same as "no questions matched".
    pub async fn get_questions(
        &self,
        options: &QuestionOptions,
    ) -> Result<Vec<TriviaQuestion>, CoreError> {
        let count = validate_question_count(options.count)?;

        let mut params: Vec<(&str, String)> = vec![
            ("amount", count.to_string()),
            ("type", options.kind.as_str().to_string()),
            (
                "category",
                options.category.unwrap_or(DEFAULT_CATEGORY).to_string(),
            ),
        ];

        if let Some(difficulty) = options.difficulty.as_deref().and_then(Difficulty::parse) {
            params.push(("difficulty", difficulty.as_str().to_string()));
        }

        let payload: RawQuestionsResponse = self.get_json(QUESTIONS_PATH, &params).await?;

        if payload.response_code != 0 {
            tracing::warn!(
                response_code = payload.response_code,
                "trivia provider rejected the question request"
            );
            return Err(CoreError::UpstreamProtocol {
                status: 200,
                message: format!("provider response code {}", payload.response_code),
            });
        }

        let questions = payload
            .results
            .into_iter()
            .enumerate()
            .map(|(index, raw)| process_question(index, raw))
            .collect::<Vec<_>>();

        tracing::debug!(count = questions.len(), "question batch processed");
        Ok(questions)
    }

    /// Fetch the category reference list, entity-decoded.
    pub async fn list_categories(&self) -> Result<Vec<LookupEntry>, CoreError> {
        let payload: RawCategoriesResponse = self.get_json(CATEGORIES_PATH, &[]).await?;

        let Some(categories) = payload.trivia_categories else {
            return Err(CoreError::UpstreamProtocol {
                status: 200,
                message: "categories payload lacks trivia_categories".to_string(),
            });
        };

        Ok(categories
            .into_iter()
            .map(|c| LookupEntry {
                id: c.id,
                name: decode_entities(&c.name),
            })
            .collect())
    }

    /// Request a session token that keeps batches free of repeats.
    pub async fn get_session_token(&self) -> Result<String, CoreError> {
        let payload: RawTokenResponse = self
            .get_json(TOKEN_PATH, &[("command", "request".to_string())])
            .await?;

        if payload.response_code != 0 {
            return Err(CoreError::UpstreamProtocol {
                status: 200,
                message: format!("provider response code {}", payload.response_code),
            });
        }

        payload.token.ok_or_else(|| CoreError::UpstreamProtocol {
            status: 200,
            message: "token payload lacks a token field".to_string(),
        })
    }

    /// GET a provider endpoint and decode its JSON payload.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CoreError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(
                path,
                status = status.as_u16(),
                body = %body,
                "trivia provider returned an error"
            );
            return Err(CoreError::UpstreamProtocol {
                status: status.as_u16(),
                message: format!("{path} request failed"),
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

/// Decode, merge, and shuffle one raw question.
///
/// The correct answer's slot is recovered by value-equality search over
/// the decoded string after the shuffle, not by tracking a position
/// through the shuffle, so the invariant
/// `options[correct_index] == correct_answer` holds by construction.
fn process_question(index: usize, raw: RawQuestion) -> TriviaQuestion {
    let question_text = decode_entities(&raw.question);
    let category = decode_entities(&raw.category);
    let correct_answer = decode_entities(&raw.correct_answer);

    let mut options = Vec::with_capacity(raw.incorrect_answers.len() + 1);
    options.push(correct_answer.clone());
    options.extend(raw.incorrect_answers.iter().map(|a| decode_entities(a)));
    options.shuffle(&mut rand::rng());

    let correct_index = options
        .iter()
        .position(|option| *option == correct_answer)
        .expect("options always contain the correct answer");

    TriviaQuestion {
        id: index,
        category,
        difficulty: raw.difficulty,
        kind: raw.kind,
        question_text,
        options,
        correct_index,
        correct_answer,
    }
}

/// Map a transport-level [`reqwest::Error`] into the domain taxonomy.
fn request_error(err: reqwest::Error) -> CoreError {
    if err.is_timeout() {
        CoreError::UpstreamTimeout
    } else {
        CoreError::Transport(err.to_string())
    }
}
