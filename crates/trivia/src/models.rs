//! Request and question types for the trivia provider.

use serde::{Deserialize, Serialize};

use gameverse_core::pagination::DEFAULT_QUESTION_COUNT;

/// Question difficulty accepted by the provider.
///
/// A closed set: anything that does not parse into one of these is
/// dropped before dispatch rather than forwarded malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Case-insensitive parse; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Question format requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuestionKind {
    #[default]
    Multiple,
    Boolean,
}

impl QuestionKind {
    /// Case-insensitive parse; unknown values yield `None` (callers fall
    /// back to the default, matching the difficulty-drop behavior).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "multiple" => Some(Self::Multiple),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Multiple => "multiple",
            Self::Boolean => "boolean",
        }
    }
}

/// Raw caller options for a question batch.
///
/// `count` is validated (not clamped) inside the client so an
/// out-of-range request fails before any network call. `difficulty`
/// stays a raw string here; malformed values are dropped at dispatch.
#[derive(Debug, Clone)]
pub struct QuestionOptions {
    pub count: i64,
    pub category: Option<u32>,
    pub difficulty: Option<String>,
    pub kind: QuestionKind,
}

impl Default for QuestionOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_QUESTION_COUNT,
            category: None,
            difficulty: None,
            kind: QuestionKind::default(),
        }
    }
}

/// A processed question ready to serve: decoded text, shuffled options,
/// and the invariant `options[correct_index] == correct_answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaQuestion {
    /// Ordinal of the question within its batch.
    pub id: usize,
    pub category: String,
    pub difficulty: String,
    pub kind: String,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub correct_answer: String,
}

// ---------------------------------------------------------------------------
// Raw provider payloads
// ---------------------------------------------------------------------------

/// The questions endpoint wraps results in a response code; any non-zero
/// code is a provider-level rejection even under HTTP 200.
#[derive(Debug, Deserialize)]
pub(crate) struct RawQuestionsResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawQuestion {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCategoriesResponse {
    pub trivia_categories: Option<Vec<RawCategory>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCategory {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTokenResponse {
    pub response_code: i64,
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("Medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
    }

    #[test]
    fn unknown_difficulty_is_dropped() {
        assert_eq!(Difficulty::parse("extreme"), None);
        assert_eq!(Difficulty::parse(""), None);
    }

    #[test]
    fn question_kind_defaults_to_multiple() {
        assert_eq!(QuestionKind::default(), QuestionKind::Multiple);
        assert_eq!(QuestionKind::parse("boolean"), Some(QuestionKind::Boolean));
        assert_eq!(QuestionKind::parse("essay"), None);
    }
}
