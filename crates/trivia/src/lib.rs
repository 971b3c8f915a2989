//! Client for the public trivia-question provider.
//!
//! The provider serves HTML-entity-encoded text and a flat
//! correct/incorrect answer split. [`TriviaClient`] decodes every string
//! through a fixed entity table, merges and shuffles the answers, and
//! records where the correct answer landed -- the one transformation in
//! the system where a bug would be silently wrong rather than loud.

pub mod client;
pub mod html;
pub mod models;

pub use client::TriviaClient;
pub use models::{Difficulty, QuestionKind, QuestionOptions, TriviaQuestion};
