pub mod games;
pub mod reviews;
pub mod trivia;
