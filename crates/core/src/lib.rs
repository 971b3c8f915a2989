//! Shared domain types for the GameVerse backend.
//!
//! This crate has no internal dependencies and no I/O. It holds the error
//! taxonomy shared by the upstream clients and the API layer, plus the
//! lookup types and parameter bounds both providers agree on.

pub mod error;
pub mod pagination;
pub mod types;

pub use error::CoreError;
pub use types::LookupEntry;
