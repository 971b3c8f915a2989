//! Small types shared across the provider clients and the API surface.

use serde::{Deserialize, Serialize};

/// A `{ id, name }` lookup row.
///
/// Both providers expose fixed reference lists in this shape: game genres
/// and platforms on one side, trivia categories on the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub id: u64,
    pub name: String,
}
