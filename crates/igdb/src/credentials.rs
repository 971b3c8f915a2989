//! Provider credentials for the client-credentials exchange.

use std::fmt;

/// Client id/secret pair for the game-metadata provider.
///
/// Immutable for the process lifetime. Absence of credentials is an
/// expected, valid state (the catalog runs degraded); presence is decided
/// once at configuration time, never looked up ambiently at call sites.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Build credentials from optional configuration values.
    ///
    /// Returns `None` unless both values are present and non-empty, so a
    /// half-configured pair behaves exactly like an absent one.
    pub fn from_parts(client_id: Option<String>, client_secret: Option<String>) -> Option<Self> {
        match (client_id, client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Some(Self::new(id, secret))
            }
            _ => None,
        }
    }

    /// Public client identifier, sent as the `Client-ID` header.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

// The secret must never reach logs or error bodies, so Debug redacts it.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
