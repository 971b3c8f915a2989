//! Error taxonomy for upstream provider interactions.
//!
//! Every failure the upstream clients can produce is one of these variants,
//! so the API layer can map each kind to a distinct HTTP status without
//! inspecting provider-specific details. Only one downgrade to a success
//! value exists anywhere in the system: a zero-match (or non-array) search
//! response becomes an empty list, not an error.

/// Domain-level error shared by the game and trivia upstream clients.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Provider credentials are absent from configuration.
    ///
    /// This is an expected degraded state, never retried, and must stay
    /// distinguishable from a rejected credential exchange so the API layer
    /// can answer 503 (misconfigured) instead of 502 (upstream broken).
    #[error("game provider credentials are not configured")]
    MissingCredentials,

    /// The credential exchange was rejected, or a data call answered 401.
    ///
    /// Not retried automatically; retrying a rejected exchange only
    /// amplifies credential lockout.
    #[error("upstream authentication failed (status {status})")]
    UpstreamAuth { status: u16 },

    /// The upstream returned a non-success status or a payload whose shape
    /// does not match its documented contract.
    #[error("upstream returned status {status}: {message}")]
    UpstreamProtocol { status: u16, message: String },

    /// The upstream could not be reached at all (DNS, connect, TLS).
    #[error("upstream unreachable: {0}")]
    Transport(String),

    /// The upstream call exceeded its request timeout.
    #[error("upstream request timed out")]
    UpstreamTimeout,

    /// A caller-supplied parameter is outside its allowed range. Raised
    /// before any upstream call is attempted.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The upstream affirmatively reported that no such entity exists.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u64 },
}
