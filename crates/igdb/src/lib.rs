//! Client for the IGDB game-metadata provider.
//!
//! IGDB sits behind the Twitch identity service: every data call carries a
//! bearer token obtained through an OAuth client-credentials exchange.
//! [`TokenCache`] owns that token (cache until invalidated, re-acquire on
//! demand); [`IgdbClient`] wraps the data endpoints (search, detail by id,
//! genre and platform lookups) and normalizes the provider's payloads into
//! the stable shapes the API layer serves.

pub mod client;
pub mod credentials;
pub mod models;
pub mod token;

pub use client::{IgdbClient, IgdbConfig};
pub use credentials::Credentials;
pub use models::{GameDetail, GameSummary, SearchQuery, Website};
pub use token::TokenCache;
