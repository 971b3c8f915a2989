//! Normalized game projections and the raw provider payloads behind them.
//!
//! The provider nests associations (`genres.name`, `cover.url`,
//! `involved_companies.company.name`, ...) and omits any field a record
//! lacks. The raw structs tolerate every omission via `#[serde(default)]`;
//! the public [`GameSummary`] / [`GameDetail`] shapes flatten the nesting
//! into plain strings and are the only thing the API layer ever serves.

use serde::{Deserialize, Serialize};

use gameverse_core::pagination::{clamp_search_limit, clamp_search_offset};

/// A catalog search request with bounds already enforced.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub term: String,
    pub limit: u32,
    pub offset: u32,
}

impl SearchQuery {
    /// Build a query from raw caller input, clamping `limit` and `offset`
    /// into their allowed ranges.
    pub fn new(term: impl Into<String>, limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            term: term.into(),
            limit: clamp_search_limit(limit),
            offset: clamp_search_offset(offset),
        }
    }
}

/// Normalized projection of a game row in search results.
///
/// Identity is the provider's numeric id. Read-only: fetched and reshaped
/// per request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: u64,
    pub name: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub release_timestamp: Option<i64>,
    pub summary: Option<String>,
    pub cover_url: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
}

/// Full projection served by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: u64,
    pub name: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub release_timestamp: Option<i64>,
    pub summary: Option<String>,
    pub storyline: Option<String>,
    pub cover_url: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub involved_companies: Vec<String>,
    pub game_modes: Vec<String>,
    pub themes: Vec<String>,
    pub player_perspectives: Vec<String>,
    pub screenshots: Vec<String>,
    pub videos: Vec<String>,
    pub websites: Vec<Website>,
}

/// An external site associated with a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Website {
    pub category: Option<u32>,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Raw provider payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawGame {
    pub id: u64,
    pub name: String,
    pub genres: Vec<NamedRef>,
    pub platforms: Vec<NamedRef>,
    pub first_release_date: Option<i64>,
    pub summary: Option<String>,
    pub storyline: Option<String>,
    pub cover: Option<ImageRef>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub involved_companies: Vec<CompanyRef>,
    pub game_modes: Vec<NamedRef>,
    pub themes: Vec<NamedRef>,
    pub player_perspectives: Vec<NamedRef>,
    pub screenshots: Vec<ImageRef>,
    pub videos: Vec<VideoRef>,
    pub websites: Vec<WebsiteRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct NamedRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ImageRef {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct VideoRef {
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CompanyRef {
    pub company: Option<NamedRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WebsiteRef {
    pub category: Option<u32>,
    pub url: Option<String>,
}

fn names(refs: Vec<NamedRef>) -> Vec<String> {
    refs.into_iter().map(|r| r.name).collect()
}

impl From<RawGame> for GameSummary {
    fn from(raw: RawGame) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            genres: names(raw.genres),
            platforms: names(raw.platforms),
            release_timestamp: raw.first_release_date,
            summary: raw.summary,
            cover_url: raw.cover.and_then(|c| c.url),
            rating: raw.rating,
            rating_count: raw.rating_count,
        }
    }
}

impl From<RawGame> for GameDetail {
    fn from(raw: RawGame) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            genres: names(raw.genres),
            platforms: names(raw.platforms),
            release_timestamp: raw.first_release_date,
            summary: raw.summary,
            storyline: raw.storyline,
            cover_url: raw.cover.and_then(|c| c.url),
            rating: raw.rating,
            rating_count: raw.rating_count,
            involved_companies: raw
                .involved_companies
                .into_iter()
                .filter_map(|c| c.company.map(|company| company.name))
                .collect(),
            game_modes: names(raw.game_modes),
            themes: names(raw.themes),
            player_perspectives: names(raw.player_perspectives),
            screenshots: raw
                .screenshots
                .into_iter()
                .filter_map(|s| s.url)
                .collect(),
            videos: raw.videos.into_iter().filter_map(|v| v.video_id).collect(),
            websites: raw
                .websites
                .into_iter()
                .filter_map(|w| {
                    w.url.map(|url| Website {
                        category: w.category,
                        url,
                    })
                })
                .collect(),
        }
    }
}
