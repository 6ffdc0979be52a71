//! Internal domain models for artist resolution.
//!
//! These types are OUR types - they don't change when the Genius API changes.
//! All external API responses get converted into these types via adapters.

use serde::Serialize;

/// One ambiguous hit from a text search, before disambiguation.
///
/// Exists only between the search call and the matcher; the winning hit's
/// id drives the detail fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateHit {
    /// Genius artist ID
    pub id: u64,
    /// Display name as returned by the search endpoint
    pub name: String,
}

/// Fully resolved artist record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArtist {
    /// Genius artist ID
    pub id: u64,
    /// Canonical artist name
    pub name: String,
    /// Follower count (not present on every artist record)
    pub followers_count: Option<u64>,
    /// Canonical page URL
    pub url: Option<String>,
    /// Artist image URL
    pub image_url: Option<String>,
}

/// Terminal result of resolving one query.
///
/// Every query produces exactly one Outcome. `NotFound` means the search
/// legitimately produced no usable candidate; `Error` means a remote call
/// failed and carries the reason, so downstream consumers can tell the two
/// apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(ResolvedArtist),
    NotFound,
    Error(String),
}

impl Outcome {
    /// The resolved artist, if this outcome carries one.
    pub fn artist(&self) -> Option<&ResolvedArtist> {
        match self {
            Outcome::Found(artist) => Some(artist),
            _ => None,
        }
    }

    /// The failure reason, if this outcome is an error.
    pub fn error_reason(&self) -> Option<&str> {
        match self {
            Outcome::Error(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// Errors that can occur while talking to the remote API.
///
/// These never cross the Resolver boundary - the Resolver folds them into
/// `Outcome::Error` so one item's failure cannot abort a batch.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("rate limited - try again later")]
    RateLimited,
}
