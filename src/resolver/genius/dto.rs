//! Genius API Data Transfer Objects
//!
//! These types match EXACTLY what the Genius API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the genius module - convert to domain types.
//!
//! API Reference: https://docs.genius.com
//!
//! We use two endpoints: /search (candidate hits for a free-text query)
//! and /artists/{id} (the full artist record).

use serde::{Deserialize, Serialize};

/// `/search` response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub response: SearchBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchBody {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One search hit. Genius search returns songs; the artist we want is the
/// song's primary artist.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Hit {
    pub result: HitResult,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HitResult {
    pub primary_artist: PrimaryArtist,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrimaryArtist {
    /// Genius artist ID
    pub id: u64,
    /// Display name
    pub name: String,
}

/// `/artists/{id}` response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistResponse {
    pub response: ArtistBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistBody {
    pub artist: Artist,
}

/// Full artist record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    /// Genius artist ID
    pub id: u64,
    /// Canonical artist name
    pub name: String,
    /// Follower count (absent on some records)
    pub followers_count: Option<u64>,
    /// Canonical page URL
    pub url: Option<String>,
    /// Artist image URL
    pub image_url: Option<String>,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub meta: ApiErrorMeta,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorMeta {
    pub status: u16,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
