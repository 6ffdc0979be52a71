//! Converts Genius DTOs into domain types.
//!
//! Keeps the API's response shapes out of the rest of the codebase.

use super::dto;
use crate::resolver::domain::{CandidateHit, ResolvedArtist};

/// Extract the candidate artist from each search hit.
pub fn to_candidates(response: dto::SearchResponse) -> Vec<CandidateHit> {
    response
        .response
        .hits
        .into_iter()
        .map(|hit| CandidateHit {
            id: hit.result.primary_artist.id,
            name: hit.result.primary_artist.name,
        })
        .collect()
}

/// Map a full artist record into the domain type.
pub fn to_artist(response: dto::ArtistResponse) -> ResolvedArtist {
    let artist = response.response.artist;
    ResolvedArtist {
        id: artist.id,
        name: artist.name,
        followers_count: artist.followers_count,
        url: artist.url,
        image_url: artist.image_url,
    }
}
