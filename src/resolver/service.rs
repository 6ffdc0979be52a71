//! The Resolver - one remote round-trip per query.
//!
//! Flow: text search -> matcher picks the best candidate -> detail fetch by
//! id -> normalized record. Exactly two network calls on the success path,
//! one on the not-found path, no retries.
//!
//! Every remote failure is folded into `Outcome::Error` here; nothing
//! escapes to the caller. The batch orchestrator runs many of these
//! concurrently and one item's failure must never abort the batch.

use super::domain::Outcome;
use super::matcher;
use super::traits::ArtistApi;

/// Resolves a single free-text query to at most one artist record.
pub struct Resolver<A: ArtistApi> {
    api: A,
}

impl<A: ArtistApi> Resolver<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Resolve one query to its terminal outcome.
    pub async fn resolve(&self, query: &str) -> Outcome {
        let hits = match self.api.search(query).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(query, error = %e, "search failed");
                return Outcome::Error(e.to_string());
            }
        };

        let Some(best) = matcher::pick_best(query, &hits) else {
            tracing::debug!(query, "no candidates");
            return Outcome::NotFound;
        };

        match self.api.fetch(best.id).await {
            Ok(artist) => {
                tracing::debug!(query, artist = %artist.name, id = artist.id, "resolved");
                Outcome::Found(artist)
            }
            Err(e) => {
                tracing::warn!(query, id = best.id, error = %e, "detail fetch failed");
                Outcome::Error(e.to_string())
            }
        }
    }
}
