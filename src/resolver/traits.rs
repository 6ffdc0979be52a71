//! Trait definition for the remote artist API.
//!
//! The Resolver and the batch orchestrator depend on this trait rather than
//! the concrete Genius client, so they can be tested with deterministic
//! mock implementations.

use async_trait::async_trait;

use super::domain::{CandidateHit, ResolveError, ResolvedArtist};
use super::genius::GeniusClient;

/// Capability trait for the remote search/lookup API.
///
/// Two operations, matching the remote service: search a free-text query
/// for candidate hits, and fetch the full record for one candidate.
#[async_trait]
pub trait ArtistApi: Send + Sync {
    /// Search for candidate artists matching a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<CandidateHit>, ResolveError>;

    /// Fetch the full artist record by identifier.
    async fn fetch(&self, id: u64) -> Result<ResolvedArtist, ResolveError>;
}

#[async_trait]
impl ArtistApi for GeniusClient {
    async fn search(&self, query: &str) -> Result<Vec<CandidateHit>, ResolveError> {
        self.search(query).await
    }

    async fn fetch(&self, id: u64) -> Result<ResolvedArtist, ResolveError> {
        self.fetch_artist(id).await
    }
}

// A shared handle works wherever the API itself does; callers can keep a
// reference to an instrumented implementation while the Resolver owns one.
#[async_trait]
impl<T: ArtistApi + ?Sized> ArtistApi for std::sync::Arc<T> {
    async fn search(&self, query: &str) -> Result<Vec<CandidateHit>, ResolveError> {
        (**self).search(query).await
    }

    async fn fetch(&self, id: u64) -> Result<ResolvedArtist, ResolveError> {
        (**self).fetch(id).await
    }
}
