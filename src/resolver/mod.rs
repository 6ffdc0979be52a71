//! Artist resolution - disambiguates free-text names against the Genius API.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`genius/dto.rs`) - Exact API response shapes
//! - **Adapters** (`genius/adapter.rs`) - Convert DTOs to domain models
//! - **Client** (`genius/client.rs`) - HTTP client for the Genius API
//! - **Matcher** (`matcher.rs`) - Pure candidate-scoring policy
//! - **Service** (`service.rs`) - The search -> match -> fetch round-trip
//!
//! The remote API is reached through the [`ArtistApi`] trait so the service
//! and the batch orchestrator can be driven by deterministic mocks in tests.

pub mod domain;
pub mod genius;
pub mod matcher;
pub mod service;
pub mod traits;

pub use domain::{CandidateHit, Outcome, ResolveError, ResolvedArtist};
pub use genius::GeniusClient;
pub use service::Resolver;
pub use traits::ArtistApi;
