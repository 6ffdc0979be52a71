//! Genius API binding: HTTP client, response DTOs, and DTO-to-domain adapters.

mod adapter;
mod client;
mod dto;

pub use client::GeniusClient;
