//! AniLiberty API client
//!
//! Client for the AniLiberty v1 REST API, the primary upstream for
//! episode stream resolution. Covers catalog search, release lookups
//! with inline episode lists, and per-episode detail fetches.

mod client;
mod error;
pub mod models;

pub use client::AnilibertyClient;
pub use error::AnilibertyError;
pub use models::{Episode, Release, ReleaseName};

pub type Result<T> = std::result::Result<T, AnilibertyError>;
