//! AniLibria API client
//!
//! Client for the AniLibria v3 REST API, used as the mirror-backed
//! fallback upstream. The API is served from several interchangeable
//! hosts, so the client walks a base URL list until one answers.
//! Playlist paths in responses are root-relative and must be prefixed
//! with the stream host to become playable.

mod client;
mod error;
pub mod models;

pub use client::AnilibriaClient;
pub use error::AnilibriaError;
pub use models::{Hls, Player, PlayerEpisode, Title};

pub type Result<T> = std::result::Result<T, AnilibriaError>;
