//! Unified video source abstraction layer
//!
//! This crate provides a standardized interface for resolving episode
//! stream URLs from different upstream sources (AniLiberty, AniLibria
//! and the legacy anicli bridge).
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │              VideoProvider trait               │
//! │  resolve_video(anime, ep)     -> Option<Url>   │
//! │  resolve_qualities(anime, ep) -> QualitySet    │
//! └────────────────────────────────────────────────┘
//!         △               △               △
//!         │               │               │
//! ┌───────┴──────┐ ┌──────┴───────┐ ┌─────┴──────┐
//! │  Aniliberty  │ │  Anilibria   │ │   Anicli   │
//! │   Provider   │ │   Provider   │ │  Provider  │
//! └──────────────┘ └──────────────┘ └────────────┘
//! ```
//!
//! Every adapter folds its upstream's schema into one contract:
//! `Ok(Some(_))` on success, `Ok(None)` when the upstream answered but
//! does not carry the episode, `Err` when every configured endpoint
//! failed at the transport or API level.

mod adapters;
mod error;
mod models;
mod provider;

pub use adapters::{AnicliProvider, AnilibertyProvider, AnilibriaProvider};
pub use error::ProviderError;
pub use models::QualitySet;
pub use provider::VideoProvider;
