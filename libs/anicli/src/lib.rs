//! anicli bridge client
//!
//! Client for the legacy anicli HTTP bridge, the last-resort upstream.
//! The bridge is a thin wrapper around a scraper process and usually
//! runs next to this service, so the default base URL is localhost.

mod client;
mod error;
pub mod models;

pub use client::AnicliClient;
pub use error::AnicliError;
pub use models::{QualitiesPayload, QualityLinks, VideoLink};

pub type Result<T> = std::result::Result<T, AnicliError>;
