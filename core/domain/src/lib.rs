//! Domain layer: configuration and core services
//!
//! Holds everything the HTTP surface is built on top of: the TTL cache
//! for resolution results, the resolver that walks providers in order,
//! the relay that pipes upstream media bodies through, and the shared
//! HTTP client profiles.

pub mod config;
pub mod services;

pub use config::Config;
