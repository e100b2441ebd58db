//! Background jobs layer
//!
//! Contains timer-based actors that run periodically:
//! - `cache_sweep`: Drops expired resolution cache entries every few minutes

mod actor;
mod cache_sweep;

pub use actor::{ActorHandle, ActorMessage, PeriodicActor};
pub use cache_sweep::{create_cache_sweep_actor, CacheSweepHandle};
