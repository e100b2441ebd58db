//! Infrastructure layer
//!
//! Contains:
//! - Error types
//! - Application state
//! - Startup banner

pub mod banner;
pub mod error;
pub mod state;

pub use banner::print_banner;
pub use domain::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
