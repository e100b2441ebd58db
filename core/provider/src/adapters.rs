//! Provider adapters for concrete upstream sources

mod anicli_adapter;
mod aniliberty_adapter;
mod anilibria_adapter;

pub use anicli_adapter::AnicliProvider;
pub use aniliberty_adapter::AnilibertyProvider;
pub use anilibria_adapter::AnilibriaProvider;
