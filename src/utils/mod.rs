pub mod config;
pub mod query;
pub(crate) mod serde_helpers;
