//! DTO modules that bridge services with the HTTP API.

#[cfg(feature = "server")]
pub mod api;
pub mod filters;
