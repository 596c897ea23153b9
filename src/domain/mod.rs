//! Typed records produced by the validation layer.

pub mod filters;
pub mod fleet;
pub mod types;
