//! HTTP handlers for the carros resource.

pub mod car;
pub use car::*;
