//! Zone directory implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "glesys")]
mod glesys;

#[cfg(feature = "glesys")]
pub use glesys::{GlesysProvider, GlesysProviderBuilder};
