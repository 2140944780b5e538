//! dns01 core library
//!
//! Decides where an ACME dns-01 validation record belongs and manages its lifecycle:
//! - [`zone_matcher`]: pure resolution of a hostname against the account's zones
//! - [`services::ChallengeService`]: create the TXT record on fulfil, find and delete it on
//!   cleanup
//!
//! The remote side is abstracted behind [`dns01_provider::ZoneDirectory`], so this crate
//! performs no I/O of its own.

pub mod error;
pub mod services;
pub mod zone_matcher;

#[cfg(test)]
mod test_utils;

pub use error::{CoreError, CoreResult};
pub use services::ChallengeService;
pub use zone_matcher::{candidates, resolve, HostnameSplit};
