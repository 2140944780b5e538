//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns01_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// None of the account's zones is a suffix of the hostname
    #[error("No managed zone found for '{hostname}'")]
    ZoneNotFound { hostname: String },

    /// The TXT record to remove is not present in the zone
    #[error("TXT record for '{hostname}' not found in zone '{zone}' (record name: {})", .record_name.as_deref().unwrap_or("@"))]
    RecordNotFound {
        hostname: String,
        zone: String,
        record_name: Option<String>,
    },

    /// The zone directory rejected a request
    #[error("{0}")]
    Directory(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (misconfiguration, resource does not exist, etc.), used
    /// for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ZoneNotFound { .. } | Self::RecordNotFound { .. } => true,
            Self::Directory(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
