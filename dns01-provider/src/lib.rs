//! # dns01-provider
//!
//! The zone directory side of ACME dns-01 validation: list the zones an account may
//! manage, list the records of a zone, create a TXT record and delete it again.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [GleSYS](https://glesys.se/) | `glesys` | HTTP Basic (API user + API key) |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)* — Enable all providers listed above.
//! - **`glesys`** — Enable the GleSYS provider.
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns01_provider::{create_directory, CreateRecordRequest, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = create_directory(ProviderCredentials::Glesys {
//!         user: "CL12345".to_string(),
//!         password: "api-key".to_string(),
//!     })?;
//!
//!     for zone in directory.list_zones().await? {
//!         println!("{}", zone.name);
//!     }
//!
//!     let request = CreateRecordRequest::txt(
//!         "example.org",
//!         Some("_acme-challenge".to_string()),
//!         "validation-token",
//!         Some(60),
//!     );
//!     directory.create_record(&request).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All directory operations return [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried with
//! exponential backoff inside the transport; everything else is returned as-is.

mod error;
mod factory;
// transport helpers are only reachable through a provider
#[cfg_attr(not(feature = "glesys"), allow(dead_code))]
mod http_client;
#[cfg_attr(not(feature = "glesys"), allow(dead_code))]
mod providers;
#[cfg_attr(not(feature = "glesys"), allow(dead_code))]
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::create_directory;

// Internal traits (error mapping) are not exported
pub use traits::ZoneDirectory;

pub use types::{CreateRecordRequest, DnsRecord, ProviderCredentials, ProviderZone, TXT_RECORD_TYPE};

pub use utils::log_sanitizer;

#[cfg(feature = "glesys")]
pub use providers::{GlesysProvider, GlesysProviderBuilder};
