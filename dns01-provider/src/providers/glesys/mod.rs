//! GleSYS DNS Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) use types::{
    AddRecordParams, DeleteRecordParams, DomainListPayload, GlesysRecord, ListRecordsParams,
    RecordListPayload,
};

pub(crate) const GLESYS_API_BASE: &str = "https://api.glesys.com";
pub(crate) const PROVIDER_NAME: &str = "glesys";

/// GleSYS DNS provider implementation.
///
/// Talks to the JSON flavour of the GleSYS API with HTTP basic auth (API user and API key).
///
/// # Construction
///
/// ```rust,no_run
/// use dns01_provider::GlesysProvider;
///
/// let provider = GlesysProvider::new("CL12345".to_string(), "api-key".to_string())?;
/// # Ok::<(), dns01_provider::ProviderError>(())
/// ```
pub struct GlesysProvider {
    pub(crate) client: Client,
    pub(crate) user: String,
    pub(crate) password: String,
    pub(crate) base_url: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`GlesysProvider`] with configurable endpoint and retry behavior.
pub struct GlesysProviderBuilder {
    user: String,
    password: String,
    base_url: String,
    max_retries: u32,
}

impl GlesysProviderBuilder {
    fn new(user: String, password: String) -> Self {
        Self {
            user,
            password,
            base_url: GLESYS_API_BASE.to_string(),
            max_retries: 2,
        }
    }

    /// Override the API endpoint (default: `https://api.glesys.com`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the maximum number of automatic retries for transient errors (default: 2).
    ///
    /// Only read-only and delete calls are retried; `addrecord` is always sent once.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the [`GlesysProvider`] instance.
    pub fn build(self) -> Result<GlesysProvider> {
        Ok(GlesysProvider {
            client: create_http_client(PROVIDER_NAME)?,
            user: self.user,
            password: self.password,
            base_url: self.base_url,
            max_retries: self.max_retries,
        })
    }
}

impl GlesysProvider {
    /// Creates a new GleSYS provider with default settings (2 retries).
    pub fn new(user: String, password: String) -> Result<Self> {
        Self::builder(user, password).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(user: String, password: String) -> GlesysProviderBuilder {
        GlesysProviderBuilder::new(user, password)
    }
}

impl std::fmt::Debug for GlesysProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlesysProvider")
            .field("user", &self.user)
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}
