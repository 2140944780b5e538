use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateRecordRequest, DnsRecord, ProviderZone};

/// Error as reported by a provider API, before mapping
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    pub code: Option<String>,
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// What the failed request was about, used when mapping errors
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record id, for `RecordNotFound`
    pub record_id: Option<String>,
    /// Zone name, for `DomainNotFound`
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn domain(domain: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            ..Self::default()
        }
    }

    pub fn record(domain: &str, record_id: &str) -> Self {
        Self {
            record_id: Some(record_id.to_string()),
            domain: Some(domain.to_string()),
        }
    }
}

/// Maps a provider's raw API errors onto [`ProviderError`]
pub(crate) trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shorthand for [`ProviderError::ParseError`]
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Fallback for statuses the mapping does not know
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// The remote directory holding the account's zones and records.
///
/// This is the only collaborator the challenge logic talks to. Implementations own
/// authentication, retries and status-code interpretation; callers only see typed
/// results or a [`ProviderError`].
#[async_trait]
pub trait ZoneDirectory: Send + Sync {
    /// Provider identifier, e.g. `glesys`
    fn id(&self) -> &'static str;

    /// Check the credentials against the remote API.
    ///
    /// Returns `Ok(false)` when the API rejects the credentials and an error for any
    /// other failure.
    async fn validate_credentials(&self) -> Result<bool> {
        match self.list_zones().await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// All zones the current credentials may manage.
    async fn list_zones(&self) -> Result<Vec<ProviderZone>>;

    /// All records under `zone`.
    async fn list_records(&self, zone: &str) -> Result<Vec<DnsRecord>>;

    /// Create a record. Any non-success response is an error.
    async fn create_record(&self, req: &CreateRecordRequest) -> Result<()>;

    /// Delete the record with `record_id` from `zone`.
    async fn delete_record(&self, zone: &str, record_id: &str) -> Result<()>;
}
