//! GleSYS error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{GlesysProvider, PROVIDER_NAME};

/// GleSYS reports HTTP-style status codes inside `response.status.code`.
/// Reference: <https://github.com/glesys/API/wiki>
impl ProviderErrorMapper for GlesysProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // Bad API user or key
            Some("401") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Key lacks the DOMAIN permission or the zone belongs to another account
            Some("403") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Same code for unknown records and unknown domains, the context decides
            Some("404") => match context.record_id {
                Some(record_id) => ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_id,
                    raw_message: Some(raw.message),
                },
                None => ProviderError::DomainNotFound {
                    provider: self.provider_name().to_string(),
                    domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                },
            },

            // Malformed argument (bad host, data or ttl)
            Some("400") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "request".to_string(),
                detail: raw.message,
            },

            Some("429") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }
}
