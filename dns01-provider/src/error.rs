use std::fmt;

use serde::{Deserialize, Serialize};

/// Unified error type for all zone directory operations.
///
/// Every variant names the `provider` that produced it. Errors serialize with a `code` tag so
/// they can be reported as structured data.
///
/// # Retryable Errors
///
/// [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout) and
/// [`RateLimited`](Self::RateLimited) are transient. The transport retries them with
/// exponential backoff; everything else is returned to the caller untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// Connection refused, DNS failure, unreadable body or a 502-504 gateway error.
    NetworkError { provider: String, detail: String },

    /// The API user or key was rejected.
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// The credentials are valid but lack access to the requested zone or action.
    PermissionDenied {
        provider: String,
        raw_message: Option<String>,
    },

    /// No record with `record_id` exists.
    RecordNotFound {
        provider: String,
        record_id: String,
        raw_message: Option<String>,
    },

    /// The zone is not on the account.
    DomainNotFound {
        provider: String,
        domain: String,
        raw_message: Option<String>,
    },

    /// The API rejected a request parameter.
    InvalidParameter {
        provider: String,
        /// Name of the offending parameter, or `request` when the API does not say.
        param: String,
        detail: String,
    },

    /// HTTP 429.
    RateLimited {
        provider: String,
        /// Seconds from the `Retry-After` header.
        retry_after: Option<u64>,
        raw_message: Option<String>,
    },

    Timeout { provider: String, detail: String },

    /// The reply was not in the expected shape.
    ParseError { provider: String, detail: String },

    /// A status the provider mapping does not recognize.
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the error is expected (bad credentials, missing resource, ...), used to pick a log level.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::RecordNotFound { .. }
                | Self::DomainNotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Whether the transport may retry the request that produced this error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::InvalidCredentials { provider, .. }
            | Self::PermissionDenied { provider, .. }
            | Self::RecordNotFound { provider, .. }
            | Self::DomainNotFound { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::Unknown { provider, .. } => provider,
        }
    }
}

/// Writes `head`, followed by `: msg` when the API supplied a message.
fn with_message(f: &mut fmt::Formatter<'_>, head: &str, msg: Option<&str>) -> fmt::Result {
    match msg {
        Some(msg) => write!(f, "{head}: {msg}"),
        None => f.write_str(head),
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.provider())?;
        match self {
            Self::NetworkError { detail, .. } => write!(f, "Network error: {detail}"),
            Self::InvalidCredentials { raw_message, .. } => {
                with_message(f, "Invalid credentials", raw_message.as_deref())
            }
            Self::PermissionDenied { raw_message, .. } => {
                with_message(f, "Permission denied", raw_message.as_deref())
            }
            Self::RecordNotFound { record_id, .. } => write!(f, "Record '{record_id}' not found"),
            Self::DomainNotFound {
                domain,
                raw_message,
                ..
            } => with_message(f, &format!("Domain '{domain}' not found"), raw_message.as_deref()),
            Self::InvalidParameter { param, detail, .. } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
            Self::RateLimited {
                retry_after: Some(secs),
                ..
            } => write!(f, "Rate limited (retry after {secs}s)"),
            Self::RateLimited { .. } => f.write_str("Rate limited"),
            Self::Timeout { detail, .. } => write!(f, "Request timeout: {detail}"),
            Self::ParseError { detail, .. } => write!(f, "Parse error: {detail}"),
            Self::Unknown {
                raw_code: Some(code),
                raw_message,
                ..
            } => write!(f, "{code} {raw_message}"),
            Self::Unknown { raw_message, .. } => f.write_str(raw_message),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
