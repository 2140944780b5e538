//! Helpers shared by provider implementations

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client with connect and request timeouts
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(concat!("dns01/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ Names ============

/// Name used by most DNS APIs for the zone apex.
pub const APEX_HOST: &str = "@";

/// Strip the trailing root dot
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// API host field -> relative record name (`"@"` and `""` are the apex).
pub fn host_to_record_name(host: &str) -> Option<String> {
    let host = host.trim_end_matches('.');
    if host.is_empty() || host == APEX_HOST {
        None
    } else {
        Some(host.to_string())
    }
}

/// Relative record name -> API host field.
pub fn record_name_to_host(record_name: Option<&str>) -> &str {
    match record_name {
        Some(name) if !name.is_empty() => name,
        _ => APEX_HOST,
    }
}
