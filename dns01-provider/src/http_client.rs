//! Shared HTTP transport
//!
//! Directory implementations build their own `RequestBuilder` (URL, auth, body); this module
//! sends it, classifies transport failures and retries the transient ones.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::RequestBuilder;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Upper bound for a server-provided `Retry-After`.
const MAX_RETRY_AFTER_SECS: u64 = 30;
/// Upper bound for exponential backoff.
const MAX_BACKOFF_MS: u64 = 10_000;

/// Request execution helpers shared by providers
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return the status code and body text.
    ///
    /// HTTP 429 becomes [`ProviderError::RateLimited`] and 502-504 become
    /// [`ProviderError::NetworkError`] so the retry loop can pick them up. Any other status,
    /// including 4xx, is returned as-is for the provider to interpret.
    pub async fn execute_request(
        request: RequestBuilder,
        provider: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider}] POST {url}");

        let response = request
            .send()
            .await
            .map_err(|e| send_error(provider, &e))?;
        let status = response.status().as_u16();
        let retry_after = retry_after_secs(response.headers());

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;
        log::debug!("[{provider}] HTTP {status}: {}", truncate_for_log(&body));

        match status {
            429 => {
                log::warn!("[{provider}] Rate limited, retry_after={retry_after:?}");
                Err(ProviderError::RateLimited {
                    provider: provider.to_string(),
                    retry_after,
                    raw_message: Some(truncate_for_log(&body)),
                })
            }
            502..=504 => {
                log::warn!("[{provider}] Upstream unavailable (HTTP {status})");
                Err(ProviderError::NetworkError {
                    provider: provider.to_string(),
                    detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
                })
            }
            _ => Ok((status, body)),
        }
    }

    /// [`execute_request`](Self::execute_request) with up to `max_retries` retries of
    /// [`retryable`](ProviderError::is_retryable) failures.
    ///
    /// Waits for the server's `Retry-After` (at most 30s) when rate limited, otherwise backs
    /// off exponentially from 100ms up to 10s.
    pub async fn execute_request_with_retry(
        request: RequestBuilder,
        provider: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ProviderError> {
        let mut attempt = 0;
        loop {
            // streaming bodies cannot be replayed
            let Some(current) = request.try_clone() else {
                log::warn!("[{provider}] Request body is not cloneable, sending without retry");
                return Self::execute_request(request, provider, url).await;
            };

            match Self::execute_request(current, provider, url).await {
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    attempt += 1;
                    log::warn!(
                        "[{provider}] Attempt {attempt}/{max_retries} failed, retrying in {:.1}s: {e}",
                        delay.as_secs_f32()
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }
}

fn send_error(provider: &str, e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            provider: provider.to_string(),
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: e.to_string(),
        }
    }
}

/// `Retry-After` in delta-seconds form; HTTP dates are ignored.
fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    match error {
        ProviderError::RateLimited {
            retry_after: Some(secs),
            ..
        } => Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS)),
        _ => backoff_delay(attempt),
    }
}

/// 100ms, 200ms, 400ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let delay_ms = 100_u64.saturating_mul(1_u64 << attempt.min(20));
    Duration::from_millis(delay_ms.min(MAX_BACKOFF_MS))
}
