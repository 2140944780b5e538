//! GleSYS HTTP request method

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::GlesysProvider;
use super::types::{GlesysEnvelope, GlesysStatus};

/// Status code GleSYS reports for a successful call.
const STATUS_OK: &str = "200";

impl GlesysProvider {
    /// Execute an idempotent GleSYS API call, retrying transient failures.
    ///
    /// Every call is `POST {base}/{module}/{action}/` with form-encoded parameters and
    /// basic auth. The reply carries its own status in `response.status`; anything other
    /// than 200 is mapped through [`ProviderErrorMapper`].
    pub(crate) async fn request<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        module: &str,
        action: &str,
        params: Option<&P>,
        ctx: ErrorContext,
    ) -> Result<T> {
        self.send(module, action, params, ctx, self.max_retries).await
    }

    /// Like [`request`](Self::request) but sent exactly once.
    ///
    /// For calls that change state on every delivery (`addrecord`): a gateway error or a
    /// timeout may arrive after GleSYS already stored the change.
    pub(crate) async fn request_once<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        module: &str,
        action: &str,
        params: Option<&P>,
        ctx: ErrorContext,
    ) -> Result<T> {
        self.send(module, action, params, ctx, 0).await
    }

    async fn send<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        module: &str,
        action: &str,
        params: Option<&P>,
        ctx: ErrorContext,
        max_retries: u32,
    ) -> Result<T> {
        let url = format!("{}/{module}/{action}/", self.base_url);

        let mut request = self
            .client
            .post(&url)
            .basic_auth(&self.user, Some(&self.password))
            .header("Accept", "application/json");
        if let Some(params) = params {
            request = request.form(params);
        }

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            &url,
            max_retries,
        )
        .await?;

        // Error replies (401, 404, ...) still carry the JSON envelope
        let envelope: GlesysEnvelope = match serde_json::from_str(&response_text) {
            Ok(envelope) => envelope,
            Err(_) if status >= 400 => {
                return Err(ProviderError::NetworkError {
                    provider: self.provider_name().to_string(),
                    detail: format!("HTTP {status}: {}", truncate_for_log(&response_text)),
                });
            }
            Err(e) => {
                log::error!("[{}] JSON parse failed: {e}", self.provider_name());
                return Err(self.parse_error(e));
            }
        };

        let mut response = envelope.response;
        let api_status: GlesysStatus = response
            .get_mut("status")
            .map(serde_json::Value::take)
            .ok_or_else(|| self.parse_error("response has no status field"))
            .and_then(|v| serde_json::from_value(v).map_err(|e| self.parse_error(e)))?;

        if api_status.code != STATUS_OK {
            let message = match response.get("debug") {
                Some(debug) if !debug.is_null() => {
                    format!("{} (debug: {debug})", api_status.text)
                }
                _ => api_status.text,
            };
            log::error!(
                "[{}] API error: {} - {}",
                self.provider_name(),
                api_status.code,
                truncate_for_log(&message)
            );
            return Err(self.map_error(RawApiError::with_code(api_status.code, message), ctx));
        }

        serde_json::from_value(response).map_err(|e| self.parse_error(e))
    }
}
