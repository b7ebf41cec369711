//! Generic HTTP client tools
//!
//! Request execution and response parsing shared by the REST client. Callers
//! build the `RequestBuilder` themselves (URL, auth, headers, body); this module
//! sends it, logs the exchange and hands back status and body.
//!
//! There is no retry here. A failed call surfaces immediately as
//! [`ZoneError::Transport`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{Result, ZoneError};
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ZoneError::Config {
            detail: format!("failed to build HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends the request and returns `(status_code, response_text)`.
    ///
    /// Only connection-level failures are errors here; non-2xx statuses are
    /// returned to the caller for provider-specific error mapping.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        operation: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            let detail = if e.is_timeout() {
                format!("request timed out: {e}")
            } else {
                e.to_string()
            };
            ZoneError::transport(operation, detail)
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            ZoneError::transport(operation, format!("failed to read response body: {e}"))
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ZoneError::Parse {
                detail: e.to_string(),
            }
        })
    }
}
