//! Generic HTTP request handling
//!
//! Sends a prepared `RequestBuilder`, logs it, maps HTTP status codes onto
//! [`RestError`] and retries transient failures with exponential backoff.
//! Callers build the request themselves (method, URL, headers).

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::RestError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the body of a 2xx response.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method, for logging
    /// * `path` - management path relative to the base URL, for logging and errors
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<String, RestError> {
        log::debug!("[rest] {method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RestError::Timeout {
                    path: path.to_string(),
                    detail: e.to_string(),
                }
            } else {
                RestError::NetworkError {
                    path: path.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[rest] {method_name} {path} -> {status_code}");

        let body = response
            .text()
            .await
            .map_err(|e| RestError::NetworkError {
                path: path.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[rest] Response Body: {}", truncate_for_log(&body));

        check_status(status_code, body, path)
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(body: &str, path: &str) -> Result<T, RestError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[rest] JSON parse failed for {path}: {e}");
            log::error!("[rest] Raw response: {}", truncate_for_log(body));
            RestError::ParseError {
                path: path.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request, retrying transient failures.
    ///
    /// # Retry strategy
    /// - Only [`RestError::is_retryable`] errors are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (maximum 10 seconds)
    /// - `max_retries == 0` sends exactly once
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
        max_retries: u32,
    ) -> Result<String, RestError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, path).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[rest] Cannot clone request for {path}, disabling retry");
                return Self::execute_request(request_builder, method_name, path).await;
            };

            match Self::execute_request(req, method_name, path).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "[rest] {} {} failed (attempt {}/{}), retrying in {:.1}s: {}",
                        method_name,
                        path,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| RestError::NetworkError {
            path: path.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Map an HTTP status onto success or a [`RestError`].
fn check_status(status_code: u16, body: String, path: &str) -> Result<String, RestError> {
    match status_code {
        200..=299 => Ok(body),
        401 | 403 => Err(RestError::PermissionDenied {
            path: path.to_string(),
            raw_message: non_empty(&body),
        }),
        404 => Err(RestError::NotFound {
            path: path.to_string(),
            raw_message: non_empty(&body),
        }),
        // includes 502..=504, which `is_retryable` accepts
        _ => Err(RestError::Status {
            path: path.to_string(),
            status: status_code,
            body,
        }),
    }
}

fn non_empty(body: &str) -> Option<String> {
    (!body.is_empty()).then(|| body.to_string())
}

/// Backoff strategy: 100ms, 200ms, 400ms, 800ms, 1.6s, ... capped at 10 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
