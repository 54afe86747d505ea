//! Shared HTTP response handling
//!
//! Maps provider HTTP failures onto the domain error taxonomy so the
//! resolver can log them uniformly. These are shared utilities, not ports.

use reqwest::Response;
use wayfinder_domain::error::{Error, Result};

/// Check a response status, mapping failures to typed errors.
///
/// 429 becomes `RateLimited`, 401/403 become `AuthFailed`, any other
/// non-2xx becomes `Http`. The response body (when readable) is carried in
/// the error message for misconfiguration hints.
///
/// Returns the response untouched on success so the caller can decode the
/// body; a body that then fails to decode is an abstention, not an error.
pub async fn check_status(response: Response, provider_name: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let code = status.as_u16();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(match code {
        429 => Error::rate_limited(provider_name),
        401 | 403 => Error::auth_failed(provider_name, error_text),
        _ => Error::http(provider_name, code, error_text),
    })
}

/// Map a reqwest transport error (connect failure, timeout) onto the
/// domain `Network` error.
pub fn transport_error(provider_name: &str, error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::network(provider_name, "request timed out")
    } else {
        Error::network(provider_name, error.to_string())
    }
}
