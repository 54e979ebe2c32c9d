//! Bearer-authenticated HTTP transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request to the backend flows through this module. It joins the
//! configured base URL with an endpoint path, attaches the stored bearer
//! token when one exists, and normalizes every failure into [`ApiError`].
//!
//! A 401 on any endpoint means the stored token is dead: the transport
//! clears the persisted session and raises the expiry notification
//! before returning the error. Pages never handle token expiry
//! themselves.
//!
//! ERROR HANDLING
//! ==============
//! Server-provided `{"message": "..."}` bodies are surfaced for auth
//! failures and other 4xx responses. 5xx bodies and transport-level
//! failures are never shown verbatim; callers supply a fallback through
//! [`ApiError::display_message`].

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(feature = "csr")]
use gloo_net::http::{Request, RequestBuilder, Response};

/// Failure of an API call, normalized across transport and protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the bearer token (HTTP 401).
    #[error("{}", .message.as_deref().unwrap_or("session expired"))]
    Unauthorized { message: Option<String> },
    /// Any other non-2xx response.
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Api { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text safe to show the user. Server messages are trusted for auth
    /// failures and 4xx responses; everything else collapses to the
    /// caller's fallback.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized {
                message: Some(message),
            } => message.clone(),
            ApiError::Api {
                status,
                message: Some(message),
            } if *status < 500 => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Base URL all endpoint paths are joined onto. Baked in at compile
/// time; defaults to the dev-server proxy prefix.
pub fn api_base_url() -> &'static str {
    option_env!("FINHEALTH_API_URL").unwrap_or("/api")
}

/// Fetch `path` and decode the JSON body.
///
/// # Errors
/// Any transport failure, non-2xx status, or undecodable body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_bearer(Request::get(&join_api_url(path)))
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(send(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(browser_only())
    }
}

/// POST `payload` as JSON and decode the JSON body.
///
/// # Errors
/// Any transport failure, non-2xx status, or undecodable body.
pub async fn post_json<T: DeserializeOwned>(
    path: &str,
    payload: &impl Serialize,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_bearer(Request::post(&join_api_url(path)))
            .json(payload)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(send(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, payload);
        Err(browser_only())
    }
}

/// POST `payload` as JSON, ignoring the response body.
///
/// # Errors
/// Any transport failure or non-2xx status.
pub async fn post_json_expect_ok(path: &str, payload: &impl Serialize) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_bearer(Request::post(&join_api_url(path)))
            .json(payload)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        send(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, payload);
        Err(browser_only())
    }
}

/// PUT `payload` as JSON, ignoring the response body.
///
/// # Errors
/// Any transport failure or non-2xx status.
pub async fn put_json_expect_ok(path: &str, payload: &impl Serialize) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_bearer(Request::put(&join_api_url(path)))
            .json(payload)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        send(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, payload);
        Err(browser_only())
    }
}

/// DELETE `path`, ignoring the response body.
///
/// # Errors
/// Any transport failure or non-2xx status.
pub async fn delete_expect_ok(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_bearer(Request::delete(&join_api_url(path)))
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        send(request).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(browser_only())
    }
}

/// POST a multipart form, ignoring the response body. The browser fills
/// in the multipart content type and boundary itself.
///
/// # Errors
/// Any transport failure or non-2xx status.
#[cfg(feature = "csr")]
pub async fn post_form_expect_ok(path: &str, form: &web_sys::FormData) -> Result<(), ApiError> {
    let request = with_bearer(Request::post(&join_api_url(path)))
        .body(form.clone())
        .map_err(|err| ApiError::Network(err.to_string()))?;
    send(request).await?;
    Ok(())
}

#[cfg(not(feature = "csr"))]
fn browser_only() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
fn with_bearer(builder: RequestBuilder) -> RequestBuilder {
    let token = crate::util::storage::read(crate::util::storage::TOKEN_KEY);
    match bearer_header(token) {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = error_from_response_parts(status, &body);
    if error.is_unauthorized() {
        crate::util::storage::clear_session();
        crate::net::expiry::notify_session_expired();
    }
    Err(error)
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(any(test, feature = "csr"))]
fn join_api_url(path: &str) -> String {
    format!("{}{path}", api_base_url().trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: Option<String>) -> Option<String> {
    let token = token?;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {token}"))
    }
}

#[cfg(any(test, feature = "csr"))]
fn error_from_response_parts(status: u16, body: &str) -> ApiError {
    let message = extract_server_message(body);
    if status == 401 {
        ApiError::Unauthorized { message }
    } else {
        ApiError::Api { status, message }
    }
}

/// Pull a human-readable `message` out of an error body, if the server
/// sent one.
#[cfg(any(test, feature = "csr"))]
fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_owned())
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;
