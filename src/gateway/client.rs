//! Outbound HTTP client
//!
//! Thin wrapper around a pooled `reqwest::Client` that turns transport failures
//! into gateway errors and backend replies into pass-through responses.

use crate::error::AppError;
use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use reqwest::{Method, Url};
use std::time::Duration;

/// A backend reply, relayed to the gateway's caller unchanged
#[derive(Debug, Clone)]
pub struct BackendResponse {
    /// Backend status code
    pub status: StatusCode,
    /// Backend `Content-Type`, if any
    pub content_type: Option<HeaderValue>,
    /// Raw backend body
    pub body: Bytes,
}

impl IntoResponse for BackendResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        match self.content_type {
            Some(content_type) => {
                response
                    .headers_mut()
                    .insert(header::CONTENT_TYPE, content_type);
            }
            None => {
                response.headers_mut().remove(header::CONTENT_TYPE);
            }
        }
        response
    }
}

/// Client used for every outbound call of the gateway
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
}

impl BackendClient {
    /// Build a client whose calls fail after `timeout`
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self { http })
    }

    /// Issue one call and read the whole reply
    ///
    /// # Errors
    /// * `AppError::GatewayTimeout` - the call exceeded the client timeout
    /// * `AppError::BadGateway` - connection, send or read failure
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        json_body: Option<Bytes>,
    ) -> Result<BackendResponse, AppError> {
        let target = format!("{} {}", method, redact(&url));
        tracing::debug!(target = %target, "Calling backend");

        let mut request = self.http.request(method, url);
        if let Some(body) = json_body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(&target, e))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| AppError::BadGateway(format!("{}: invalid status: {}", target, e)))?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok());
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(&target, e))?;

        tracing::debug!(target = %target, status = status.as_u16(), "Backend replied");

        Ok(BackendResponse {
            status,
            content_type,
            body,
        })
    }
}

fn transport_error(target: &str, err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        tracing::error!(target = %target, "Backend call timed out");
        AppError::GatewayTimeout(target.to_string())
    } else {
        tracing::error!(target = %target, error = %err.without_url(), "Backend call failed");
        AppError::BadGateway(target.to_string())
    }
}

/// URL without its query string, which carries the access token
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}
