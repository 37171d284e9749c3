//! Upstream Forwarding
//!
//! Builds the backend request from the inbound one: same method, path and
//! query, Authorization and Content-Type passed through, body untouched.

use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, StatusCode},
};
use tracing::debug;

use crate::error::ProxyError;

#[derive(Clone)]
pub struct Upstream {
    client: reqwest::Client,
    base_url: String,
}

pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl Upstream {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        headers: &HeaderMap,
        body: Option<Bytes>,
    ) -> Result<UpstreamReply, ProxyError> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }
        debug!(%method, %url, "forwarding to backend");

        let mut request = self.client.request(method, &url);
        if let Some(auth) = headers.get(header::AUTHORIZATION) {
            request = request.header(header::AUTHORIZATION, auth);
        }
        if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProxyError::Upstream(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(status));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Upstream(e.to_string()))?;

        Ok(UpstreamReply { status, body })
    }
}
