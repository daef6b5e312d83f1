//! Terraform Cloud API transport.
//!
//! Blocking reqwest client with a fixed whole-call timeout. One request is in
//! flight at a time and nothing is retried: every failure is returned to the
//! caller as a [`TfcError`].

use crate::error::TfcError;
use crate::jsonapi::Document;
use crate::pagination::DocumentSource;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::io::Read;
use std::time::Duration;
use tracing::debug;

const API_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const API_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const JSONAPI_MEDIA_TYPE: &str = "application/vnd.api+json";
const DEBUG_BODY_LIMIT: usize = 2000;
const ERROR_BODY_LIMIT: usize = 500;

/// Authenticated client for the `/api/v2` surface of one Terraform Cloud address.
pub struct Client {
    http: HttpClient,
    base_url: String,
}

impl Client {
    /// Build a client for `address` (e.g. `https://app.terraform.io`).
    pub fn new(address: &str, token: &str) -> Result<Self, TfcError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| TfcError::Auth("token contains invalid header characters".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSONAPI_MEDIA_TYPE));

        let http = build_http_client(headers)?;
        Ok(Self {
            http,
            base_url: format!("{}/api/v2", address.trim_end_matches('/')),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an API-relative path and decode the envelope.
    pub fn get(&self, path: &str) -> Result<Document, TfcError> {
        self.send_document(Method::GET, path, None::<&()>)
    }

    /// POST a JSON body to an API-relative path.
    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Document, TfcError> {
        self.send_document(Method::POST, path, Some(body))
    }

    /// DELETE an API-relative path. A 204 response is success.
    pub fn delete(&self, path: &str) -> Result<(), TfcError> {
        self.send_document(Method::DELETE, path, None::<&()>).map(|_| ())
    }

    /// GET an absolute, pre-signed URL (log archives) and return the body as a
    /// byte stream. No API credentials are sent.
    pub fn fetch_url(&self, url: &str) -> Result<Box<dyn Read>, TfcError> {
        debug!(method = "GET", %url, "Fetching pre-signed URL");
        let resp = build_http_client(HeaderMap::new())?
            .get(url)
            .send()
            .map_err(map_http_error)?;
        Ok(Box::new(ensure_success(resp)?))
    }

    fn send_document<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Document, TfcError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Request");

        let mut request: RequestBuilder = self.http.request(method, &url);
        if let Some(body) = body {
            let raw = serde_json::to_string(body)
                .map_err(|e| TfcError::Internal(format!("marshal request: {}", e)))?;
            debug!(body = %truncate(&raw, DEBUG_BODY_LIMIT), "Request body");
            request = request.body(raw);
        }

        let resp = request.send().map_err(map_http_error)?;
        let status = resp.status();
        let text = resp.text().map_err(map_http_error)?;
        debug!(status = status.as_u16(), "Response status");
        debug!(body = %truncate(&text, DEBUG_BODY_LIMIT), "Response body");

        if !status.is_success() {
            return Err(remote_error(status, &text));
        }
        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(Document::default());
        }
        serde_json::from_str(&text).map_err(|e| TfcError::Decode(format!("parse response: {}", e)))
    }
}

impl DocumentSource for Client {
    fn get_document(&self, path: &str) -> Result<Document, TfcError> {
        self.get(path)
    }
}

fn build_http_client(headers: HeaderMap) -> Result<HttpClient, TfcError> {
    HttpClient::builder()
        .default_headers(headers)
        .user_agent(format!("tfc/{}", env!("CARGO_PKG_VERSION")))
        .connect_timeout(API_HTTP_CONNECT_TIMEOUT)
        .timeout(API_HTTP_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| TfcError::Internal(format!("Failed to create HTTP client: {}", e)))
}

fn ensure_success(resp: Response) -> Result<Response, TfcError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().unwrap_or_default();
    Err(remote_error(status, &text))
}

/// Prefer the envelope's first error; fall back to the truncated body.
fn remote_error(status: StatusCode, body: &str) -> TfcError {
    let message = serde_json::from_str::<Document>(body)
        .ok()
        .and_then(|doc| doc.errors.first().map(|e| e.summary()))
        .unwrap_or_else(|| truncate(body, ERROR_BODY_LIMIT));
    TfcError::Remote {
        status: Some(status.as_u16()),
        message,
    }
}

fn map_http_error(error: reqwest::Error) -> TfcError {
    if error.is_timeout() {
        TfcError::Timeout(error.to_string())
    } else if error.is_connect() {
        TfcError::Transport(format!("Connection error: {}", error))
    } else {
        TfcError::Transport(error.to_string())
    }
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
