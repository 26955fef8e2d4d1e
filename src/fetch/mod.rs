//! HTTP fetch capability shared by all audit domains.
//!
//! Each audit domain fetches the target itself (with its own scanner
//! User-Agent) and the orchestrator fans the fetches out concurrently. A
//! failed fetch is never retried; the extractor that needed it degrades to
//! its pessimistic default record instead.

use std::collections::HashMap;
use std::time::Instant;

use log::debug;
use reqwest::header::USER_AGENT;
use reqwest::Client;

use crate::config::{HTTP_REQUEST_TIMEOUT, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::FetchError;

/// A fetched page: final status, response headers, and (for GET) the body.
///
/// Header keys are lowercase; values with non-UTF-8 bytes are dropped.
/// Immutable once constructed; extractors only read from it.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// HTTP status code of the response
    pub status: u16,
    /// Whether the status was in the 2xx range
    pub ok: bool,
    /// Response headers, lowercase keys
    pub headers: HashMap<String, String>,
    /// Response body (empty for HEAD requests), truncated to
    /// [`MAX_RESPONSE_BODY_SIZE`]
    pub body: String,
    /// Milliseconds from request start to response headers
    pub elapsed_ms: u64,
}

impl PageSnapshot {
    /// Returns a response header value by (lowercase) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns whether a response header is present.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }
}

/// HTTP client wrapper used by all analyzers.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds the shared HTTP client with the standard request timeout.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().timeout(HTTP_REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Fetches a page with GET and collects status, headers, and body.
    ///
    /// Non-2xx responses are returned as snapshots, not errors; callers that
    /// require success check [`PageSnapshot::ok`]. Only transport failures
    /// (DNS, connect, timeout, TLS, body read) produce an `Err`.
    pub async fn get(&self, url: &str, user_agent: &str) -> Result<PageSnapshot, FetchError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let status = response.status().as_u16();
        let ok = response.status().is_success();
        let headers = collect_headers(response.headers());
        let mut body = response.text().await?;
        if body.len() > MAX_RESPONSE_BODY_SIZE {
            let mut cut = MAX_RESPONSE_BODY_SIZE;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }

        debug!("GET {url} -> {status} in {elapsed_ms}ms ({} bytes)", body.len());
        Ok(PageSnapshot {
            status,
            ok,
            headers,
            body,
            elapsed_ms,
        })
    }

    /// Fetches response headers only, via HEAD.
    pub async fn head(&self, url: &str, user_agent: &str) -> Result<PageSnapshot, FetchError> {
        let start = Instant::now();
        let response = self
            .client
            .head(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let status = response.status().as_u16();
        let ok = response.status().is_success();
        let headers = collect_headers(response.headers());

        debug!("HEAD {url} -> {status} in {elapsed_ms}ms");
        Ok(PageSnapshot {
            status,
            ok,
            headers,
            body: String::new(),
            elapsed_ms,
        })
    }

    /// Probes a resource with HEAD and reports whether it answered 2xx.
    ///
    /// Used for the sitemap presence check, where an unreachable resource is
    /// simply "absent", never an error.
    pub async fn probe(&self, url: &str, user_agent: &str) -> bool {
        match self.head(url, user_agent).await {
            Ok(snapshot) => snapshot.ok,
            Err(_) => false,
        }
    }
}

fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
        })
        .collect()
}
