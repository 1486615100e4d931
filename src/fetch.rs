//! Page fetching over HTTP.
//!
//! # Architecture
//!
//! - [`PageFetcher`]: async trait for "give me the body of this URL"
//! - [`HttpFetcher`]: the `reqwest` implementation used by the binary
//!
//! Each run does exactly one GET. There are no retries and no backoff; the
//! fixed [`REQUEST_TIMEOUT`] is the only bound on latency.
//!
//! # Body Decoding
//!
//! Russian sites still serve `windows-1251` pages, often without a charset in
//! the `Content-Type` header. The body is read as bytes and decoded with the
//! first encoding found in:
//!
//! 1. the `charset` parameter of `Content-Type`
//! 2. a `<meta charset>` / `http-equiv` declaration near the top of the page
//! 3. UTF-8

use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Desktop browser identification sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Upper bound on the whole request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How far into the body a `<meta>` charset declaration is looked for.
const META_SNIFF_BYTES: usize = 1024;

static HEADER_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([a-z0-9_\-:.]+)"#).expect("valid charset regex")
});

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?([a-z0-9_\-:.]+)"#).expect("valid meta regex")
});

/// Why a page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                secs: REQUEST_TIMEOUT.as_secs(),
            }
        } else if let Some(status) = source.status() {
            FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// Trait for fetching a page body.
///
/// The orchestrator is generic over this so tests can feed canned markup or
/// canned failures without touching the network.
pub trait PageFetcher {
    /// Fetch a page and return its decoded body.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL of the listing page
    ///
    /// # Returns
    ///
    /// The body as text, or a [`FetchError`] for timeouts, non-2xx statuses
    /// and every other transport failure.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`PageFetcher`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with the browser `User-Agent` and the fixed timeout.
    ///
    /// # Returns
    ///
    /// The fetcher, or the `reqwest` error if the TLS backend could not be
    /// initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let t0 = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        debug!(%status, "Received response headers");
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        let body = decode_body(&bytes, content_type.as_deref());

        info!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}

fn charset_from_header(content_type: &str) -> Option<&'static Encoding> {
    let label = HEADER_CHARSET.captures(content_type)?.get(1)?;
    Encoding::for_label(label.as_str().as_bytes())
}

fn charset_from_meta(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(META_SNIFF_BYTES)]);
    let label = META_CHARSET.captures(&head)?.get(1)?;
    Encoding::for_label(label.as_str().as_bytes())
}

/// Decode a response body to text.
///
/// # Arguments
///
/// * `bytes` - Raw response body
/// * `content_type` - Value of the `Content-Type` header, if any
///
/// # Returns
///
/// The decoded body. Malformed sequences are replaced, never rejected.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_header)
        .or_else(|| charset_from_meta(bytes))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(encoding = used.name(), "Body contained malformed sequences");
    }
    debug!(encoding = used.name(), "Decoded body");
    text.into_owned()
}
