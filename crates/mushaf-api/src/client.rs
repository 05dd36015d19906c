//! equran.id API client implementation.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use mushaf_core::{Error, HttpError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use url::Url;

use crate::parser::unwrap_envelope;
use crate::types::Envelope;

/// Public v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://equran.id/api/v2";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cache TTL for API responses.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Maximum number of attempts per request.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const BASE_RETRY_DELAY_MS: u64 = 500;

/// Longest `Retry-After` wait honoured before a retry.
const MAX_RETRY_AFTER_SECS: u64 = 30;

/// Cache entry with expiration.
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    expires_at: std::time::Instant,
}

impl<T> CacheEntry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: std::time::Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        std::time::Instant::now() >= self.expires_at
    }
}

/// equran.id API client.
#[derive(Clone)]
pub struct EquranClient {
    /// HTTP client for making requests.
    http: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// In-memory cache for responses.
    cache: Arc<DashMap<String, CacheEntry<Vec<u8>>>>,
    /// Cache TTL for API responses.
    cache_ttl: Duration,
}

impl EquranClient {
    /// Create a new client against the public API.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("id-ID,id;q=0.9,en;q=0.8"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("Mushaf/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            cache: Arc::new(DashMap::new()),
            cache_ttl: DEFAULT_CACHE_TTL,
        })
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::Http(HttpError::InvalidUrl(format!("{base_url}: {e}"))))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Http(HttpError::InvalidUrl(format!(
                "{base_url}: unsupported scheme"
            ))));
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Set the cache TTL for API responses.
    pub const fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an API path and return the `data` of its envelope.
    ///
    /// Only envelopes with a success `code` are cached.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let cache_key = Self::cache_key(&url);

        if let Some(cached) = self.get_cached(&cache_key) {
            debug!("Cache hit for {path}");
            return Self::decode(&cached);
        }

        let mut last_error = None;
        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = retry_delay(attempt, last_error.as_ref());
                tokio::time::sleep(delay).await;
                debug!("Retry attempt {attempt} for {path} after {delay:?}");
            }

            match self.do_request(&url).await {
                Ok(response_bytes) => {
                    let data = Self::decode(&response_bytes)?;
                    self.set_cached(cache_key, response_bytes);
                    return Ok(data);
                }
                Err(e) => {
                    warn!("Request to {path} failed (attempt {attempt}): {e}");

                    if !e.is_retryable() {
                        return Err(e);
                    }

                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Network("Request failed".to_string())))
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        let envelope: Envelope<T> = serde_json::from_slice(bytes)
            .map_err(|e| Error::Parse(format!("Failed to parse response: {e}")))?;
        unwrap_envelope(envelope)
    }

    async fn do_request(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(HttpError::Timeout)
            } else if e.is_connect() {
                Error::Http(HttpError::ConnectionFailed(e.to_string()))
            } else {
                Error::Network(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            let message = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), url, message, retry_after));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| Error::Network(format!("Failed to read response body: {e}")))
    }

    fn cache_key(url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn get_cached(&self, key: &str) -> Option<Vec<u8>> {
        let entry = self.cache.get(key)?;
        if entry.is_expired() {
            drop(entry);
            self.cache.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    fn set_cached(&self, key: String, value: Vec<u8>) {
        let entry = CacheEntry::new(value, self.cache_ttl);
        self.cache.insert(key, entry);

        // Cleanup expired entries occasionally
        if self.cache.len() > 100 {
            self.cleanup_cache();
        }
    }

    fn cleanup_cache(&self) {
        self.cache.retain(|_, entry| !entry.is_expired());
    }

    /// Clear the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Get the number of cached entries.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for EquranClient {
    /// # Panics
    /// Panics if the HTTP client cannot be created.
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::new().expect("Failed to create default equran client")
    }
}

/// Map a non-success HTTP status to an error.
fn status_error(status: u16, url: &str, message: String, retry_after: Option<u64>) -> Error {
    match status {
        404 => Error::NotFound(url.to_string()),
        429 => Error::RateLimited {
            retry_after_secs: retry_after,
        },
        _ => Error::Http(HttpError::StatusError { status, message }),
    }
}

/// Backoff before retry `attempt` (1-based), honouring `Retry-After` when rate limited.
fn retry_delay(attempt: u32, last_error: Option<&Error>) -> Duration {
    if let Some(Error::RateLimited {
        retry_after_secs: Some(secs),
    }) = last_error
    {
        return Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS));
    }
    Duration::from_millis(BASE_RETRY_DELAY_MS * 2u64.pow(attempt.saturating_sub(1)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EquranClient::new().unwrap();
        assert_eq!(client.cache_size(), 0);
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let client = EquranClient::new()
            .unwrap()
            .with_base_url("http://localhost:8080/api/v2/")
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v2");

        assert!(EquranClient::new()
            .unwrap()
            .with_base_url("ftp://equran.id")
            .is_err());
        assert!(EquranClient::new()
            .unwrap()
            .with_base_url("not a url")
            .is_err());
    }

    #[test]
    fn test_cache_key_generation() {
        let key1 = EquranClient::cache_key("https://equran.id/api/v2/surat/1");
        let key2 = EquranClient::cache_key("https://equran.id/api/v2/surat/2");
        let key3 = EquranClient::cache_key("https://equran.id/api/v2/surat/1");

        assert_ne!(key1, key2);
        assert_eq!(key1, key3);
    }

    #[test]
    fn test_expired_entries_are_dropped() {
        let client = EquranClient::new()
            .unwrap()
            .with_cache_ttl(Duration::from_secs(0));
        client.set_cached("k".to_string(), b"{}".to_vec());
        assert!(client.get_cached("k").is_none());
        assert_eq!(client.cache_size(), 0);
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(404, "u", String::new(), None),
            Error::NotFound(_)
        ));
        assert!(matches!(
            status_error(429, "u", String::new(), Some(7)),
            Error::RateLimited {
                retry_after_secs: Some(7)
            }
        ));
        let server = status_error(502, "u", "bad gateway".into(), None);
        assert!(server.is_retryable());
        assert!(!status_error(400, "u", String::new(), None).is_retryable());
    }

    #[test]
    fn test_retry_delay_backoff() {
        assert_eq!(retry_delay(1, None), Duration::from_millis(500));
        assert_eq!(retry_delay(2, None), Duration::from_millis(1000));
        let limited = Error::RateLimited {
            retry_after_secs: Some(3),
        };
        assert_eq!(retry_delay(1, Some(&limited)), Duration::from_secs(3));

        let hour = Error::RateLimited {
            retry_after_secs: Some(3600),
        };
        assert_eq!(
            retry_delay(1, Some(&hour)),
            Duration::from_secs(MAX_RETRY_AFTER_SECS)
        );
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        // Unroutable base: only a cache hit can succeed.
        let client = EquranClient::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:9")
            .unwrap();
        let key = EquranClient::cache_key("http://127.0.0.1:9/surat");
        client.set_cached(key, br#"{"code":200,"message":"ok","data":[]}"#.to_vec());

        let value: Vec<serde_json::Value> = client.get("surat").await.unwrap();
        assert!(value.is_empty());
    }

    /// Serve `bodies` in order as HTTP 200 JSON replies, repeating the last.
    async fn serve(bodies: Vec<&'static str>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                let body = bodies[n.min(bodies.len() - 1)];

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let len = stream.read(&mut buf).await.unwrap();
                    request.extend_from_slice(&buf[..len]);
                    if len == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                let _ = stream.shutdown().await;
            }
        });

        (format!("http://{addr}"), hits)
    }

    #[tokio::test]
    async fn test_error_envelope_is_not_cached() {
        let (base, hits) = serve(vec![
            r#"{"code":500,"message":"maintenance","data":null}"#,
            r#"{"code":200,"message":"ok","data":[]}"#,
        ])
        .await;
        let client = EquranClient::new().unwrap().with_base_url(&base).unwrap();

        assert!(matches!(
            client.list_surahs().await,
            Err(Error::Api { code: 500, .. })
        ));
        assert_eq!(client.cache_size(), 0);

        assert!(client.list_surahs().await.unwrap().is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(client.cache_size(), 1);

        // Now served from the cache.
        assert!(client.list_surahs().await.unwrap().is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
