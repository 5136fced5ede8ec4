//! Blocking HTTP GET of ABC documents.
//!
//! Uses the curl crate (libcurl). One request per document, fixed total
//! timeout, no retries: a failed fetch is reported to the caller as-is.

use std::time::Duration;

/// Transport-level failure of a single fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection refused, DNS, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

/// Source of document text for a normalized URL.
pub trait Fetch {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// libcurl-backed fetcher.
#[derive(Debug, Clone)]
pub struct Fetcher {
    timeout: Duration,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(15))
    }
}

impl Fetch for Fetcher {
    /// GETs `url` (following redirects) and returns the body decoded as UTF-8 (lossy).
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(concat!("tunebook/", env!("CARGO_PKG_VERSION")))?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http {
                url: url.to_string(),
                code,
            });
        }

        tracing::debug!(bytes = body.len(), "fetched {}", url);
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_fifteen_seconds() {
        assert_eq!(Fetcher::default().timeout(), Duration::from_secs(15));
    }

    #[test]
    fn http_error_message_names_url_and_status() {
        let e = FetchError::Http {
            url: "https://example.com/t?f=abc".to_string(),
            code: 404,
        };
        assert_eq!(e.to_string(), "GET https://example.com/t?f=abc returned HTTP 404");
    }

    #[test]
    fn connection_refused_is_curl_error() {
        // Bind then drop to get a local port with nothing listening.
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let fetcher = Fetcher::new(Duration::from_secs(2));
        let err = fetcher
            .fetch_text(&format!("http://127.0.0.1:{port}/tune?f=abc"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Curl(_)));
    }
}
