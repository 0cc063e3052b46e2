//! Client Configuration
//!
//! Base endpoint of the guestbook API and the URLs derived from it.

use reqwest::Url;

use crate::error::{ClientError, ClientResult};

/// Used when neither the build nor the page names an endpoint
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/guestbook/";

/// Where the guestbook API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate and normalise a base URL (absolute http/https, one trailing `/`)
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let trimmed = base_url.trim();
        let url = Url::parse(trimmed).map_err(|e| ClientError::Config(format!("{}: {}", trimmed, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::Config(format!("unsupported scheme: {}", url.scheme())));
        }

        let mut base_url = url.to_string();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        base_url.push('/');

        Ok(Self { base_url })
    }

    /// Use `candidate` when it is a valid endpoint, otherwise log and fall back
    /// to `GUESTBOOK_API_URL` from the build environment, then the default.
    pub fn resolve(candidate: Option<&str>) -> Self {
        let fallback = || {
            Self::new(option_env!("GUESTBOOK_API_URL").unwrap_or(DEFAULT_BASE_URL))
                .unwrap_or_else(|e| {
                    log::error!("{}; using {}", e, DEFAULT_BASE_URL);
                    Self { base_url: DEFAULT_BASE_URL.to_string() }
                })
        };

        match candidate.filter(|c| !c.trim().is_empty()) {
            Some(url) => Self::new(url).unwrap_or_else(|e| {
                log::error!("{}", e);
                fallback()
            }),
            None => fallback(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List and create endpoint
    pub fn list_url(&self) -> String {
        self.base_url.clone()
    }

    /// Update and delete endpoint
    pub fn entry_url(&self, id: u32) -> String {
        format!("{}{}", self.base_url, id)
    }

    pub fn verify_url(&self, id: u32) -> String {
        format!("{}{}/verify/", self.base_url, id)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let config = ClientConfig::new("http://3.35.249.99:8000/guestbook/").unwrap();
        assert_eq!(config.list_url(), "http://3.35.249.99:8000/guestbook/");
        assert_eq!(config.entry_url(7), "http://3.35.249.99:8000/guestbook/7");
        assert_eq!(config.verify_url(7), "http://3.35.249.99:8000/guestbook/7/verify/");
    }

    #[test]
    fn test_trailing_slash_normalised() {
        let bare = ClientConfig::new("http://localhost:8000/guestbook").unwrap();
        let doubled = ClientConfig::new("http://localhost:8000/guestbook//").unwrap();
        assert_eq!(bare.base_url(), "http://localhost:8000/guestbook/");
        assert_eq!(doubled.base_url(), "http://localhost:8000/guestbook/");
    }

    #[test]
    fn test_rejects_relative_and_foreign_schemes() {
        assert!(matches!(ClientConfig::new("/guestbook/"), Err(ClientError::Config(_))));
        assert!(matches!(ClientConfig::new("ftp://host/guestbook/"), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_resolve_falls_back_on_bad_input() {
        let config = ClientConfig::resolve(Some("not a url"));
        assert_eq!(config, ClientConfig::resolve(None));

        let config = ClientConfig::resolve(Some("https://example.org/guestbook"));
        assert_eq!(config.base_url(), "https://example.org/guestbook/");
    }
}
