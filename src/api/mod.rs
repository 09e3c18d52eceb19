// SPDX-License-Identifier: MPL-2.0
//! Typed client for TheCatAPI image-search endpoint.
//!
//! The endpoint is a single unauthenticated `GET` returning a JSON array of
//! image descriptors; an empty array signals that pagination is exhausted.
//! The client also downloads raw image bytes for display, since a native
//! front end has no browser to resolve `url` fields for it.

use crate::config::{defaults, Config};
use crate::error::{Error, Result};
use serde::Deserialize;

/// One image descriptor as returned by the search endpoint.
///
/// Only `url` drives the feed; the remaining fields are kept because the
/// real API always sends them and they are occasionally useful in logs.
#[derive(Debug, Clone, Deserialize)]
pub struct CatImage {
    #[serde(default)]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// HTTP client for the image-search endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl Client {
    /// Builds a client against the given endpoint with the given page size.
    ///
    /// The page size is clamped into the supported range.
    pub fn new(base_url: impl Into<String>, page_size: u32) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(
                defaults::HTTP_MAX_REDIRECTS,
            ))
            .user_agent(defaults::HTTP_USER_AGENT)
            .timeout(std::time::Duration::from_secs(defaults::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            page_size: page_size.clamp(defaults::MIN_PAGE_SIZE, defaults::MAX_PAGE_SIZE),
        })
    }

    /// Builds a client from user configuration, falling back to defaults
    /// for anything unset.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config
            .api_url
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_API_URL.to_string());
        let page_size = config.page_size.unwrap_or(defaults::DEFAULT_PAGE_SIZE);
        Self::new(base_url, page_size)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Query URL for the given page cursor.
    fn page_url(&self, page: u32) -> String {
        format!(
            "{}?limit={}&page={}&order={}",
            self.base_url,
            self.page_size,
            page,
            defaults::API_SORT_ORDER
        )
    }

    /// Fetches one page of image descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure, [`Error::Api`] on a
    /// non-success status, and [`Error::Decode`] when the payload is not
    /// the expected JSON array.
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<CatImage>> {
        let response = self.http.get(self.page_url(page)).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!("HTTP status: {}", response.status())));
        }

        let body = response.text().await?;
        let images = serde_json::from_str::<Vec<CatImage>>(&body)?;
        Ok(images)
    }

    /// Downloads the raw bytes behind an image URL.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!("HTTP status: {}", response.status())));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(defaults::DEFAULT_API_URL, defaults::DEFAULT_PAGE_SIZE)
            .expect("client should build")
    }

    #[test]
    fn page_url_carries_cursor_and_limit() {
        let url = client().page_url(3);
        assert_eq!(
            url,
            "https://api.thecatapi.com/v1/images/search?limit=5&page=3&order=Desc"
        );
    }

    #[test]
    fn page_size_is_clamped() {
        let client = Client::new("http://localhost", 9_999).expect("client should build");
        assert_eq!(client.page_size(), defaults::MAX_PAGE_SIZE);

        let client = Client::new("http://localhost", 0).expect("client should build");
        assert_eq!(client.page_size(), defaults::MIN_PAGE_SIZE);
    }

    #[test]
    fn from_config_uses_defaults_when_unset() {
        let config = Config {
            page_size: None,
            api_url: None,
            ..Config::default()
        };
        let client = Client::from_config(&config).expect("client should build");
        assert_eq!(client.page_size(), defaults::DEFAULT_PAGE_SIZE);
        assert!(client.page_url(1).starts_with(defaults::DEFAULT_API_URL));
    }

    #[test]
    fn deserializes_real_shaped_payload() {
        let body = r#"[
            {"id":"abc","url":"https://cdn2.thecatapi.com/images/abc.jpg","width":1024,"height":768},
            {"id":"def","url":"https://cdn2.thecatapi.com/images/def.png","width":500,"height":333}
        ]"#;
        let images: Vec<CatImage> = serde_json::from_str(body).expect("payload should parse");
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].url, "https://cdn2.thecatapi.com/images/abc.jpg");
        assert_eq!(images[1].width, Some(500));
    }

    #[test]
    fn tolerates_minimal_payload() {
        let images: Vec<CatImage> =
            serde_json::from_str(r#"[{"url":"https://example.com/cat.jpg"}]"#).expect("parse");
        assert_eq!(images[0].id, "");
        assert!(images[0].width.is_none());
    }

    #[test]
    fn empty_array_parses_to_empty_vec() {
        let images: Vec<CatImage> = serde_json::from_str("[]").expect("parse");
        assert!(images.is_empty());
    }

    #[test]
    fn object_without_url_fails_to_parse() {
        assert!(serde_json::from_str::<Vec<CatImage>>(r#"[{"id":"abc"}]"#).is_err());
    }
}
