use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use uogos_core::{AppConfig, Category, Listing};

use crate::error::ClientError;

/// Client for the marketplace REST backend.
///
/// Holds the HTTP client and base URL. Use [`MarketClient::from_config`] in
/// the application and [`MarketClient::new`] to point at a mock server in
/// tests.
pub struct MarketClient {
    client: Client,
    base_url: Url,
}

impl MarketClient {
    /// Creates a new client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if `base_url`
    /// does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends endpoint paths instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ClientError::InvalidUrl(format!("base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MarketClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches the listings visible to the caller, optionally narrowed by
    /// the backend's free-text search.
    ///
    /// `query` is the backend's own `q` parameter (title search); structured
    /// filtering stays client-side in `uogos_core::filter_and_sort`. An
    /// empty query string is not sent.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ClientError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_listings(&self, query: Option<&str>) -> Result<Vec<Listing>, ClientError> {
        let url = self.listings_url(query)?;
        tracing::debug!(url = %url, "fetching listings");
        self.fetch_json(url, "list_listings").await
    }

    /// Fetches a single listing by id.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or non-2xx HTTP status
    ///   (including 404 for an unknown id).
    /// - [`ClientError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn get_listing(&self, id: i64) -> Result<Listing, ClientError> {
        let url = self.endpoint(&format!("api/listings/{id}"))?;
        self.fetch_json(url, &format!("get_listing(id={id})")).await
    }

    /// Fetches the category catalog.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ClientError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let url = self.endpoint("api/categories")?;
        self.fetch_json(url, "list_categories").await
    }

    fn listings_url(&self, query: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.endpoint("api/listings")?;
        if let Some(q) = query {
            if !q.is_empty() {
                url.query_pairs_mut().append_pair("q", q);
            }
        }
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("endpoint '{path}': {e}")))
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body into `T`.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, ClientError> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}
