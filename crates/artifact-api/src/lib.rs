use std::time::Duration;

use models::{Item, SearchQuery, SearchResult};
use reqwest::{header, StatusCode};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

pub mod models;

mod pagination;
pub use pagination::{fetch_all_pages, FetchLimits, PageSource};

/// Steam app id of Artifact.
pub const APP_ID: u32 = 583950;

pub const SEARCH_URL: &str = "https://steamcommunity.com/market/search/render/";
pub const MARKET_LISTINGS_URL: &str = "https://steamcommunity.com/market/listings";
pub const IMAGE_BASE_URL: &str = "https://steamcommunity-a.akamaihd.net/economy/image/";

/// Largest `count` the search endpoint honours.
pub const SEARCH_MAX_COUNT: u32 = 100;

const LANGUAGE_COOKIE: &str = "Steam_Language";

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(#[from] ApiError);

impl Error {
    pub fn kind(&self) -> &ApiError {
        &self.0
    }

    pub fn into_kind(self) -> ApiError {
        self.0
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Search failed: {status}: {body}")]
    HttpStatus {
        status: StatusCode,
        body: String,
    },
    #[error("Failed to decode search result: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Search reported failure at start {}", .envelope.start)]
    Unsuccessful { envelope: Box<SearchResult> },
    #[error("Gave up after {pages} pages in {elapsed:?}")]
    Exhausted { pages: u32, elapsed: Duration },
    #[error("Fetch cancelled after {pages} pages")]
    Cancelled { pages: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub search_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Api {
    client: reqwest::Client,
    search_url: String,
}

impl Api {
    #[instrument]
    pub fn new() -> Result<Self> {
        Self::with_config(ApiConfig::default())
    }

    #[instrument]
    pub fn with_config(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(300))
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            client,
            search_url: config.search_url,
        })
    }

    /// Fetches a single page of search results starting at `offset`.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &SearchQuery,
        count: u32,
        offset: u32,
    ) -> Result<SearchResult> {
        if count > SEARCH_MAX_COUNT {
            warn!(count, max = SEARCH_MAX_COUNT, "Clamping page size");
        }
        let count = count.min(SEARCH_MAX_COUNT);
        let rarity_param = format!("category_{}_Rarity[]", APP_ID);
        debug!(url = ?self.search_url, "Searching market");
        let res = self
            .client
            .get(&self.search_url)
            .header(
                header::COOKIE,
                format!("{}={}", LANGUAGE_COOKIE, query.lang.as_str()),
            )
            .query(&[
                ("appid", APP_ID.to_string()),
                ("search_descriptions", "0".to_string()),
                ("norender", "1".to_string()),
                (rarity_param.as_str(), query.rarity.as_str().to_string()),
                ("count", count.to_string()),
                ("start", offset.to_string()),
                ("sort_column", query.sort_column.as_str().to_string()),
                ("sort_dir", query.sort_direction.as_str().to_string()),
            ])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = res.status();
        if status == StatusCode::OK {
            let body = res.bytes().await.map_err(ApiError::Transport)?;
            let result = serde_json::from_slice::<SearchResult>(&body).map_err(|e| {
                tracing::error!(error = %e, "Failed to decode search result");
                ApiError::Decode(e)
            })?;
            debug!(
                start = result.start,
                results = result.results.len(),
                total_count = result.total_count,
                "Got search page"
            );
            Ok(result)
        } else {
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| "No error details".to_string());
            tracing::error!(
                status = ?status,
                error = ?body,
                "Failed to search market"
            );
            Err(ApiError::HttpStatus { status, body }.into())
        }
    }

    /// Fetches every page for `query` with the default [`FetchLimits`].
    pub async fn fetch_all(&self, query: &SearchQuery) -> Result<Vec<Item>> {
        self.fetch_all_with(query, &FetchLimits::default(), &CancellationToken::new())
            .await
    }

    pub async fn fetch_all_with(
        &self,
        query: &SearchQuery,
        limits: &FetchLimits,
        cancel: &CancellationToken,
    ) -> Result<Vec<Item>> {
        fetch_all_pages(self, query, limits, cancel).await
    }
}
