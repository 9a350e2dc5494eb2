use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

use crate::{
    models::{Item, SearchQuery, SearchResult},
    Api, ApiError, Result, SEARCH_MAX_COUNT,
};

/// Anything that can hand out one page of search results.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn page(&self, query: &SearchQuery, count: u32, offset: u32) -> Result<SearchResult>;
}

impl PageSource for Api {
    async fn page(&self, query: &SearchQuery, count: u32, offset: u32) -> Result<SearchResult> {
        self.search(query, count, offset).await
    }
}

/// Bounds for [`fetch_all_pages`] so a server that never sends an empty page cannot keep us looping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchLimits {
    pub max_pages: Option<u32>,
    pub deadline: Option<Duration>,
}

impl FetchLimits {
    pub fn unbounded() -> Self {
        Self {
            max_pages: None,
            deadline: None,
        }
    }
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            max_pages: Some(1000),
            deadline: None,
        }
    }
}

async fn deadline_reached(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

fn next_offset(offset: u32) -> Option<u32> {
    offset.checked_add(SEARCH_MAX_COUNT)
}

/// Requests pages of [`SEARCH_MAX_COUNT`] items until one comes back empty.
///
/// Any failed page aborts the whole fetch and drops what was collected so far.
#[instrument(skip(source, limits, cancel))]
pub async fn fetch_all_pages<S: PageSource>(
    source: &S,
    query: &SearchQuery,
    limits: &FetchLimits,
    cancel: &CancellationToken,
) -> Result<Vec<Item>> {
    let started = Instant::now();
    let deadline = limits.deadline.map(|d| started + d);
    let mut items = Vec::new();
    let mut offset = 0;
    let mut pages = 0;

    loop {
        if cancel.is_cancelled() {
            warn!(pages, "Fetch cancelled");
            return Err(ApiError::Cancelled { pages }.into());
        }
        let out_of_pages = limits.max_pages.is_some_and(|max| pages >= max);
        let out_of_time = deadline.is_some_and(|at| Instant::now() >= at);
        if out_of_pages || out_of_time {
            let elapsed = started.elapsed();
            error!(pages, elapsed = ?elapsed, "Giving up on search");
            return Err(ApiError::Exhausted { pages, elapsed }.into());
        }

        let page = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!(pages, "Fetch cancelled");
                return Err(ApiError::Cancelled { pages }.into());
            }
            _ = deadline_reached(deadline) => {
                let elapsed = started.elapsed();
                error!(pages, elapsed = ?elapsed, "Giving up on search");
                return Err(ApiError::Exhausted { pages, elapsed }.into());
            }
            page = source.page(query, SEARCH_MAX_COUNT, offset) => page?,
        };
        pages += 1;

        if !page.success {
            error!(start = page.start, "Search reported failure");
            return Err(ApiError::Unsuccessful {
                envelope: Box::new(page),
            }
            .into());
        }

        if page.results.is_empty() {
            break;
        }

        items.extend(page.results);
        offset = match next_offset(offset) {
            Some(next) => next,
            None => {
                let elapsed = started.elapsed();
                error!(pages, offset, "Search offset overflowed");
                return Err(ApiError::Exhausted { pages, elapsed }.into());
            }
        };
    }

    info!(items = items.len(), pages, "Fetched all items");
    Ok(items)
}
