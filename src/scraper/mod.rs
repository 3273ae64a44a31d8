use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

mod error;
mod fetcher;
pub mod models;
mod parser;

pub use error::ScrapeError;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use models::Property;

/// Pagination bounds and pacing for one collection run.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub max_pages: u32,
    pub max_records: usize,
    pub delay: Duration,
}

/// Walk listing pages 1..=max_pages and accumulate property records.
///
/// The loop favors a usable partial result over an all-or-nothing failure:
/// the first fetch or parse failure is logged and ends the run with whatever
/// was gathered so far. An empty page is read as end-of-results. The batch
/// of each page is truncated so the total never exceeds `max_records`, and
/// record order follows page order.
pub async fn collect(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    opts: &CollectOptions,
    cancel: &CancellationToken,
) -> Vec<Property> {
    let mut results: Vec<Property> = Vec::new();

    for page in 1..=opts.max_pages {
        if cancel.is_cancelled() {
            info!(page, collected = results.len(), "Collection cancelled");
            break;
        }
        if results.len() >= opts.max_records {
            break;
        }

        let url = format!("{}?_PAGE={}", base_url, page);
        debug!(page, url = %url, "Fetching listing page");

        let html = match fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(page, error = %e, "Page fetch failed, stopping pagination");
                break;
            }
        };

        let batch = match parser::extract_properties(&html) {
            Ok(props) => props,
            Err(e) => {
                warn!(page, error = %e, "Page parse failed, stopping pagination");
                break;
            }
        };

        if batch.is_empty() {
            info!(page, "No listings on page, end of results");
            break;
        }

        let room = opts.max_records - results.len();
        let taken = batch.len().min(room);
        results.extend(batch.into_iter().take(taken));

        info!(page, taken, total = results.len(), "Page processed");

        if results.len() >= opts.max_records || page == opts.max_pages {
            break;
        }

        // Fixed politeness delay between pages, raced against cancellation.
        tokio::select! {
            _ = sleep(opts.delay) => {}
            _ = cancel.cancelled() => {
                info!(collected = results.len(), "Collection cancelled");
                break;
            }
        }
    }

    results
}
