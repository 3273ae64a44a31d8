use thiserror::Error;

/// Page-level failures that end a pagination run.
///
/// Soft misses never reach this type: a missing field or an absent link
/// degrades to an empty string at the extraction site, and an unmatched
/// numeric pattern degrades to zero in `normalize`.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network failure: DNS, connection refused, timeout.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Listing markup could not be turned into a queryable document.
    #[error("malformed listing page: {0}")]
    Parse(String),
}
