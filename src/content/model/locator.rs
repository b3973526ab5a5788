//! Resource URL resolution.

use std::time::Duration;

use tracing::warn;

use crate::content::domain::ContentPart;
use crate::content::ports::PartFetcher;

/// Resolves a resource URL with fixed precedence.
///
/// 1. `explicit`, when non-empty, with no I/O at all.
/// 2. The bound part's resident URL.
/// 3. A fetch-stream request against the bound part, bounded by
///    `fetch_timeout` when set.
/// 4. An empty string.
///
/// Fetch failures and timeouts are logged and yield the empty string.
pub async fn resolve_resource_url(
    explicit: &str,
    bound: Option<&ContentPart>,
    fetcher: &dyn PartFetcher,
    fetch_timeout: Option<Duration>,
) -> String {
    if !explicit.is_empty() {
        return explicit.to_owned();
    }
    let Some(part) = bound else {
        return String::new();
    };
    if let Some(url) = part.url() {
        return url.to_owned();
    }

    let fetched = match fetch_timeout {
        Some(limit) => match tokio::time::timeout(limit, fetcher.fetch_stream(part)).await {
            Ok(outcome) => outcome,
            Err(_elapsed) => {
                warn!(part_id = %part.id(), after = ?limit, "fetch-stream timed out");
                return String::new();
            }
        },
        None => fetcher.fetch_stream(part).await,
    };

    fetched.unwrap_or_else(|err| {
        warn!(
            part_id = %part.id(),
            mime_type = part.mime_type(),
            error = %err,
            "fetch-stream failed"
        );
        String::new()
    })
}

/// Callback form of [`resolve_resource_url`]. `on_ready` is invoked exactly
/// once.
pub async fn resolve_resource_url_with<F>(
    explicit: &str,
    bound: Option<&ContentPart>,
    fetcher: &dyn PartFetcher,
    fetch_timeout: Option<Duration>,
    on_ready: F,
) where
    F: FnOnce(String) + Send,
{
    on_ready(resolve_resource_url(explicit, bound, fetcher, fetch_timeout).await);
}
