use std::time::Duration;

use axum::extract::Path;

use crate::utils::DEFAULT_DELAY;

pub async fn handler(Path(ms): Path<String>) -> &'static str {
    tokio::time::sleep(parse_delay(&ms)).await;
    "OK"
}

/// Reads the path segment as a millisecond count. Non-integer, negative and
/// overflowing values all take the default delay instead; the caller never
/// sees a parse error.
fn parse_delay(raw: &str) -> Duration {
    raw.trim()
        .parse::<u64>()
        .map_or(DEFAULT_DELAY, Duration::from_millis)
}
