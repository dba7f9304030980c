use crate::utils::DEFAULT_DELAY;

pub async fn handler() -> &'static str {
    tokio::time::sleep(DEFAULT_DELAY).await;
    "OK"
}

// NOTE: Integration tests for route handlers are in the `/tests` module
