use aide::axum::{routing::get, ApiRouter};
use tower_http::trace::TraceLayer;

mod health;
mod random_a_b;
mod sleep;

pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .api_route("/", get(health::handler))
        .api_route("/sleep/{ms}/", get(sleep::handler))
        .api_route("/random_a_b", get(random_a_b::handler))
        // adds HTTP tracing & context to all routes
        .layer(TraceLayer::new_for_http())
}
