use std::net::SocketAddr;

use aide::openapi::{Info, OpenApi};
use axum::Extension;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{rng::DynRandomSource, routes, utils::GlobalConfig};

pub async fn start(global_config: GlobalConfig, random_source: DynRandomSource) {
    let mut openapi = OpenApi {
        info: Info {
            title: "Sleep Server".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let app = routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(random_source))
        .layer(CompressionLayer::new())
        .layer(
            TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().include_headers(true)),
        );

    // `bind` resolves hostnames, so `localhost` works as a configured host.
    let listener = TcpListener::bind(global_config.bind_address())
        .await
        .expect("Failed to bind address");
    let address = listener
        .local_addr()
        .expect("Failed to read bound local address");

    println!("💤 Sleep server started on http://{address}");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Failed to start server");
}

// In-flight requests, including in-progress sleeps, are drained before exit.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");
    tracing::info!("Shutdown signal received, draining in-flight requests");
}
