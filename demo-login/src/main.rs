use axum::{Router, middleware, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ewus_session_axum::{EWUS_ROUTE_PREFIX, ewus_session_router, login_page, refresh_session};

mod handlers;

use crate::handlers::index;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = Router::new()
        // Protected routes get the sliding-expiry refresh
        .route("/", get(index))
        .route_layer(middleware::from_fn(refresh_session))
        .route("/login", get(login_page))
        .nest(EWUS_ROUTE_PREFIX.as_str(), ewus_session_router());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3001").await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
