//! # cel-server
//!
//! JSON HTTP API over the Celestial content engine.
//!
//! | route | response |
//! |-------|----------|
//! | `GET /health` | `{status}` |
//! | `GET /api/horoscope?sign&style&date` | `{horoscope, sign, date}` |
//! | `GET /api/horoscope/details?sign&date` | full horoscope with lucky attributes |
//! | `POST /api/signs` | `{sun, moon}` |
//! | `GET /api/moon?date` | lunar phase report |
//! | `GET /api/rituals?date` | rituals for the day's phase |
//! | `GET /api/rituals/today?date` | one ritual for the day |
//! | `POST /api/subscribe/validate` | normalised sign-up |
//! | `GET /api/digest?sign&date&email` | e-mail digest preview |
//!
//! Errors are `{"error": "..."}` with 400 for bad input and 500 for a broken
//! content catalog.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use cel_config::ServerConfig;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub mod clock;
pub mod error;
pub mod routes;
pub mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ApiError, ServerError};
pub use state::AppState;

/// Build the router with CORS and request tracing.
pub fn router(state: Arc<AppState>, server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(server.cors_max_age_secs));

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/horoscope", get(routes::horoscope))
        .route("/api/horoscope/details", get(routes::horoscope_details))
        .route("/api/signs", post(routes::signs))
        .route("/api/moon", get(routes::moon))
        .route("/api/rituals", get(routes::rituals))
        .route("/api/rituals/today", get(routes::ritual_today))
        .route("/api/subscribe/validate", post(routes::validate_subscription))
        .route("/api/digest", get(routes::digest))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn serve(state: Arc<AppState>, server: &ServerConfig) -> Result<(), ServerError> {
    let app = router(state, server);

    let address = server.bind_address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
