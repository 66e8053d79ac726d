//! Axum router and server setup.

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::app::AppState;
use crate::error::{Error, Result};

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the application router. Public so tests can drive it
    /// without binding a socket.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/bets", get(handlers::list_bets))
            .route("/bets", post(handlers::create_bet))
            .route("/bets/verify", post(handlers::verify_pair))
            .route("/bets/pair/:pair_id", get(handlers::get_pair))
            .route("/bets/:id", get(handlers::get_bet))
            .route("/bets/:id/status", put(handlers::update_status))
            .route("/bets/:id", delete(handlers::delete_bet))
            .route("/ocr/analyze", post(handlers::analyze_slip))
            .route("/ocr/raw", post(handlers::analyze_slip_raw))
            .route("/stats", get(handlers::pair_stats))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start serving on the given address until cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or serve.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("API listening on {addr}");
        axum::serve(listener, self.router())
            .await
            .map_err(|e| Error::Connection(e.to_string()))
    }
}
