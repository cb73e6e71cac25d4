mod auth;
mod home;
mod orders;
mod preferences;
mod stock;

use crate::{middleware::auth_gate, state::AppState};
use anyhow::Result;
use askama::Template;
use axum::{
    Router,
    body::Body,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{errors::HttpError, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use self::auth::auth_routes;
pub use self::home::home_routes;
pub use self::orders::order_routes;
pub use self::preferences::preference_routes;
pub use self::stock::stock_routes;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        error!("Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        Body::from(buffer),
    )
        .into_response()
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub(crate) fn render<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|e| {
        error!("❌ Failed to render template: {e}");
        HttpError::Internal("Failed to render page".to_string())
    })
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        Router::new()
            .route("/healthz", get(healthz))
            .route("/metrics", get(metrics_handler))
            .merge(auth_routes())
            .merge(home_routes())
            .merge(stock_routes())
            .merge(order_routes())
            .merge(preference_routes())
            .layer(middleware::from_fn(auth_gate))
            .layer(TraceLayer::new_for_http())
            .with_state(shared_state)
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
