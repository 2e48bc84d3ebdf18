use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{api_competitions, competitions, index, metrics_endpoint};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/competitions", get(api_competitions))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]));

    Router::new()
        .route("/", get(index))
        .route("/competitions", get(competitions))
        .route("/metrics", get(metrics_endpoint))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
