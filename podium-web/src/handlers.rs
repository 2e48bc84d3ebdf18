use askama::Template;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::metrics;
use crate::models::ExpandQuery;
use crate::state::AppState;
use crate::templates::{CompetitionsTemplate, IndexTemplate};

fn render_html<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("Template rendering failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response()
        }
    }
}

fn index_page(state: &AppState, expanded: bool) -> Response {
    let template = IndexTemplate {
        lang: state.aggregator.settings().locale.tag(),
        profile: state.profile.as_ref().clone(),
        view: state.aggregator.view(expanded),
    };
    render_html(&template)
}

pub async fn index(State(state): State<AppState>) -> Response {
    metrics::record_page_view();
    index_page(&state, false)
}

/// The expand/collapse toggle. HTMX requests get only the card; plain
/// navigation (no JavaScript) gets the whole page.
pub async fn competitions(
    State(state): State<AppState>,
    Query(query): Query<ExpandQuery>,
    headers: HeaderMap,
) -> Response {
    let expanded = query.expanded.unwrap_or(false);
    metrics::record_toggle(expanded);

    let is_htmx = headers.get("HX-Request").is_some();
    debug!(expanded, is_htmx, "Competition toggle");
    if is_htmx {
        let template = CompetitionsTemplate {
            view: state.aggregator.view(expanded),
        };
        render_html(&template)
    } else {
        index_page(&state, expanded)
    }
}

pub async fn api_competitions(State(state): State<AppState>, Query(query): Query<ExpandQuery>) -> impl IntoResponse {
    metrics::record_api_request();
    Json(state.aggregator.view(query.expanded.unwrap_or(false)))
}

pub async fn metrics_endpoint(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}
