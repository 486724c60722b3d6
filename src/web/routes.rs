use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::pages::{self, SearchPageParams};
use super::AppState;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search_page))
        .route("/history/clear", post(clear_history))
        .route("/detail/:id", get(detail_page))
        .route("/healthz", get(health))
        .route("/api/search", get(api_search))
        .route("/api/items/:category/:id", get(api_item))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    category: Option<String>,
}

// ========== HTML Routes ==========

async fn search_page(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.q.unwrap_or_default();
    let category = params
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "all".to_string());

    let mut error = None;
    let results = if query.trim().is_empty() {
        Vec::new()
    } else {
        state.history.lock().await.record(&query);
        match state.gateway.search(&query, Some(&category)).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(query = %query, category = %category, "Search failed: {e}");
                error = Some(e.to_string());
                Vec::new()
            }
        }
    };

    let history = state.history.lock().await.entries().to_vec();

    pages::render_search_page(&SearchPageParams {
        query: &query,
        category: &category,
        results: &results,
        error: error.as_deref(),
        history: &history,
    })
    .into_response()
}

async fn clear_history(State(state): State<AppState>) -> Redirect {
    state.history.lock().await.clear();
    Redirect::to("/")
}

async fn detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Response {
    let category = params
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "posts".to_string());

    match state.gateway.get_item_by_id(&id, &category).await {
        Some(item) => pages::render_detail_page(&item).into_response(),
        None => (StatusCode::NOT_FOUND, pages::render_item_not_found_page()).into_response(),
    }
}

async fn health() -> &'static str {
    "OK"
}

// ========== JSON API Routes ==========

async fn api_search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.q.unwrap_or_default();

    match state
        .gateway
        .search(&query, params.category.as_deref())
        .await
    {
        Ok(results) => Json(results).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

async fn api_item(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
) -> Response {
    match state.gateway.get_item_by_id(&id, &category).await {
        Some(item) => Json(item).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Item not found" })),
        )
            .into_response(),
    }
}
