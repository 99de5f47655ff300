//! HTTP surface of the pathway service.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use super::PathwayService;

/// Shared state for the pathway route.
#[derive(Clone)]
pub struct PathwayRouteState {
    pub service: Arc<PathwayService>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PathwayBody {
    #[serde(default)]
    career: Option<String>,
    #[serde(default)]
    degree_level: Option<String>,
}

/// POST /pathway
///
/// Returns `{pathway, cached, career}` for a career and starting degree.
async fn post_pathway(
    State(state): State<PathwayRouteState>,
    body: Result<Json<PathwayBody>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            debug!(error = %rejection, "Rejected pathway request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    let (career, degree) =
        match PathwayService::validate(body.career.as_deref(), body.degree_level.as_deref()) {
            Ok(valid) => valid,
            Err(e) => return e.into_response(),
        };

    Json(state.service.get_or_generate(&career, degree).await).into_response()
}

/// Build the pathway route with permissive CORS for browser shells.
pub fn pathway_routes(state: PathwayRouteState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/pathway", post(post_pathway))
        .layer(cors)
        .with_state(state)
}
