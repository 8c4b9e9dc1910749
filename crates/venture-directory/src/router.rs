use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::catalog::EntityKind;
use crate::directory::DirectoryQuery;
use crate::profile::ProfileStore;
use crate::service::{DirectoryService, DirectoryServiceError};

/// Router builder exposing directory browsing and "my profile" endpoints.
pub fn directory_router<S>(service: Arc<DirectoryService<S>>) -> Router
where
    S: ProfileStore + 'static,
{
    Router::new()
        .route("/api/v1/directory/:kind", get(browse_handler::<S>))
        .route("/api/v1/directory/:kind/schema", get(schema_handler::<S>))
        .route(
            "/api/v1/directory/:kind/recommended",
            get(recommended_handler::<S>),
        )
        .route(
            "/api/v1/directory/:kind/suggestions",
            get(suggestions_handler::<S>),
        )
        .route(
            "/api/v1/directory/:kind/facets/:facet",
            get(facet_handler::<S>),
        )
        .route(
            "/api/v1/directory/:kind/records/:id",
            get(record_handler::<S>),
        )
        .route(
            "/api/v1/profiles/:kind",
            get(profile_handler::<S>).put(save_profile_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LimitParams {
    limit: Option<usize>,
}

pub(crate) async fn browse_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(kind): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    let query = DirectoryQuery::from_params(params);
    match service.browse(kind, &query) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn schema_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(kind): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match parse_kind(&kind) {
        Ok(kind) => (StatusCode::OK, axum::Json(service.summary(kind))).into_response(),
        Err(response) => response,
    }
}

pub(crate) async fn recommended_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(kind): Path<String>,
    Query(params): Query<LimitParams>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match parse_kind(&kind) {
        Ok(kind) => {
            let records = service.recommended(kind, params.limit);
            (StatusCode::OK, axum::Json(records)).into_response()
        }
        Err(response) => response,
    }
}

pub(crate) async fn suggestions_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(kind): Path<String>,
    Query(params): Query<LimitParams>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match parse_kind(&kind) {
        Ok(kind) => {
            let records = service.suggestions(kind, params.limit);
            (StatusCode::OK, axum::Json(records)).into_response()
        }
        Err(response) => response,
    }
}

pub(crate) async fn facet_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path((kind, facet)): Path<(String, String)>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match service.facet_options(kind, &facet) {
        Ok(values) => {
            let payload = json!({
                "kind": kind,
                "facet": facet,
                "values": values,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn record_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path((kind, id)): Path<(String, String)>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match service.record(kind, &id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn profile_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(kind): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match service.profile(kind) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn save_profile_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(kind): Path<String>,
    axum::Json(fields): axum::Json<Value>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match service.save_profile(kind, fields) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

fn parse_kind(raw: &str) -> Result<EntityKind, Response> {
    raw.parse::<EntityKind>().map_err(|err| {
        let payload = json!({
            "error": err.to_string(),
        });
        (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
    })
}

fn error_response(err: DirectoryServiceError) -> Response {
    let status = err.status_code();
    if status.is_server_error() {
        warn!(error = %err, "directory request failed");
    }
    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
