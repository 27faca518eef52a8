use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{ApplicationId, ApplicationPayload};
use super::repository::{ApplicationRepository, RepositoryError};
use super::service::{AdmissionsError, AdmissionsService};
use super::transport::APPLICATION_ENDPOINT_PATH;

/// Router builder exposing the application intake and status endpoints.
pub fn admissions_router<R>(service: Arc<AdmissionsService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route(APPLICATION_ENDPOINT_PATH, post(submit_handler::<R>))
        .route(
            "/api/v1/admissions/applications/:application_id",
            get(status_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AdmissionsService<R>>>,
    axum::Json(payload): axum::Json<ApplicationPayload>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let received_on = Local::now().date_naive();
    match service.submit(&payload, received_on) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(AdmissionsError::Intake(violation)) => {
            let body = json!({ "error": violation.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
        }
        Err(AdmissionsError::Repository(RepositoryError::Conflict)) => {
            let body = json!({ "error": "application already exists" });
            (StatusCode::CONFLICT, axum::Json(body)).into_response()
        }
        Err(other) => {
            let body = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<AdmissionsService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AdmissionsError::Repository(RepositoryError::NotFound)) => {
            let body = json!({ "error": "application not found" });
            (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
        }
        Err(other) => {
            let body = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
        }
    }
}
