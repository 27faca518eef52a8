use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Extension;
use axum::Json;
use campus_content::admissions::{
    admissions_router, AdmissionsService, ApplicationRepository,
};
use campus_content::catalog::{
    admission_requirements, combined_ba_tuition, contact_info, degree_programs,
    disclosures_by_category, enrollment_config, navigation, program_by_slug, programs,
    social_links, tuition_for_program,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_site_routes<R>(service: Arc<AdmissionsService<R>>) -> axum::Router
where
    R: ApplicationRepository + 'static,
{
    admissions_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/catalog/programs", get(programs_endpoint))
        .route("/api/v1/catalog/programs/:slug", get(program_endpoint))
        .route(
            "/api/v1/catalog/degree-programs",
            get(degree_programs_endpoint),
        )
        .route(
            "/api/v1/catalog/tuition/combined-ba",
            get(combined_tuition_endpoint),
        )
        .route("/api/v1/catalog/tuition/:slug", get(tuition_endpoint))
        .route("/api/v1/catalog/disclosures", get(disclosures_endpoint))
        .route("/api/v1/catalog/site", get(site_endpoint))
        .route("/documents/:name", get(document_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn programs_endpoint() -> impl IntoResponse {
    Json(programs())
}

pub(crate) async fn degree_programs_endpoint() -> impl IntoResponse {
    Json(degree_programs())
}

pub(crate) async fn program_endpoint(Path(slug): Path<String>) -> Response {
    match program_by_slug(&slug) {
        Some(program) => (StatusCode::OK, Json(program)).into_response(),
        None => {
            let body = json!({ "error": "program not found" });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}

pub(crate) async fn tuition_endpoint(Path(slug): Path<String>) -> Response {
    match tuition_for_program(&slug) {
        Some(table) => (StatusCode::OK, Json(table)).into_response(),
        None => {
            let body = json!({ "error": "tuition not found" });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}

pub(crate) async fn combined_tuition_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "combined_ba_tuition": combined_ba_tuition() }))
}

pub(crate) async fn disclosures_endpoint() -> impl IntoResponse {
    Json(disclosures_by_category())
}

pub(crate) async fn site_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "contact": contact_info(),
        "social_links": social_links(),
        "enrollment": enrollment_config(),
        "navigation": navigation(),
        "admission_requirements": admission_requirements(),
    }))
}

pub(crate) async fn document_endpoint(
    Extension(state): Extension<AppState>,
    Path(name): Path<String>,
) -> Response {
    if name.contains("..") || name.contains('/') || name.starts_with('.') {
        let body = json!({ "error": "document not found" });
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }

    let path = state.documents_dir.join(&name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let content_type = mime_guess::from_path(&name)
                .first_or_octet_stream()
                .to_string();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                bytes,
            )
                .into_response()
        }
        Err(_) => {
            let body = json!({ "error": "document not found" });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}
