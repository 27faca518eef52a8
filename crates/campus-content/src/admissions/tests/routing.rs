use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::common::*;
use crate::admissions::router::{status_handler, submit_handler};
use crate::admissions::service::AdmissionsService;

#[tokio::test]
async fn submit_handler_accepts_a_complete_payload() {
    let (service, _repository) = build_service();
    let service = Arc::new(service);

    let response =
        submit_handler::<MemoryRepository>(State(service), axum::Json(combined_payload())).await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "received");
    assert!(body["application_id"]
        .as_str()
        .expect("id present")
        .starts_with("app-"));
}

#[tokio::test]
async fn submit_handler_rejects_intake_violations_as_unprocessable() {
    let (service, _repository) = build_service();
    let service = Arc::new(service);
    let mut payload = combined_payload();
    payload.schedule = String::new();

    let response = submit_handler::<MemoryRepository>(State(service), axum::Json(payload)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(
        body["error"],
        "the combined program requires a schedule selection"
    );
}

#[tokio::test]
async fn submit_handler_maps_conflicts_to_409() {
    let service = Arc::new(AdmissionsService::new(Arc::new(ConflictRepository)));

    let response =
        submit_handler::<ConflictRepository>(State(service), axum::Json(combined_payload())).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_handler_maps_repository_outages_to_500() {
    let service = Arc::new(AdmissionsService::new(Arc::new(UnavailableRepository)));

    let response =
        submit_handler::<UnavailableRepository>(State(service), axum::Json(combined_payload()))
            .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error present")
        .contains("database offline"));
}

#[tokio::test]
async fn status_handler_returns_404_for_unknown_ids() {
    let (service, _repository) = build_service();
    let service = Arc::new(service);

    let response =
        status_handler::<MemoryRepository>(State(service), Path("app-999999".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "application not found");
}

#[tokio::test]
async fn status_handler_round_trips_a_submission() {
    let (service, _repository) = build_service();
    let service = Arc::new(service);

    let submitted =
        submit_handler::<MemoryRepository>(State(service.clone()), axum::Json(hybrid_payload()))
            .await;
    let body = read_json_body(submitted).await;
    let id = body["application_id"]
        .as_str()
        .expect("id present")
        .to_string();

    let response = status_handler::<MemoryRepository>(State(service), Path(id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "received");
    assert!(body["program"]
        .as_str()
        .expect("program present")
        .starts_with("Hybrid enrollment"));
}
