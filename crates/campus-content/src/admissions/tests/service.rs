use std::sync::Arc;

use chrono::NaiveDate;

use super::common::*;
use crate::admissions::domain::ApplicationId;
use crate::admissions::intake::IntakeViolation;
use crate::admissions::repository::{ApplicationRepository, RepositoryError};
use crate::admissions::service::{AdmissionsError, AdmissionsService};

fn received_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 2).expect("valid date")
}

#[test]
fn submit_stores_and_returns_the_record() {
    let (service, repository) = build_service();

    let record = service
        .submit(&combined_payload(), received_on())
        .expect("payload is complete");

    assert!(record.application_id.0.starts_with("app-"));
    assert_eq!(record.received_on, received_on());
    let stored = repository
        .fetch(&record.application_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);
}

#[test]
fn application_ids_are_unique_per_submission() {
    let (service, _repository) = build_service();

    let first = service
        .submit(&combined_payload(), received_on())
        .expect("submit succeeds");
    let second = service
        .submit(&hybrid_payload(), received_on())
        .expect("submit succeeds");

    assert_ne!(first.application_id, second.application_id);
}

#[test]
fn submit_propagates_intake_violations() {
    let (service, repository) = build_service();
    let mut payload = combined_payload();
    payload.first_name = String::new();

    match service.submit(&payload, received_on()) {
        Err(AdmissionsError::Intake(IntakeViolation::MissingField("first_name"))) => {}
        other => panic!("expected intake violation, got {other:?}"),
    }
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[test]
fn submit_propagates_repository_conflicts() {
    let service = AdmissionsService::new(Arc::new(ConflictRepository));

    match service.submit(&combined_payload(), received_on()) {
        Err(AdmissionsError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn get_propagates_not_found() {
    let (service, _repository) = build_service();

    match service.get(&ApplicationId("missing".to_string())) {
        Err(AdmissionsError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn status_view_summarizes_the_selection() {
    let (service, _repository) = build_service();

    let record = service
        .submit(&single_payload(), received_on())
        .expect("submit succeeds");
    let view = record.status_view();

    assert_eq!(view.status, "received");
    assert_eq!(view.program, "Single course: Textiles Studio");
    assert_eq!(view.received_on, received_on());
}
