use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::admissions::domain::{ApplicationId, ApplicationPayload, ProgramTypeField};
use crate::admissions::repository::{
    ApplicationRecord, ApplicationRepository, RepositoryError,
};
use crate::admissions::service::AdmissionsService;
use crate::admissions::transport::{SubmissionTransport, SubmitError};

/// A fully filled payload for the combined program, morning schedule.
pub(super) fn combined_payload() -> ApplicationPayload {
    ApplicationPayload {
        first_name: "Dana".to_string(),
        last_name: "Whitfield".to_string(),
        email: "dana.whitfield@example.com".to_string(),
        phone: "(714) 555-0188".to_string(),
        birth_date: "1996-03-14".to_string(),
        address_line1: "88 Mariner Way".to_string(),
        address_line2: "Apt 4".to_string(),
        city: "Costa Mesa".to_string(),
        state: "CA".to_string(),
        zip: "92626".to_string(),
        california_resident: Some(true),
        high_school: "Estancia High School".to_string(),
        graduation_date: "2014-06-12".to_string(),
        emergency_contact_name: "Reese Whitfield".to_string(),
        emergency_contact_phone: "(714) 555-0121".to_string(),
        referral_source: "Alumni referral".to_string(),
        terms_accepted: true,
        program_type: Some(ProgramTypeField::Combined),
        schedule: "morning".to_string(),
        lecture: String::new(),
        studio: String::new(),
        course: String::new(),
    }
}

pub(super) fn hybrid_payload() -> ApplicationPayload {
    let mut payload = combined_payload();
    payload.program_type = Some(ProgramTypeField::Hybrid);
    payload.schedule = String::new();
    payload.lecture = "Color and Composition".to_string();
    payload.studio = "Residential Studio".to_string();
    payload
}

pub(super) fn single_payload() -> ApplicationPayload {
    let mut payload = combined_payload();
    payload.program_type = Some(ProgramTypeField::Single);
    payload.schedule = String::new();
    payload.course = "Textiles Studio".to_string();
    payload
}

pub(super) fn build_service() -> (AdmissionsService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AdmissionsService::new(repository.clone());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl ApplicationRepository for ConflictRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Transport double that records every delivery and succeeds.
#[derive(Default)]
pub(super) struct RecordingTransport {
    deliveries: AtomicUsize,
}

impl RecordingTransport {
    pub(super) fn deliveries(&self) -> usize {
        self.deliveries.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SubmissionTransport for &RecordingTransport {
    async fn deliver(&self, _payload: &ApplicationPayload) -> Result<(), SubmitError> {
        self.deliveries.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Transport double that fails every delivery with the given error.
pub(super) struct FailingTransport {
    pub(super) error: SubmitError,
}

#[async_trait]
impl SubmissionTransport for FailingTransport {
    async fn deliver(&self, _payload: &ApplicationPayload) -> Result<(), SubmitError> {
        Err(self.error.clone())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
