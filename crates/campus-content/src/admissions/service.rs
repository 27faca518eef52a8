use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::domain::{ApplicationId, ApplicationPayload};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{ApplicationRecord, ApplicationRepository, RepositoryError};

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

/// Server-side intake: validates wire payloads, assigns ids, and persists
/// the typed application through the repository seam.
pub struct AdmissionsService<R> {
    guard: IntakeGuard,
    repository: Arc<R>,
}

impl<R> AdmissionsService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            guard: IntakeGuard::default(),
            repository,
        }
    }

    /// Validate and store an inbound payload, returning the stored record.
    pub fn submit(
        &self,
        payload: &ApplicationPayload,
        received_on: NaiveDate,
    ) -> Result<ApplicationRecord, AdmissionsError> {
        let application = self.guard.application_from_payload(payload)?;

        let record = ApplicationRecord {
            application_id: next_application_id(),
            application,
            received_on,
        };

        let stored = self.repository.insert(record)?;
        info!(
            application_id = %stored.application_id.0,
            program = %stored.application.selection.summary(),
            "application received"
        );
        Ok(stored)
    }

    /// Fetch an application for status responses.
    pub fn get(&self, application_id: &ApplicationId) -> Result<ApplicationRecord, AdmissionsError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the admissions service.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionsError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
