use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use campus_content::admissions::{
    AdmissionsService, ApplicationId, ApplicationPayload, ApplicationRecord,
    ApplicationRepository, RepositoryError, SubmissionTransport, SubmitError,
};
use chrono::Local;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) documents_dir: Arc<PathBuf>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
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

/// Transport that hands the payload straight to an in-process service, so
/// the demo can run the whole pipeline without a listening socket.
pub(crate) struct InProcessTransport {
    pub(crate) service: Arc<AdmissionsService<InMemoryApplicationRepository>>,
    pub(crate) last_id: Mutex<Option<ApplicationId>>,
}

impl InProcessTransport {
    pub(crate) fn new(service: Arc<AdmissionsService<InMemoryApplicationRepository>>) -> Self {
        Self {
            service,
            last_id: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SubmissionTransport for &InProcessTransport {
    async fn deliver(&self, payload: &ApplicationPayload) -> Result<(), SubmitError> {
        let received_on = Local::now().date_naive();
        match self.service.submit(payload, received_on) {
            Ok(record) => {
                *self.last_id.lock().expect("demo mutex poisoned") =
                    Some(record.application_id);
                Ok(())
            }
            Err(err) => Err(SubmitError::Rejected(err.to_string())),
        }
    }
}
