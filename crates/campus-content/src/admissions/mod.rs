//! The application pipeline: a flat wire payload collected by the multi-step
//! form, intake validation into a typed application, the client-side form
//! state machine, the submission transport, and the server-side service and
//! router that receive submissions.

pub mod domain;
pub mod form;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;
pub mod transport;

#[cfg(test)]
mod tests;

pub use domain::{
    lecture_options, single_course_options, studio_options, AdmissionsApplication,
    ApplicantIdentity, ApplicationId, ApplicationPayload, EducationHistory, EmergencyContact,
    MailingAddress, ProgramSelection, ProgramTypeField, ScheduleOption,
};
pub use form::{AdmissionsForm, FormPhase};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatusView, RepositoryError,
};
pub use router::admissions_router;
pub use service::{AdmissionsError, AdmissionsService};
pub use transport::{
    HttpSubmissionTransport, SubmissionTransport, SubmitError, APPLICATION_ENDPOINT_PATH,
    GENERIC_SUBMIT_ERROR,
};
