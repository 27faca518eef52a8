use super::common::*;
use crate::admissions::domain::ProgramTypeField;
use crate::admissions::form::{AdmissionsForm, FormPhase};
use crate::admissions::intake::IntakeViolation;
use crate::admissions::transport::{SubmitError, GENERIC_SUBMIT_ERROR};

#[tokio::test]
async fn validation_failure_never_reaches_the_transport() {
    let transport = RecordingTransport::default();
    let mut form = AdmissionsForm::new(&transport);
    form.draft = combined_payload();
    form.draft.schedule.clear();

    let result = form.submit().await;

    assert_eq!(result, Err(IntakeViolation::MissingSchedule));
    assert_eq!(form.phase(), &FormPhase::Idle);
    assert_eq!(transport.deliveries(), 0);
}

#[tokio::test]
async fn successful_submit_clears_the_draft_and_program_type() {
    let transport = RecordingTransport::default();
    let mut form = AdmissionsForm::new(&transport);
    form.draft = combined_payload();

    form.submit().await.expect("draft is complete");

    assert_eq!(form.phase(), &FormPhase::Success);
    assert_eq!(transport.deliveries(), 1);
    assert!(form.draft.first_name.is_empty());
    assert_eq!(form.draft.program_type, None);
}

#[tokio::test]
async fn error_keeps_the_draft_for_correction_and_allows_resubmit() {
    let mut form = AdmissionsForm::new(FailingTransport {
        error: SubmitError::Rejected("Invalid phone number".to_string()),
    });
    form.draft = combined_payload();

    form.submit().await.expect("draft is complete");

    assert_eq!(
        form.phase(),
        &FormPhase::Error("Invalid phone number".to_string())
    );
    assert_eq!(form.draft.first_name, "Dana");

    // The user corrects nothing and retries; the form goes around again
    // rather than being stuck.
    form.submit().await.expect("resubmit is allowed from error");
    assert!(matches!(form.phase(), FormPhase::Error(_)));
}

#[tokio::test]
async fn unreachable_transport_surfaces_the_generic_message() {
    let mut form = AdmissionsForm::new(FailingTransport {
        error: SubmitError::Unreachable,
    });
    form.draft = combined_payload();

    form.submit().await.expect("draft is complete");

    assert_eq!(
        form.phase(),
        &FormPhase::Error(GENERIC_SUBMIT_ERROR.to_string())
    );
}

#[tokio::test]
async fn reset_returns_to_idle_only_after_success() {
    let transport = RecordingTransport::default();
    let mut form = AdmissionsForm::new(&transport);

    form.reset();
    assert_eq!(form.phase(), &FormPhase::Idle);

    form.draft = combined_payload();
    form.submit().await.expect("draft is complete");
    assert_eq!(form.phase(), &FormPhase::Success);

    form.reset();
    assert_eq!(form.phase(), &FormPhase::Idle);
}

#[tokio::test]
async fn reset_does_not_clear_an_error_phase() {
    let mut form = AdmissionsForm::new(FailingTransport {
        error: SubmitError::Unreachable,
    });
    form.draft = combined_payload();
    form.submit().await.expect("draft is complete");

    form.reset();
    assert!(matches!(form.phase(), FormPhase::Error(_)));
}

#[tokio::test]
async fn changing_program_type_collapses_other_selections() {
    let transport = RecordingTransport::default();
    let mut form = AdmissionsForm::new(&transport);
    form.draft = hybrid_payload();

    form.select_program_type(Some(ProgramTypeField::Combined));

    assert_eq!(form.draft.program_type, Some(ProgramTypeField::Combined));
    assert!(form.draft.lecture.is_empty());
    assert!(form.draft.studio.is_empty());
    assert!(form.draft.schedule.is_empty());
    assert!(form.draft.course.is_empty());

    form.select_program_type(None);
    assert_eq!(form.draft.program_type, None);
}
