use tracing::debug;

use super::domain::{ApplicationPayload, ProgramTypeField};
use super::intake::{IntakeGuard, IntakeViolation};
use super::transport::SubmissionTransport;

/// Submission lifecycle of one form instance.
///
/// `Idle -> Submitting -> Success`, or `Idle -> Submitting -> Error` with
/// the user free to correct and resubmit. The only path out of `Submitting`
/// is a completed delivery attempt, and the only path from `Success` back to
/// `Idle` is [`AdmissionsForm::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// The client-side application form: a draft payload, the current phase, and
/// the transport that carries an accepted submit to the server.
///
/// Validation runs before any network activity; a draft that fails intake
/// never reaches the transport. While a delivery is in flight the phase
/// gates further submits, which is the only double-submit protection the
/// single-threaded form needs.
pub struct AdmissionsForm<T> {
    transport: T,
    guard: IntakeGuard,
    pub draft: ApplicationPayload,
    phase: FormPhase,
}

impl<T: SubmissionTransport> AdmissionsForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            guard: IntakeGuard::default(),
            draft: ApplicationPayload::default(),
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Choose (or clear) the program type. Changing it collapses the
    /// conditional sections, so selections belonging to other variants are
    /// dropped from the draft.
    pub fn select_program_type(&mut self, selection: Option<ProgramTypeField>) {
        self.draft.program_type = selection;
        self.draft.schedule.clear();
        self.draft.lecture.clear();
        self.draft.studio.clear();
        self.draft.course.clear();
    }

    /// Validate the draft and, if it passes, deliver it.
    ///
    /// A validation failure returns the violation without touching the
    /// transport or the phase. A delivered submit ends in `Success` (draft
    /// cleared, program type unselected) or `Error` (draft kept for
    /// correction and resubmit).
    pub async fn submit(&mut self) -> Result<(), IntakeViolation> {
        if self.phase == FormPhase::Submitting {
            debug!("submit ignored: delivery already in flight");
            return Ok(());
        }

        self.guard.application_from_payload(&self.draft)?;

        self.phase = FormPhase::Submitting;
        match self.transport.deliver(&self.draft).await {
            Ok(()) => {
                debug!("application delivered");
                self.draft = ApplicationPayload::default();
                self.phase = FormPhase::Success;
            }
            Err(err) => {
                debug!(error = %err, "application delivery failed");
                self.phase = FormPhase::Error(err.to_string());
            }
        }

        Ok(())
    }

    /// Return a successfully submitted form to a blank idle state so another
    /// application can be entered. Has no effect in any other phase.
    pub fn reset(&mut self) {
        if self.phase == FormPhase::Success {
            self.phase = FormPhase::Idle;
        }
    }
}
