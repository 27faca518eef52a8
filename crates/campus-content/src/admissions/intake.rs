use super::domain::{
    lecture_options, studio_options, AdmissionsApplication, ApplicantIdentity, ApplicationPayload,
    EducationHistory, EmergencyContact, MailingAddress, ProgramSelection, ProgramTypeField,
    ScheduleOption,
};

/// Validation errors raised during intake. Every check is presence/choice
/// only; no format rules are applied to emails, phones, or dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("required field missing: {0}")]
    MissingField(&'static str),
    #[error("the residency question must be answered")]
    ResidencyUnanswered,
    #[error("the enrollment terms must be accepted before submitting")]
    TermsNotAccepted,
    #[error("a program type must be selected")]
    MissingProgramType,
    #[error("the combined program requires a schedule selection")]
    MissingSchedule,
    #[error("unknown schedule selection: {0}")]
    UnknownSchedule(String),
    #[error("the hybrid enrollment requires a lecture selection")]
    MissingLecture,
    #[error("the hybrid enrollment requires a studio selection")]
    MissingStudio,
    #[error("a single-course enrollment requires a course selection")]
    MissingCourse,
    #[error("unknown course selection: {0}")]
    UnknownCourse(String),
}

/// Turns a raw wire payload into a typed [`AdmissionsApplication`].
///
/// The same guard backs the client-side pre-submission check and the server
/// route, so both ends enforce one contract. Selection choices are checked
/// against the catalog's certificate outlines resolved at construction.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    lectures: Vec<&'static str>,
    studios: Vec<&'static str>,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self {
            lectures: lecture_options(),
            studios: studio_options(),
        }
    }
}

impl IntakeGuard {
    pub fn application_from_payload(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<AdmissionsApplication, IntakeViolation> {
        let first_name = required(&payload.first_name, "first_name")?;
        let last_name = required(&payload.last_name, "last_name")?;
        let email = required(&payload.email, "email")?;
        let phone = required(&payload.phone, "phone")?;
        let birth_date = required(&payload.birth_date, "birth_date")?;

        let line1 = required(&payload.address_line1, "address_line1")?;
        let city = required(&payload.city, "city")?;
        let state = required(&payload.state, "state")?;
        let zip = required(&payload.zip, "zip")?;
        let california_resident = payload
            .california_resident
            .ok_or(IntakeViolation::ResidencyUnanswered)?;

        let high_school = required(&payload.high_school, "high_school")?;
        let graduation_date = required(&payload.graduation_date, "graduation_date")?;
        let emergency_name = required(&payload.emergency_contact_name, "emergency_contact_name")?;
        let emergency_phone =
            required(&payload.emergency_contact_phone, "emergency_contact_phone")?;
        let referral_source = required(&payload.referral_source, "referral_source")?;

        if !payload.terms_accepted {
            return Err(IntakeViolation::TermsNotAccepted);
        }

        let selection = self.selection_from_payload(payload)?;

        let line2 = payload.address_line2.trim();
        Ok(AdmissionsApplication {
            applicant: ApplicantIdentity {
                first_name,
                last_name,
                email,
                phone,
                birth_date,
            },
            address: MailingAddress {
                line1,
                line2: (!line2.is_empty()).then(|| line2.to_string()),
                city,
                state,
                zip,
                california_resident,
            },
            education: EducationHistory {
                high_school,
                graduation_date,
            },
            emergency_contact: EmergencyContact {
                name: emergency_name,
                phone: emergency_phone,
            },
            referral_source,
            selection,
        })
    }

    fn selection_from_payload(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<ProgramSelection, IntakeViolation> {
        let program_type = payload
            .program_type
            .ok_or(IntakeViolation::MissingProgramType)?;

        match program_type {
            ProgramTypeField::Combined => {
                let raw = payload.schedule.trim();
                if raw.is_empty() {
                    return Err(IntakeViolation::MissingSchedule);
                }
                let schedule = ScheduleOption::from_field(raw)
                    .ok_or_else(|| IntakeViolation::UnknownSchedule(raw.to_string()))?;
                Ok(ProgramSelection::Combined { schedule })
            }
            ProgramTypeField::Hybrid => {
                let lecture = payload.lecture.trim();
                if lecture.is_empty() {
                    return Err(IntakeViolation::MissingLecture);
                }
                if !self.lectures.contains(&lecture) {
                    return Err(IntakeViolation::UnknownCourse(lecture.to_string()));
                }
                let studio = payload.studio.trim();
                if studio.is_empty() {
                    return Err(IntakeViolation::MissingStudio);
                }
                if !self.studios.contains(&studio) {
                    return Err(IntakeViolation::UnknownCourse(studio.to_string()));
                }
                Ok(ProgramSelection::Hybrid {
                    lecture: lecture.to_string(),
                    studio: studio.to_string(),
                })
            }
            ProgramTypeField::Single => {
                let course = payload.course.trim();
                if course.is_empty() {
                    return Err(IntakeViolation::MissingCourse);
                }
                if !self.lectures.contains(&course) && !self.studios.contains(&course) {
                    return Err(IntakeViolation::UnknownCourse(course.to_string()));
                }
                Ok(ProgramSelection::Single {
                    course: course.to_string(),
                })
            }
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, IntakeViolation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntakeViolation::MissingField(field));
    }
    Ok(trimmed.to_string())
}
