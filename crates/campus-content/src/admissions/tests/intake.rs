use super::common::*;
use crate::admissions::domain::{ProgramSelection, ProgramTypeField, ScheduleOption};
use crate::admissions::intake::{IntakeGuard, IntakeViolation};

fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

#[test]
fn accepts_a_complete_combined_payload() {
    let application = guard()
        .application_from_payload(&combined_payload())
        .expect("payload is complete");

    assert_eq!(application.applicant.first_name, "Dana");
    assert_eq!(application.address.line2.as_deref(), Some("Apt 4"));
    assert!(application.address.california_resident);
    assert_eq!(
        application.selection,
        ProgramSelection::Combined {
            schedule: ScheduleOption::Morning
        }
    );
}

#[test]
fn accepts_hybrid_and_single_variants() {
    let hybrid = guard()
        .application_from_payload(&hybrid_payload())
        .expect("hybrid payload is complete");
    assert_eq!(
        hybrid.selection,
        ProgramSelection::Hybrid {
            lecture: "Color and Composition".to_string(),
            studio: "Residential Studio".to_string(),
        }
    );

    let single = guard()
        .application_from_payload(&single_payload())
        .expect("single payload is complete");
    assert_eq!(
        single.selection,
        ProgramSelection::Single {
            course: "Textiles Studio".to_string(),
        }
    );
}

#[test]
fn whitespace_only_fields_are_missing() {
    let mut payload = combined_payload();
    payload.email = "   ".to_string();
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::MissingField("email"))
    );
}

#[test]
fn unanswered_residency_is_rejected() {
    let mut payload = combined_payload();
    payload.california_resident = None;
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::ResidencyUnanswered)
    );
}

#[test]
fn unaccepted_terms_are_rejected() {
    let mut payload = combined_payload();
    payload.terms_accepted = false;
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::TermsNotAccepted)
    );
}

#[test]
fn missing_program_type_is_rejected() {
    let mut payload = combined_payload();
    payload.program_type = None;
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::MissingProgramType)
    );
}

#[test]
fn combined_without_schedule_is_rejected() {
    let mut payload = combined_payload();
    payload.schedule = String::new();
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::MissingSchedule)
    );
}

#[test]
fn unknown_schedule_is_rejected_with_the_raw_value() {
    let mut payload = combined_payload();
    payload.schedule = "midnight".to_string();
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::UnknownSchedule("midnight".to_string()))
    );
}

#[test]
fn hybrid_requires_both_lecture_and_studio() {
    let mut payload = hybrid_payload();
    payload.studio = String::new();
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::MissingStudio)
    );

    let mut payload = hybrid_payload();
    payload.lecture = String::new();
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::MissingLecture)
    );
}

#[test]
fn hybrid_selections_must_come_from_the_published_lists() {
    let mut payload = hybrid_payload();
    payload.lecture = "Advanced Basket Weaving".to_string();
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::UnknownCourse(
            "Advanced Basket Weaving".to_string()
        ))
    );

    // A studio name is not a lecture.
    let mut payload = hybrid_payload();
    payload.lecture = "Residential Studio".to_string();
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::UnknownCourse(
            "Residential Studio".to_string()
        ))
    );
}

#[test]
fn single_course_may_come_from_either_list() {
    let mut payload = single_payload();
    payload.course = "Color and Composition".to_string();
    let application = guard()
        .application_from_payload(&payload)
        .expect("lecture names are valid single courses");
    assert_eq!(
        application.selection,
        ProgramSelection::Single {
            course: "Color and Composition".to_string(),
        }
    );

    let mut payload = single_payload();
    payload.course = String::new();
    assert_eq!(
        guard().application_from_payload(&payload),
        Err(IntakeViolation::MissingCourse)
    );
}

#[test]
fn unselected_variant_fields_are_ignored() {
    // Leftover selections from a previously chosen variant must not be
    // required or validated once the applicant switches variants.
    let mut payload = combined_payload();
    payload.lecture = "Advanced Basket Weaving".to_string();
    payload.course = "also stale".to_string();
    let application = guard()
        .application_from_payload(&payload)
        .expect("stale fields from other variants are not validated");
    assert!(matches!(
        application.selection,
        ProgramSelection::Combined { .. }
    ));
    assert_eq!(payload.program_type, Some(ProgramTypeField::Combined));
}

#[test]
fn empty_address_line2_becomes_none() {
    let mut payload = combined_payload();
    payload.address_line2 = "  ".to_string();
    let application = guard()
        .application_from_payload(&payload)
        .expect("line2 is optional");
    assert_eq!(application.address.line2, None);
}
