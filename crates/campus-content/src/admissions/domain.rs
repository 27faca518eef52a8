use serde::{Deserialize, Serialize};

use crate::catalog::{self, CERTIFICATE_SLUG};

/// Identifier wrapper for received applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// The applicant's top-level enrollment choice, as it appears on the wire.
/// Which selection fields the form requires hangs off this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramTypeField {
    Combined,
    Hybrid,
    Single,
}

impl ProgramTypeField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Combined => "Combined program",
            Self::Hybrid => "Separate lecture and studio",
            Self::Single => "Single course",
        }
    }
}

/// Meeting pattern for the combined program. The three options are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleOption {
    Morning,
    Evening,
    Saturday,
}

impl ScheduleOption {
    pub const fn ordered() -> [Self; 3] {
        [Self::Morning, Self::Evening, Self::Saturday]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Weekday mornings",
            Self::Evening => "Weekday evenings",
            Self::Saturday => "Saturday intensive",
        }
    }

    pub const fn field_value(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
            Self::Saturday => "saturday",
        }
    }

    pub fn from_field(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|option| option.field_value() == value)
    }
}

/// Lecture choices offered to hybrid and single-course applicants: the
/// certificate course's lecture outlines, by name.
pub fn lecture_options() -> Vec<&'static str> {
    catalog::program_by_slug(CERTIFICATE_SLUG)
        .map(|program| program.lectures.iter().map(|outline| outline.name).collect())
        .unwrap_or_default()
}

/// Studio choices offered to hybrid applicants.
pub fn studio_options() -> Vec<&'static str> {
    catalog::program_by_slug(CERTIFICATE_SLUG)
        .map(|program| program.studios.iter().map(|outline| outline.name).collect())
        .unwrap_or_default()
}

/// The combined lecture + studio list shown for single-course enrollment.
pub fn single_course_options() -> Vec<&'static str> {
    let mut options = lecture_options();
    options.extend(studio_options());
    options
}

/// The flat request body posted to the application endpoint: one JSON object,
/// every field a simple value, keys matching the form field names. Fields
/// for unselected program-type variants travel as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub california_resident: Option<bool>,
    pub high_school: String,
    pub graduation_date: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub referral_source: String,
    pub terms_accepted: bool,
    pub program_type: Option<ProgramTypeField>,
    pub schedule: String,
    pub lecture: String,
    pub studio: String,
    pub course: String,
}

/// Applicant identity block after intake validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
}

/// Mailing address with the residency answer the state requires us to ask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingAddress {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub california_resident: bool,
}

/// Education block; dates stay free text, presence-checked only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationHistory {
    pub high_school: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

/// The enrollment shape the applicant chose. Each variant carries exactly
/// the selections that variant requires, so "which fields are required" is
/// a property of the type rather than a runtime convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgramSelection {
    Combined { schedule: ScheduleOption },
    Hybrid { lecture: String, studio: String },
    Single { course: String },
}

impl ProgramSelection {
    pub fn summary(&self) -> String {
        match self {
            ProgramSelection::Combined { schedule } => {
                format!("Combined program, {}", schedule.label())
            }
            ProgramSelection::Hybrid { lecture, studio } => {
                format!("Hybrid enrollment: {lecture} + {studio}")
            }
            ProgramSelection::Single { course } => format!("Single course: {course}"),
        }
    }
}

/// A validated application as the admissions office works with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionsApplication {
    pub applicant: ApplicantIdentity,
    pub address: MailingAddress,
    pub education: EducationHistory,
    pub emergency_contact: EmergencyContact,
    pub referral_source: String,
    pub selection: ProgramSelection,
}
