use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Credential awarded by a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeType {
    Certificate,
    AssociateOfArts,
    BachelorOfArts,
    Masters,
}

impl DegreeType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Certificate => "Certificate of Completion",
            Self::AssociateOfArts => "Associate of Arts",
            Self::BachelorOfArts => "Bachelor of Arts",
            Self::Masters => "Master's Degree",
        }
    }
}

/// One educational offering with its curriculum and cost structure.
///
/// `slug` is the unique, URL-safe identifier and the sole join key used by
/// tuition tables and navigation. All dollar figures are whole dollars:
/// `tuition` is base tuition only, `total_charges` adds required fees, and
/// `total_estimated_cost` adds indirect costs on top of that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub slug: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub degree_type: DegreeType,
    pub duration: &'static str,
    pub credit_units: &'static str,
    pub tuition: u32,
    pub total_charges: u32,
    pub total_estimated_cost: u32,
    pub description: &'static str,
    pub is_avocational: bool,
    pub online_available: bool,
    pub is_accredited: bool,
    pub cida_accredited: bool,
    pub part_time_only: bool,
    pub accreditor: Option<&'static str>,
    pub minimum_gpa: Option<f32>,
    pub admission_requirements: Option<&'static str>,
    pub schedule: Option<&'static str>,
    pub requires_ge: Option<&'static str>,
    pub career_outcomes: Vec<&'static str>,
    pub career_note: Option<&'static str>,
    pub courses: Vec<Course>,
    pub lectures: Vec<CourseOutline>,
    pub studios: Vec<CourseOutline>,
}

/// Catalog entry for one credit-bearing course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub code: &'static str,
    pub name: &'static str,
    pub units: u8,
    pub description: &'static str,
}

/// Non-credit lecture or studio outline offered inside the avocational
/// certificate course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseOutline {
    pub name: &'static str,
    pub description: &'static str,
}

/// Cost breakdown for one program, joined to [`Program`] by `program_slug`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramTuition {
    pub program_slug: &'static str,
    pub tuition: u32,
    pub registration_fee: u32,
    pub stlm_fee: u32,
    pub supply_cost: u32,
    pub total_charges: u32,
    pub total_estimated_cost: u32,
    pub payment_schedule: Vec<PaymentScheduleRow>,
    pub payment_options: Vec<PaymentOption>,
    pub notes: Vec<&'static str>,
}

/// One row of a per-term payment schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentScheduleRow {
    pub enrollment: &'static str,
    pub units_per_term: u8,
    pub tuition_per_term: u32,
    pub terms_to_complete: u8,
}

/// A way to pay the charges above, as published in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOption {
    pub kind: &'static str,
    pub description: &'static str,
    pub amount: u32,
    pub per_period: Option<u32>,
}

/// Regulatory bucket a disclosure document is published under.
///
/// The derived `Ord` follows declaration order, which is the required
/// display order for grouped listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureCategory {
    Institutional,
    Accsc,
    Bppe,
    FinancialAid,
    StudentOutcomes,
    ProgramSpecific,
}

impl DisclosureCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Institutional,
            Self::Accsc,
            Self::Bppe,
            Self::FinancialAid,
            Self::StudentOutcomes,
            Self::ProgramSpecific,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Institutional => "Institutional",
            Self::Accsc => "ACCSC",
            Self::Bppe => "BPPE",
            Self::FinancialAid => "Financial Aid",
            Self::StudentOutcomes => "Student Outcomes",
            Self::ProgramSpecific => "Program-Specific",
        }
    }
}

/// A named reference to an externally hosted compliance document. The path
/// is stored and grouped here, never fetched or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosureDocument {
    pub name: &'static str,
    pub category: DisclosureCategory,
    pub path: &'static str,
    pub description: Option<&'static str>,
}

/// Menu entry; children nest exactly one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavItem>>,
}

/// The school's public contact block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub school_name: &'static str,
    pub address_line1: &'static str,
    pub address_line2: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub office_hours: &'static str,
}

/// One social media destination shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
}

/// Enrollment facts shared across admissions pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentConfig {
    pub term_starts: Vec<NaiveDate>,
    pub application_fee: u32,
    pub rolling_admissions: bool,
    pub orientation_note: &'static str,
}
