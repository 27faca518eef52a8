//! Hand-authored content tables for the school website and the lookup
//! functions the page layer renders from.
//!
//! Every table is built once behind a `OnceLock` accessor and never mutated
//! afterwards; callers only ever see shared references. The query functions
//! in [`queries`] are the sole translators from external identifiers (URL
//! slugs, category names) to content records.

pub mod domain;
pub(crate) mod disclosures;
pub(crate) mod programs;
pub mod queries;
pub(crate) mod site;
pub(crate) mod tuition;

pub use domain::{
    ContactInfo, Course, CourseOutline, DegreeType, DisclosureCategory, DisclosureDocument,
    EnrollmentConfig, NavItem, PaymentOption, PaymentScheduleRow, Program, ProgramTuition,
    SocialLink,
};
pub use programs::programs;
pub use queries::{
    combined_ba_tuition, degree_programs, disclosures_by_category, program_by_slug,
    tuition_for_program, ASSOCIATE_SLUG, BACHELOR_SLUG, CERTIFICATE_SLUG,
};
pub use site::{
    admission_requirements, contact_info, enrollment_config, navigation, social_links,
};
pub use tuition::tuition_tables;
pub use disclosures::disclosures;
