use std::collections::BTreeMap;

use super::disclosures::disclosures;
use super::domain::{DisclosureCategory, DisclosureDocument, Program, ProgramTuition};
use super::programs::programs;
use super::tuition::tuition_tables;

pub const CERTIFICATE_SLUG: &str = "certificate";
pub const ASSOCIATE_SLUG: &str = "associate-of-arts";
pub const BACHELOR_SLUG: &str = "bachelor-of-arts";

/// Find a program by its URL slug. Comparison is exact and case-sensitive;
/// `None` is the only not-found signal and callers branch on it.
pub fn program_by_slug(slug: &str) -> Option<&'static Program> {
    programs().iter().find(|program| program.slug == slug)
}

/// All credit-bearing degree programs, excluding the avocational certificate
/// course, in catalog order.
pub fn degree_programs() -> Vec<&'static Program> {
    programs()
        .iter()
        .filter(|program| !program.is_avocational)
        .collect()
}

/// Find the cost breakdown for a program by slug.
pub fn tuition_for_program(slug: &str) -> Option<&'static ProgramTuition> {
    tuition_tables()
        .iter()
        .find(|table| table.program_slug == slug)
}

/// Combined tuition for the Associate of Arts followed by the Bachelor of
/// Arts, recomputed from the tuition tables on every call.
///
/// A missing record contributes zero rather than failing, so a renamed or
/// removed slug silently shrinks the total. The dataset contract test pins
/// the expected literal to catch that.
pub fn combined_ba_tuition() -> u32 {
    let associate = tuition_for_program(ASSOCIATE_SLUG).map_or(0, |table| table.tuition);
    let bachelor = tuition_for_program(BACHELOR_SLUG).map_or(0, |table| table.tuition);
    associate + bachelor
}

/// Group the disclosure list by category. The map iterates in the declared
/// category display order (the enum's derived `Ord`), each bucket preserves
/// authoring order, and categories without documents are absent entirely.
pub fn disclosures_by_category() -> BTreeMap<DisclosureCategory, Vec<&'static DisclosureDocument>> {
    let mut grouped: BTreeMap<DisclosureCategory, Vec<&'static DisclosureDocument>> =
        BTreeMap::new();
    for document in disclosures() {
        grouped.entry(document.category).or_default().push(document);
    }
    grouped
}
