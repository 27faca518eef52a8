use std::sync::OnceLock;

use super::domain::{DisclosureCategory, DisclosureDocument};

static DISCLOSURES: OnceLock<Vec<DisclosureDocument>> = OnceLock::new();

/// Regulatory disclosure documents in authoring order. Grouping by category
/// happens in the query layer; the authored order within each category is
/// the published order.
pub fn disclosures() -> &'static [DisclosureDocument] {
    DISCLOSURES.get_or_init(seed_disclosures).as_slice()
}

fn seed_disclosures() -> Vec<DisclosureDocument> {
    vec![
        DisclosureDocument {
            name: "School Catalog",
            category: DisclosureCategory::Institutional,
            path: "/documents/miid-catalog.pdf",
            description: Some("The current academic year catalog, including all program outlines."),
        },
        DisclosureDocument {
            name: "Faculty Roster",
            category: DisclosureCategory::Institutional,
            path: "/documents/faculty-roster.pdf",
            description: Some("Instructors of record with credentials and areas of practice."),
        },
        DisclosureDocument {
            name: "Campus Facilities Guide",
            category: DisclosureCategory::Institutional,
            path: "/documents/campus-facilities.pdf",
            description: None,
        },
        DisclosureDocument {
            name: "ACCSC Certificate of Accreditation",
            category: DisclosureCategory::Accsc,
            path: "/documents/accsc-certificate.pdf",
            description: Some("Current grant of accreditation from the commission."),
        },
        DisclosureDocument {
            name: "ACCSC Annual Report Summary",
            category: DisclosureCategory::Accsc,
            path: "/documents/accsc-annual-report.pdf",
            description: None,
        },
        DisclosureDocument {
            name: "BPPE Annual Report",
            category: DisclosureCategory::Bppe,
            path: "/documents/bppe-annual-report.pdf",
            description: Some("State-mandated annual report filed with the bureau."),
        },
        DisclosureDocument {
            name: "School Performance Fact Sheets",
            category: DisclosureCategory::Bppe,
            path: "/documents/performance-fact-sheets.pdf",
            description: Some("Completion, placement, and license examination data by program."),
        },
        DisclosureDocument {
            name: "Student Tuition Recovery Fund Disclosure",
            category: DisclosureCategory::Bppe,
            path: "/documents/strf-disclosure.pdf",
            description: None,
        },
        DisclosureDocument {
            name: "Financial Aid Consumer Information",
            category: DisclosureCategory::FinancialAid,
            path: "/documents/financial-aid-consumer-info.pdf",
            description: Some("Eligibility, verification, and satisfactory progress policies."),
        },
        DisclosureDocument {
            name: "Net Price Calculator Guide",
            category: DisclosureCategory::FinancialAid,
            path: "/documents/net-price-calculator.pdf",
            description: None,
        },
        DisclosureDocument {
            name: "Graduation and Placement Rates",
            category: DisclosureCategory::StudentOutcomes,
            path: "/documents/graduation-placement-rates.pdf",
            description: Some("Most recent reporting-year outcomes for all degree programs."),
        },
        DisclosureDocument {
            name: "Associate of Arts Program Fact Sheet",
            category: DisclosureCategory::ProgramSpecific,
            path: "/documents/aa-fact-sheet.pdf",
            description: None,
        },
        DisclosureDocument {
            name: "Bachelor of Arts Program Fact Sheet",
            category: DisclosureCategory::ProgramSpecific,
            path: "/documents/ba-fact-sheet.pdf",
            description: None,
        },
        DisclosureDocument {
            name: "Certificate Course Syllabus",
            category: DisclosureCategory::ProgramSpecific,
            path: "/documents/certificate-syllabus.pdf",
            description: Some("Week-by-week outline of lectures and studios."),
        },
    ]
}
