use std::sync::OnceLock;

use super::domain::{PaymentOption, PaymentScheduleRow, ProgramTuition};

static TUITION: OnceLock<Vec<ProgramTuition>> = OnceLock::new();

/// Published cost breakdowns, one per program, keyed by `program_slug`.
/// The join to the program table is by convention, not enforced by types;
/// the dataset contract tests pin it.
pub fn tuition_tables() -> &'static [ProgramTuition] {
    TUITION.get_or_init(seed_tuition).as_slice()
}

fn seed_tuition() -> Vec<ProgramTuition> {
    vec![
        ProgramTuition {
            program_slug: "certificate",
            tuition: 3_950,
            registration_fee: 125,
            stlm_fee: 10,
            supply_cost: 600,
            total_charges: 4_085,
            total_estimated_cost: 4_685,
            payment_schedule: vec![PaymentScheduleRow {
                enrollment: "Single session",
                units_per_term: 0,
                tuition_per_term: 3_950,
                terms_to_complete: 1,
            }],
            payment_options: vec![
                PaymentOption {
                    kind: "Pay in full",
                    description: "Tuition and fees paid at registration.",
                    amount: 4_085,
                    per_period: None,
                },
                PaymentOption {
                    kind: "Monthly plan",
                    description: "Registration at signing, then eight monthly payments.",
                    amount: 4_085,
                    per_period: Some(495),
                },
            ],
            notes: vec![
                "The registration fee is non-refundable after the cancellation period.",
                "Supplies are purchased by the student and vary with project choices.",
            ],
        },
        ProgramTuition {
            program_slug: "associate-of-arts",
            tuition: 39_900,
            registration_fee: 100,
            stlm_fee: 100,
            supply_cost: 1_650,
            total_charges: 40_100,
            total_estimated_cost: 41_750,
            payment_schedule: vec![
                PaymentScheduleRow {
                    enrollment: "Full time",
                    units_per_term: 12,
                    tuition_per_term: 6_650,
                    terms_to_complete: 6,
                },
                PaymentScheduleRow {
                    enrollment: "Three-quarter time",
                    units_per_term: 9,
                    tuition_per_term: 4_988,
                    terms_to_complete: 8,
                },
                PaymentScheduleRow {
                    enrollment: "Half time",
                    units_per_term: 6,
                    tuition_per_term: 3_325,
                    terms_to_complete: 12,
                },
            ],
            payment_options: vec![
                PaymentOption {
                    kind: "Pay per term",
                    description: "Tuition due at the start of each term of enrollment.",
                    amount: 40_100,
                    per_period: Some(6_650),
                },
                PaymentOption {
                    kind: "Monthly plan",
                    description: "Interest-free monthly installments over the program.",
                    amount: 40_100,
                    per_period: Some(1_115),
                },
            ],
            notes: vec![
                "Tuition is locked at the catalog rate for continuously enrolled students.",
                "The STLM fee is collected once at initial enrollment as required by state law.",
                "Textbooks and drafting supplies are estimated and not charged by the school.",
            ],
        },
        ProgramTuition {
            program_slug: "bachelor-of-arts",
            tuition: 19_950,
            registration_fee: 100,
            stlm_fee: 50,
            supply_cost: 850,
            total_charges: 20_100,
            total_estimated_cost: 20_950,
            payment_schedule: vec![
                PaymentScheduleRow {
                    enrollment: "Full time",
                    units_per_term: 12,
                    tuition_per_term: 4_988,
                    terms_to_complete: 4,
                },
                PaymentScheduleRow {
                    enrollment: "Half time",
                    units_per_term: 6,
                    tuition_per_term: 2_494,
                    terms_to_complete: 8,
                },
            ],
            payment_options: vec![
                PaymentOption {
                    kind: "Pay per term",
                    description: "Tuition due at the start of each term of enrollment.",
                    amount: 20_100,
                    per_period: Some(4_988),
                },
                PaymentOption {
                    kind: "Monthly plan",
                    description: "Interest-free monthly installments over the program.",
                    amount: 20_100,
                    per_period: Some(1_340),
                },
            ],
            notes: vec![
                "Bachelor's tuition applies to units beyond the Associate of Arts.",
                "Thesis materials and plotting costs are included in the supply estimate.",
            ],
        },
        ProgramTuition {
            program_slug: "master-of-interior-architecture",
            tuition: 14_850,
            registration_fee: 100,
            stlm_fee: 38,
            supply_cost: 500,
            total_charges: 14_988,
            total_estimated_cost: 15_488,
            payment_schedule: vec![PaymentScheduleRow {
                enrollment: "Part time",
                units_per_term: 6,
                tuition_per_term: 2_475,
                terms_to_complete: 6,
            }],
            payment_options: vec![
                PaymentOption {
                    kind: "Pay per term",
                    description: "Tuition due at the start of each term of enrollment.",
                    amount: 14_988,
                    per_period: Some(2_475),
                },
                PaymentOption {
                    kind: "Employer billing",
                    description: "Direct invoicing for employer-sponsored students.",
                    amount: 14_988,
                    per_period: None,
                },
            ],
            notes: vec![
                "Graduate seminars meet in the evening; no summer charges apply.",
            ],
        },
    ]
}
