use std::sync::OnceLock;

use super::domain::{Course, CourseOutline, DegreeType, Program};

static PROGRAMS: OnceLock<Vec<Program>> = OnceLock::new();

/// All published programs, in catalog order. Built once, immutable for the
/// life of the process.
pub fn programs() -> &'static [Program] {
    PROGRAMS.get_or_init(seed_programs).as_slice()
}

fn seed_programs() -> Vec<Program> {
    vec![
        Program {
            slug: "certificate",
            name: "Avocational Certificate Course in Interior Design",
            short_name: "Certificate Course",
            degree_type: DegreeType::Certificate,
            duration: "8 months (one evening or morning session per week)",
            credit_units: "Non-credit, avocational",
            tuition: 3_950,
            total_charges: 4_085,
            total_estimated_cost: 4_685,
            description: "An introductory survey of interior design for personal \
                enrichment. Students attend one lecture and one studio per week and \
                complete a furnished room project of their own. The course carries no \
                academic credit and does not lead to employment as a designer.",
            is_avocational: true,
            online_available: false,
            is_accredited: false,
            cida_accredited: false,
            part_time_only: true,
            accreditor: None,
            minimum_gpa: None,
            admission_requirements: Some(
                "Open enrollment; applicants must be 18 or older. No portfolio or \
                 prior coursework required.",
            ),
            schedule: Some("Weekday mornings, weekday evenings, or Saturday intensive"),
            requires_ge: None,
            career_outcomes: vec![],
            career_note: Some(
                "The certificate course is offered for personal enrichment and is not \
                 intended to prepare students for professional practice.",
            ),
            courses: vec![],
            lectures: certificate_lectures(),
            studios: certificate_studios(),
        },
        Program {
            slug: "associate-of-arts",
            name: "Associate of Arts in Interior Design",
            short_name: "Associate of Arts",
            degree_type: DegreeType::AssociateOfArts,
            duration: "24 to 36 months",
            credit_units: "64 semester units (96 quarter units)",
            tuition: 39_900,
            total_charges: 40_100,
            total_estimated_cost: 41_750,
            description: "A studio-centered degree covering residential and small \
                commercial design: drafting, space planning, color, materials, codes, \
                history of furnishings, and digital presentation. Graduates leave with \
                a working portfolio and supervised field experience.",
            is_avocational: false,
            online_available: true,
            is_accredited: true,
            cida_accredited: false,
            part_time_only: false,
            accreditor: Some("ACCSC"),
            minimum_gpa: Some(2.0),
            admission_requirements: Some(
                "High school diploma or equivalent, entrance interview, and a short \
                 statement of purpose.",
            ),
            schedule: Some("Day and evening tracks; online sections for lecture courses"),
            requires_ge: Some(
                "General education units in written communication and mathematics are \
                 completed alongside studio coursework.",
            ),
            career_outcomes: vec![
                "Residential design assistant",
                "Kitchen and bath designer",
                "Showroom and workroom staff designer",
                "Color and materials consultant",
            ],
            career_note: None,
            courses: associate_courses(),
            lectures: vec![],
            studios: vec![],
        },
        Program {
            slug: "bachelor-of-arts",
            name: "Bachelor of Arts in Interior Design",
            short_name: "Bachelor of Arts",
            degree_type: DegreeType::BachelorOfArts,
            duration: "12 to 18 months beyond the Associate of Arts",
            credit_units: "48 semester units beyond the Associate (72 quarter units)",
            tuition: 19_950,
            total_charges: 20_100,
            total_estimated_cost: 20_950,
            description: "The degree-completion program for Associate graduates. \
                Advanced studios in commercial, hospitality, and sustainable design \
                culminate in a CIDA-reviewed senior thesis project presented to a \
                panel of practicing designers.",
            is_avocational: false,
            online_available: false,
            is_accredited: true,
            cida_accredited: true,
            part_time_only: false,
            accreditor: Some("ACCSC"),
            minimum_gpa: Some(2.0),
            admission_requirements: Some(
                "Completion of the Associate of Arts in Interior Design (or equivalent \
                 transfer credit) with a portfolio review.",
            ),
            schedule: Some("Day track with evening electives"),
            requires_ge: Some(
                "Upper-division general education units in the arts and sciences are \
                 required for the baccalaureate.",
            ),
            career_outcomes: vec![
                "Commercial interior designer",
                "Hospitality and workplace designer",
                "Design project coordinator",
                "Junior designer, architecture firms",
            ],
            career_note: None,
            courses: bachelor_courses(),
            lectures: vec![],
            studios: vec![],
        },
        Program {
            slug: "master-of-interior-architecture",
            name: "Master of Interior Architecture",
            short_name: "Master's Program",
            degree_type: DegreeType::Masters,
            duration: "18 to 24 months, part time",
            credit_units: "36 semester units (54 quarter units)",
            tuition: 14_850,
            total_charges: 14_988,
            total_estimated_cost: 15_488,
            description: "A part-time graduate program for working designers who hold \
                a baccalaureate. Evening seminars pair with a year-long directed \
                thesis in interior architecture, adaptive reuse, or exhibition \
                design.",
            is_avocational: false,
            online_available: true,
            is_accredited: true,
            cida_accredited: false,
            part_time_only: true,
            accreditor: Some("ACCSC"),
            minimum_gpa: Some(3.0),
            admission_requirements: Some(
                "Bachelor's degree in interior design or a related field, portfolio, \
                 and two professional references.",
            ),
            schedule: Some("Evening seminars two nights per week; summers off"),
            requires_ge: None,
            career_outcomes: vec![
                "Senior interior designer",
                "Interior architecture consultant",
                "Design studio lead",
                "Adjunct design faculty",
            ],
            career_note: None,
            courses: masters_courses(),
            lectures: vec![],
            studios: vec![],
        },
    ]
}

fn certificate_lectures() -> Vec<CourseOutline> {
    vec![
        CourseOutline {
            name: "Color and Composition",
            description: "Color systems, palettes, and how composition shapes a room.",
        },
        CourseOutline {
            name: "History of Furnishings",
            description: "Period styles from the classical orders through modernism.",
        },
        CourseOutline {
            name: "Materials and Finishes",
            description: "Textiles, flooring, wallcoverings, and specification basics.",
        },
        CourseOutline {
            name: "Space Planning Fundamentals",
            description: "Reading plans, furniture clearances, and traffic flow.",
        },
        CourseOutline {
            name: "Lighting for Interiors",
            description: "Layered lighting, fixture families, and lamp selection.",
        },
        CourseOutline {
            name: "Working with Clients",
            description: "Budgets, sourcing, and presenting a design concept.",
        },
    ]
}

fn certificate_studios() -> Vec<CourseOutline> {
    vec![
        CourseOutline {
            name: "Drafting and Sketching Studio",
            description: "Hand drafting, perspective sketching, and scaled plans.",
        },
        CourseOutline {
            name: "Residential Studio",
            description: "A complete scheme for a living space, concept to boards.",
        },
        CourseOutline {
            name: "Textiles Studio",
            description: "Building a materials scheme with samples and workroom terms.",
        },
        CourseOutline {
            name: "Digital Presentation Studio",
            description: "Mood boards and client-ready presentations on the computer.",
        },
        CourseOutline {
            name: "Model Building Studio",
            description: "Scale models and dimensional studies in foam core and board.",
        },
        CourseOutline {
            name: "Portfolio Studio",
            description: "Assembling the term's work into a finished presentation book.",
        },
    ]
}

fn associate_courses() -> Vec<Course> {
    vec![
        Course {
            code: "ID110",
            name: "Design Fundamentals",
            units: 4,
            description: "Elements and principles of design applied to interiors.",
        },
        Course {
            code: "ID115",
            name: "Architectural Drafting",
            units: 4,
            description: "Orthographic projection, plans, sections, and elevations.",
        },
        Course {
            code: "ID120",
            name: "Color Theory",
            units: 3,
            description: "Color systems and schemes for residential interiors.",
        },
        Course {
            code: "ID130",
            name: "History of Interiors I",
            units: 3,
            description: "Antiquity through the eighteenth century.",
        },
        Course {
            code: "ID135",
            name: "History of Interiors II",
            units: 3,
            description: "The nineteenth century through contemporary practice.",
        },
        Course {
            code: "ID140",
            name: "Materials and Specifications",
            units: 4,
            description: "Finish materials, performance criteria, and spec writing.",
        },
        Course {
            code: "ID150",
            name: "Space Planning Studio",
            units: 4,
            description: "Programming and furniture planning for residential projects.",
        },
        Course {
            code: "ID160",
            name: "Computer-Aided Design I",
            units: 4,
            description: "Production drawings in industry-standard CAD software.",
        },
        Course {
            code: "ID210",
            name: "Lighting Design",
            units: 3,
            description: "Lighting calculations, fixture selection, and controls.",
        },
        Course {
            code: "ID220",
            name: "Codes and Construction",
            units: 4,
            description: "Building systems, accessibility, and life-safety codes.",
        },
        Course {
            code: "ID230",
            name: "Residential Design Studio",
            units: 4,
            description: "A full residential project from program through presentation.",
        },
        Course {
            code: "ID240",
            name: "Portfolio and Practice",
            units: 3,
            description: "Portfolio development and entry-level business practices.",
        },
    ]
}

fn bachelor_courses() -> Vec<Course> {
    vec![
        Course {
            code: "ID310",
            name: "Commercial Design Studio",
            units: 4,
            description: "Office and retail interiors with code-driven documentation.",
        },
        Course {
            code: "ID320",
            name: "Hospitality Design Studio",
            units: 4,
            description: "Restaurant and boutique hotel projects at concept depth.",
        },
        Course {
            code: "ID330",
            name: "Sustainable Design",
            units: 3,
            description: "Environmental criteria, certifications, and healthy materials.",
        },
        Course {
            code: "ID340",
            name: "Computer-Aided Design II",
            units: 4,
            description: "Three-dimensional modeling and rendered presentations.",
        },
        Course {
            code: "ID350",
            name: "Professional Practice",
            units: 3,
            description: "Contracts, fees, project management, and office structure.",
        },
        Course {
            code: "ID410",
            name: "Advanced Detailing",
            units: 3,
            description: "Casework, millwork, and custom furniture documentation.",
        },
        Course {
            code: "ID420",
            name: "Senior Thesis Studio",
            units: 6,
            description: "A self-directed capstone reviewed by a professional panel.",
        },
        Course {
            code: "ID430",
            name: "Internship",
            units: 3,
            description: "Supervised field experience in a working design office.",
        },
    ]
}

fn masters_courses() -> Vec<Course> {
    vec![
        Course {
            code: "MIA610",
            name: "Interior Architecture Seminar",
            units: 3,
            description: "Readings and criticism in contemporary interior architecture.",
        },
        Course {
            code: "MIA620",
            name: "Adaptive Reuse Studio",
            units: 6,
            description: "Repositioning an existing structure for a new interior use.",
        },
        Course {
            code: "MIA630",
            name: "Research Methods",
            units: 3,
            description: "Evidence-based design research and thesis preparation.",
        },
        Course {
            code: "MIA640",
            name: "Exhibition Design Studio",
            units: 6,
            description: "Narrative environments, wayfinding, and temporary structures.",
        },
        Course {
            code: "MIA710",
            name: "Thesis I",
            units: 9,
            description: "Directed thesis: research, program, and schematic design.",
        },
        Course {
            code: "MIA720",
            name: "Thesis II",
            units: 9,
            description: "Directed thesis: development, documentation, and defense.",
        },
    ]
}
