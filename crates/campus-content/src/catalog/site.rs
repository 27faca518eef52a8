use std::sync::OnceLock;

use chrono::NaiveDate;

use super::domain::{ContactInfo, EnrollmentConfig, NavItem, SocialLink};

static CONTACT: OnceLock<ContactInfo> = OnceLock::new();
static SOCIAL: OnceLock<Vec<SocialLink>> = OnceLock::new();
static ENROLLMENT: OnceLock<EnrollmentConfig> = OnceLock::new();
static NAVIGATION: OnceLock<Vec<NavItem>> = OnceLock::new();

pub fn contact_info() -> &'static ContactInfo {
    CONTACT.get_or_init(|| ContactInfo {
        school_name: "Meridian Institute of Interior Design",
        address_line1: "1550 Harbor View Drive",
        address_line2: "Newport Beach, CA 92660",
        phone: "(949) 555-0142",
        email: "admissions@meridian-interiors.edu",
        office_hours: "Monday through Friday, 9:00 am to 5:00 pm",
    })
}

pub fn social_links() -> &'static [SocialLink] {
    SOCIAL
        .get_or_init(|| {
            vec![
                SocialLink {
                    platform: "Instagram",
                    url: "https://instagram.com/meridianinteriors",
                },
                SocialLink {
                    platform: "Pinterest",
                    url: "https://pinterest.com/meridianinteriors",
                },
                SocialLink {
                    platform: "LinkedIn",
                    url: "https://linkedin.com/school/meridian-institute-interior-design",
                },
            ]
        })
        .as_slice()
}

pub fn enrollment_config() -> &'static EnrollmentConfig {
    ENROLLMENT.get_or_init(|| EnrollmentConfig {
        term_starts: vec![
            NaiveDate::from_ymd_opt(2026, 1, 12).expect("valid term start"),
            NaiveDate::from_ymd_opt(2026, 4, 6).expect("valid term start"),
            NaiveDate::from_ymd_opt(2026, 6, 29).expect("valid term start"),
            NaiveDate::from_ymd_opt(2026, 9, 21).expect("valid term start"),
        ],
        application_fee: 100,
        rolling_admissions: true,
        orientation_note: "New students attend a campus orientation the Friday before \
            the first day of the term.",
    })
}

/// Requirements shown on the admissions page, in published order.
pub fn admission_requirements() -> &'static [&'static str] {
    &[
        "Completed application form",
        "High school diploma or equivalent (degree programs)",
        "Entrance interview with an admissions advisor",
        "Portfolio review (Bachelor of Arts and Master's applicants)",
        "Signed enrollment agreement and catalog receipt",
    ]
}

/// Primary site navigation; children nest one level only.
pub fn navigation() -> &'static [NavItem] {
    NAVIGATION.get_or_init(seed_navigation).as_slice()
}

fn seed_navigation() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Home",
            href: "/",
            children: None,
        },
        NavItem {
            label: "Programs",
            href: "/programs",
            children: Some(vec![
                NavItem {
                    label: "Certificate Course",
                    href: "/programs/certificate",
                    children: None,
                },
                NavItem {
                    label: "Associate of Arts",
                    href: "/programs/associate-of-arts",
                    children: None,
                },
                NavItem {
                    label: "Bachelor of Arts",
                    href: "/programs/bachelor-of-arts",
                    children: None,
                },
                NavItem {
                    label: "Master of Interior Architecture",
                    href: "/programs/master-of-interior-architecture",
                    children: None,
                },
            ]),
        },
        NavItem {
            label: "Admissions",
            href: "/admissions",
            children: Some(vec![
                NavItem {
                    label: "Apply",
                    href: "/admissions/apply",
                    children: None,
                },
                NavItem {
                    label: "Tuition",
                    href: "/admissions/tuition",
                    children: None,
                },
                NavItem {
                    label: "Disclosures",
                    href: "/admissions/disclosures",
                    children: None,
                },
            ]),
        },
        NavItem {
            label: "About",
            href: "/about",
            children: Some(vec![
                NavItem {
                    label: "Faculty",
                    href: "/about/faculty",
                    children: None,
                },
                NavItem {
                    label: "Contact",
                    href: "/about/contact",
                    children: None,
                },
            ]),
        },
    ]
}
