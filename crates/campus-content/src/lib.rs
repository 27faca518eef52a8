//! Content model and admissions intake for the Meridian Institute of
//! Interior Design website.
//!
//! The crate has two halves. [`catalog`] holds the hand-authored content
//! tables (programs, tuition, disclosures, site configuration) together with
//! the pure lookup functions the page layer renders from. [`admissions`]
//! implements the application pipeline: a typed wire payload, intake
//! validation, the client-side form state machine, the submission transport,
//! and the HTTP router the service crate mounts.

pub mod admissions;
pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;
