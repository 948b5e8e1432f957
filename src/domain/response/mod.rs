pub mod questions;
pub mod verdict;

pub use questions::parse_questions;
pub use verdict::{
    AuditReport, NO_VULNERABILITY_REPLY, NO_VULNERABILITY_TOKEN, REPORT_SECTIONS, ReportSection,
    Verdict, parse_verdict,
};
