//! Classify LLM replies to validation, audit and scan prompts.
//!
//! The prompts ask for exactly one of two shapes: a multi-section audit report, or
//! the literal rejection token. Replies are checked against both; nothing here
//! decides whether a finding is actually valid.

use serde::Serialize;

/// Prefix every rejection starts with.
pub const NO_VULNERABILITY_TOKEN: &str = "#NoVulnerability";

/// The exact rejection line the prompts request.
pub const NO_VULNERABILITY_REPLY: &str = "#NoVulnerability found for this question.";

/// Section headings a complete report carries, in order.
pub const REPORT_SECTIONS: [&str; 7] = [
    "Title",
    "Summary",
    "Finding Description",
    "Impact Explanation",
    "Likelihood Explanation",
    "Recommendation",
    "Proof of Concept",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The model rejected the claim.
    NoVulnerability,
    /// The model produced a report.
    Report(AuditReport),
    /// Neither shape was found.
    Unrecognized,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::NoVulnerability => "no_vulnerability",
            Verdict::Report(_) => "report",
            Verdict::Unrecognized => "unrecognized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// First non-empty line of the Title section, if present.
    pub title: Option<String>,
    pub sections: Vec<ReportSection>,
    /// Required headings absent from the reply.
    pub missing_sections: Vec<String>,
}

impl AuditReport {
    pub fn is_complete(&self) -> bool {
        self.missing_sections.is_empty()
    }

    pub fn section(&self, heading: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.heading.eq_ignore_ascii_case(heading))
            .map(|s| s.body.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub heading: String,
    pub body: String,
}

/// Classify a reply.
///
/// A line opening with the rejection token wins, even when headings precede it.
/// Otherwise any recognised report heading makes the reply a report, and a token
/// buried elsewhere in free text still counts as a rejection.
pub fn parse_verdict(reply: &str) -> Verdict {
    if reply.lines().any(is_rejection_line) {
        return Verdict::NoVulnerability;
    }
    let sections = split_sections(reply);
    if !sections.is_empty() {
        return Verdict::Report(build_report(sections));
    }
    if reply.contains(NO_VULNERABILITY_TOKEN) {
        return Verdict::NoVulnerability;
    }
    Verdict::Unrecognized
}

fn is_rejection_line(line: &str) -> bool {
    line.trim().trim_matches(|c| matches!(c, '`' | '"' | '*')).starts_with(NO_VULNERABILITY_TOKEN)
}

fn build_report(sections: Vec<ReportSection>) -> AuditReport {
    let missing_sections = REPORT_SECTIONS
        .iter()
        .filter(|required| !sections.iter().any(|s| s.heading == **required))
        .map(|required| required.to_string())
        .collect();
    let title = sections
        .iter()
        .find(|s| s.heading == "Title")
        .and_then(|s| s.body.lines().map(str::trim).find(|line| !line.is_empty()))
        .map(str::to_string);
    AuditReport { title, sections, missing_sections }
}

/// Split markdown into recognised report sections. Text before the first recognised
/// heading is dropped; unrecognised headings stay in the enclosing section body.
fn split_sections(reply: &str) -> Vec<ReportSection> {
    let mut sections: Vec<ReportSection> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in reply.lines() {
        if let Some(heading) = report_heading(line) {
            if let Some((heading, body)) = current.take() {
                sections.push(finish_section(heading, body));
            }
            current = Some((heading.to_string(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    if let Some((heading, body)) = current {
        sections.push(finish_section(heading, body));
    }
    sections
}

fn finish_section(heading: String, body: Vec<&str>) -> ReportSection {
    ReportSection { heading, body: body.join("\n").trim().to_string() }
}

/// Canonical heading name when `line` is a markdown heading for a report section.
fn report_heading(line: &str) -> Option<&'static str> {
    let trimmed = line.trim();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 4 {
        return None;
    }
    let rest = &trimmed[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim().trim_matches('*').trim().trim_end_matches(':').trim_matches('*').trim();
    REPORT_SECTIONS.iter().copied().find(|name| name.eq_ignore_ascii_case(text))
}
