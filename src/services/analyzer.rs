//! Line-pattern document analysis.
//!
//! Turns unstructured text into a structured, human-reviewable set of
//! candidate records; never persists anything. The analysis is a single
//! top-to-bottom scan carrying one piece of local state: the current unit
//! heading, which annotates every record extracted after it.
//!
//! Each pattern is an independent predicate+extractor applied in fixed
//! priority order (unit heading, then lesson, then activity); a line matches
//! at most one rule. Non-matching lines are silently ignored by design.

use chrono::NaiveDate;

use crate::api::{ActivityKind, CandidateActivity, CandidateLesson, ImportPreview};

/// Unit label applied to records extracted before any unit heading is seen.
pub const DEFAULT_UNIT: &str = "Generica";

/// Subject assigned to extracted lessons; the pattern rules carry no subject
/// information, so the user fixes this up after import.
pub const PLACEHOLDER_SUBJECT: &str = "Materia da Definire";

/// Outcome of matching one line against the pattern rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// `Unità <n>: <label>` — updates the current-unit context, produces no
    /// record. The captured label has all colons stripped.
    UnitHeading(String),
    /// `- Lezione: <title>`
    Lesson { title: String },
    /// `- <Kind>: <title>` for one of the fixed activity kinds
    Activity { kind: ActivityKind, title: String },
}

/// Strip `prefix` from the start of `line`, comparing case-insensitively.
///
/// Handles non-ASCII letters ("Unità" / "UNITÀ") via full Unicode lowercase
/// comparison, one character at a time.
fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = line;
    for expected in prefix.chars() {
        let actual = rest.chars().next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        rest = &rest[actual.len_utf8()..];
    }
    Some(rest)
}

/// Match a unit heading line: `Unità <digits>:` followed by anything.
pub fn match_unit_heading(line: &str) -> Option<String> {
    let rest = strip_prefix_ci(line, "unità ")?;
    let digit_len: usize = rest
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .map(|c| c.len_utf8())
        .sum();
    if digit_len == 0 || !rest[digit_len..].starts_with(':') {
        return None;
    }
    // The captured label is the whole line with colons removed.
    Some(line.replace(':', ""))
}

/// Match a lesson line: `- Lezione: <title>`.
pub fn match_lesson(line: &str) -> Option<String> {
    let rest = strip_prefix_ci(line, "- lezione: ")?;
    Some(rest.trim().to_string())
}

/// Match an activity line: `- <Kind>: <title>` for the fixed kind vocabulary.
pub fn match_activity(line: &str) -> Option<(ActivityKind, String)> {
    for kind in ActivityKind::ALL {
        let prefix = format!("- {}: ", kind.label());
        if let Some(rest) = strip_prefix_ci(line, &prefix) {
            return Some((kind, rest.trim().to_string()));
        }
    }
    None
}

/// Apply the pattern rules to one trimmed line, in priority order.
pub fn match_line(line: &str) -> Option<LineMatch> {
    if let Some(label) = match_unit_heading(line) {
        return Some(LineMatch::UnitHeading(label));
    }
    if let Some(title) = match_lesson(line) {
        return Some(LineMatch::Lesson { title });
    }
    if let Some((kind, title)) = match_activity(line) {
        return Some(LineMatch::Activity { kind, title });
    }
    None
}

/// Analyze document content, stamping extracted records with `today`.
///
/// Empty or blank content yields an empty preview; that is the documented
/// outcome, not an error. Both LF and CRLF line endings are supported.
pub fn analyze_document_content_at(content: &str, today: NaiveDate) -> ImportPreview {
    let mut preview = ImportPreview::default();
    let mut current_unit = DEFAULT_UNIT.to_string();

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        match match_line(line) {
            Some(LineMatch::UnitHeading(label)) => {
                current_unit = label;
            }
            Some(LineMatch::Lesson { title }) => {
                preview.lessons.push(CandidateLesson {
                    title,
                    description: format!("Lezione dall'{}", current_unit),
                    date: today,
                    subject: PLACEHOLDER_SUBJECT.to_string(),
                });
            }
            Some(LineMatch::Activity { kind, title }) => {
                preview.activities.push(CandidateActivity {
                    title,
                    kind,
                    description: format!("Attività dall'{}", current_unit),
                    date: today,
                });
            }
            None => {
                // Unrecognized line: skipped on purpose.
            }
        }
    }

    preview
}

/// Analyze document content, stamping extracted records with today's date.
pub fn analyze_document_content(content: &str) -> ImportPreview {
    analyze_document_content_at(content, chrono::Local::now().date_naive())
}
