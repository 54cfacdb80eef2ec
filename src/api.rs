//! Public API surface for the Rust backend.
//!
//! This file consolidates the shared data shapes exchanged between the
//! services, the repository layer and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::HourSlot;

/// Scheduled lesson identifier (repository document key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonId(pub Uuid);

/// Stored activity identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityId(pub Uuid);

/// Student identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub Uuid);

impl LessonId {
    pub fn random() -> Self {
        LessonId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl ActivityId {
    pub fn random() -> Self {
        ActivityId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl StudentId {
    pub fn random() -> Self {
        StudentId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// Document classification tag.
///
/// Derived deterministically from file name and content keyword search;
/// first matching rule wins in fixed priority order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Timetable-like content ("orario")
    Schedule,
    /// Didactic plan or teaching programme
    DidacticPlan,
    /// Personal notes ("appunti" in the file name)
    Notes,
    /// Anything else
    Generic,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Classification::Schedule => "orario",
            Classification::DidacticPlan => "programma didattico",
            Classification::Notes => "appunti",
            Classification::Generic => "generico",
        };
        write!(f, "{}", label)
    }
}

/// Fixed vocabulary of activity kinds recognized by the import analyzer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Esercitazione,
    Laboratorio,
    Progetto,
    Verifica,
}

impl ActivityKind {
    /// All kinds, in the order they are tried against a line prefix.
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::Esercitazione,
        ActivityKind::Laboratorio,
        ActivityKind::Progetto,
        ActivityKind::Verifica,
    ];

    /// Canonical label as it appears in source documents.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Esercitazione => "Esercitazione",
            ActivityKind::Laboratorio => "Laboratorio",
            ActivityKind::Progetto => "Progetto",
            ActivityKind::Verifica => "Verifica",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Extracted-but-unconfirmed lesson awaiting user approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateLesson {
    /// Lesson title, trimmed from the source line
    pub title: String,
    /// Human-readable reference to the originating unit
    pub description: String,
    /// Defaults to the extraction date
    pub date: NaiveDate,
    /// Free text; placeholder when the source does not supply one
    pub subject: String,
}

/// Extracted-but-unconfirmed activity awaiting user approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateActivity {
    pub title: String,
    pub kind: ActivityKind,
    pub description: String,
    pub date: NaiveDate,
}

/// Result of a document analysis: candidate records in source order.
///
/// Order of appearance is significant; it determines which unit heading each
/// record is attributed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportPreview {
    pub lessons: Vec<CandidateLesson>,
    pub activities: Vec<CandidateActivity>,
}

impl ImportPreview {
    /// True when the analysis found nothing importable.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty() && self.activities.is_empty()
    }

    /// Total number of candidate records.
    pub fn len(&self) -> usize {
        self.lessons.len() + self.activities.len()
    }
}

/// A persisted lesson record.
///
/// `time` is `None` for lessons created by a confirmed import: candidates
/// carry only a date, and the teacher places them on the timetable later.
/// Unplaced lessons still count toward the planner's daily capacity but can
/// never collide with an hour slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledLesson {
    pub id: LessonId,
    pub title: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<HourSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for creating a lesson record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLesson {
    pub title: String,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<HourSlot>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CandidateLesson> for NewLesson {
    fn from(candidate: CandidateLesson) -> Self {
        NewLesson {
            title: candidate.title,
            subject: candidate.subject,
            description: Some(candidate.description),
            date: candidate.date,
            time: None,
            notes: None,
        }
    }
}

/// Payload for creating an activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub title: String,
    pub kind: ActivityKind,
    pub description: String,
    pub date: NaiveDate,
}

impl From<CandidateActivity> for NewActivity {
    fn from(candidate: CandidateActivity) -> Self {
        NewActivity {
            title: candidate.title,
            kind: candidate.kind,
            description: candidate.description,
            date: candidate.date,
        }
    }
}

/// A persisted activity record (not a timetable entry; activities never
/// count toward the planner's daily capacity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredActivity {
    pub id: ActivityId,
    pub title: String,
    pub kind: ActivityKind,
    pub description: String,
    pub date: NaiveDate,
}

/// A student roster record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub class_id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// One schedulable teaching period: a calendar date plus an hour slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub time: HourSlot,
}

/// Outcome of a planner check. Rejections carry a human-readable reason
/// suitable for direct display; they are results, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDecision {
    pub is_valid: bool,
    pub reason: Option<String>,
}

impl SlotDecision {
    pub fn valid() -> Self {
        SlotDecision {
            is_valid: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        SlotDecision {
            is_valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// One record that failed to persist during a confirmed import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFailure {
    /// Position of the record within its candidate sequence (0-based)
    pub index: usize,
    pub title: String,
    pub error: String,
}

/// Outcome of a confirmed import.
///
/// Creation is best-effort: earlier successes are not rolled back when a
/// later record fails, so partial success is possible and must be surfaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub created_lessons: usize,
    pub created_activities: usize,
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    pub fn created_total(&self) -> usize {
        self.created_lessons + self.created_activities
    }

    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty() && self.created_total() > 0
    }
}

/// A per-line error collected during a CSV import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineError {
    /// 1-based line number in the source file
    pub line: usize,
    pub message: String,
}

/// One well-formed roster row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    /// 1-based line number in the source file, kept so store failures can be
    /// reported against the originating line
    pub line: usize,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Parsed roster file: valid rows plus per-line errors. Malformed rows never
/// abort the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterReport {
    pub rows: Vec<RosterRow>,
    pub errors: Vec<LineError>,
}

/// Outcome of importing a roster file into a class: rows persisted, rows
/// skipped because the student was already enrolled, and per-line errors
/// (malformed rows plus per-record store failures).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<LineError>,
}

/// One well-formed grade row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRow {
    pub email: String,
    pub grade: f64,
}

/// Parsed grades file: valid rows plus per-line errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub rows: Vec<GradeRow>,
    pub errors: Vec<LineError>,
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
