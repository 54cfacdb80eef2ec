//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Most payloads are re-exported from the api module since they already
//! derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Import pipeline
    CandidateActivity, CandidateLesson, Classification, ImportFailure, ImportPreview,
    ImportReport,
    // Lessons and activities
    ActivityKind, NewLesson, ScheduledLesson, StoredActivity,
    // Planner
    Slot, SlotDecision,
    // Roster
    LineError, RosterImportSummary,
};
pub use crate::models::HourSlot;

/// Request body for analyzing an uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeDocumentRequest {
    /// Original file name (used by the classifier)
    pub file_name: String,
    /// Decoded text content
    pub content: String,
}

/// Response for document analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeDocumentResponse {
    /// Classification tag
    pub classification: Classification,
    /// SHA-256 checksum of the content
    pub checksum: String,
    /// Candidate records, in source order
    pub preview: ImportPreview,
    /// Set when the analysis found nothing importable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request body for creating a timetable lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLessonRequest {
    pub title: String,
    pub subject: String,
    pub date: NaiveDate,
    /// Hour slot as "HH:MM"; only the hour is significant
    pub time: HourSlot,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Lesson list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonListResponse {
    /// List of lessons
    pub lessons: Vec<ScheduledLesson>,
    /// Total count
    pub total: usize,
}

/// Activity list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityListResponse {
    pub activities: Vec<StoredActivity>,
    pub total: usize,
}

/// Query parameters for the next-slot search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NextSlotQuery {
    /// Date to start the search from (default: today)
    #[serde(default)]
    pub from: Option<NaiveDate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
