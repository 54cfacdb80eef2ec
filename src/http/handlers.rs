//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    ActivityListResponse, AnalyzeDocumentRequest, AnalyzeDocumentResponse, CreateLessonRequest,
    HealthResponse, LessonListResponse, NextSlotQuery, RosterImportSummary,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ImportPreview, ImportReport, NewLesson, ScheduledLesson, Slot};
use crate::db::services as db_services;
use crate::models::Document;
use crate::services::{analyzer, classifier, planner};
use crate::services::notify::LogSink;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Document Import
// =============================================================================

/// POST /v1/documents/analyze
///
/// Classify and analyze an uploaded document; returns the candidate-record
/// preview for the user to confirm. An empty preview is a normal outcome.
pub async fn analyze_document(
    State(_state): State<AppState>,
    Json(request): Json<AnalyzeDocumentRequest>,
) -> HandlerResult<AnalyzeDocumentResponse> {
    let document = Document::new(request.file_name, request.content);

    let classification = classifier::classify_document(&document.file_name, &document.content);
    let preview = analyzer::analyze_document_content(&document.content);

    let message = preview.is_empty().then(|| {
        "Analisi completata. Nessun elemento importabile trovato nel documento.".to_string()
    });

    Ok(Json(AnalyzeDocumentResponse {
        classification,
        checksum: document.checksum(),
        preview,
        message,
    }))
}

/// POST /v1/imports/confirm
///
/// Persist a confirmed preview. Best-effort: per-record failures appear in
/// the report, earlier successes are not rolled back.
pub async fn confirm_import(
    State(state): State<AppState>,
    Json(preview): Json<ImportPreview>,
) -> HandlerResult<ImportReport> {
    let report =
        crate::services::confirm_import(state.repository.as_ref(), preview, &LogSink).await;
    Ok(Json(report))
}

// =============================================================================
// Lessons & Planner
// =============================================================================

/// GET /v1/lessons
///
/// List all lesson records.
pub async fn list_lessons(State(state): State<AppState>) -> HandlerResult<LessonListResponse> {
    let lessons = db_services::list_lessons(state.repository.as_ref()).await?;
    let total = lessons.len();

    Ok(Json(LessonListResponse { lessons, total }))
}

/// GET /v1/activities
///
/// List all activity records.
pub async fn list_activities(
    State(state): State<AppState>,
) -> HandlerResult<ActivityListResponse> {
    let activities = db_services::list_activities(state.repository.as_ref()).await?;
    let total = activities.len();

    Ok(Json(ActivityListResponse { activities, total }))
}

/// POST /v1/lessons
///
/// Create a timetable lesson, gate-kept by the planner. A rejected slot maps
/// to 422 with the human-readable reason.
pub async fn create_lesson(
    State(state): State<AppState>,
    Json(request): Json<CreateLessonRequest>,
) -> Result<(axum::http::StatusCode, Json<ScheduledLesson>), AppError> {
    let existing = db_services::list_lessons(state.repository.as_ref()).await?;

    let decision = planner::can_schedule(request.date, request.time, &existing);
    if !decision.is_valid {
        let reason = decision
            .reason
            .unwrap_or_else(|| "Slot non disponibile.".to_string());
        return Err(AppError::SlotRejected(reason));
    }

    let lesson = db_services::create_lesson(
        state.repository.as_ref(),
        NewLesson {
            title: request.title,
            subject: request.subject,
            description: None,
            date: request.date,
            time: Some(request.time),
            notes: request.notes,
        },
    )
    .await?;

    Ok((axum::http::StatusCode::CREATED, Json(lesson)))
}

/// GET /v1/schedule/next-slot
///
/// Find the next legal timetable slot at or after the given date (default:
/// today). 404 when no slot exists within the search horizon.
pub async fn next_slot(
    State(state): State<AppState>,
    Query(query): Query<NextSlotQuery>,
) -> HandlerResult<Slot> {
    let existing = db_services::list_lessons(state.repository.as_ref()).await?;

    let slot = match query.from {
        Some(from) => planner::find_next_available_slot(from, &existing),
        None => planner::find_next_available_slot_from_today(&existing),
    };

    slot.map(Json).ok_or_else(|| {
        AppError::NotFound("Nessuno slot disponibile trovato nei prossimi 30 giorni.".to_string())
    })
}

// =============================================================================
// Roster Import
// =============================================================================

/// POST /v1/classes/{class_id}/roster
///
/// Import a roster CSV (text body) into a class. Per-line errors and skipped
/// duplicates are reported; the batch never aborts on a bad row.
pub async fn import_roster(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    body: String,
) -> HandlerResult<RosterImportSummary> {
    if body.trim().is_empty() {
        return Err(AppError::BadRequest("File vuoto o non valido.".to_string()));
    }

    let summary = db_services::import_roster(state.repository.as_ref(), &class_id, &body).await?;
    Ok(Json(summary))
}
