//! Document upload and import orchestration.
//!
//! Ties together the file source, classifier, analyzer, notification sink
//! and record store. Each upload owns its own preview state: a later upload
//! replaces an earlier one, never merges with it.

use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::api::{Classification, ImportFailure, ImportPreview, ImportReport};
use crate::db::repository::RecordRepository;
use crate::models::Document;
use crate::services::analyzer::analyze_document_content;
use crate::services::classifier::classify_document;
use crate::services::notify::{NotificationSink, Severity};

/// Supplier of one named blob of text content (file picker, drag-drop, CLI
/// argument). The read is the only suspension point in the pipeline.
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn read_text(&self) -> anyhow::Result<Document>;
}

/// File source reading from the local filesystem.
pub struct PathFileSource {
    path: PathBuf,
}

impl PathFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PathFileSource { path: path.into() }
    }
}

#[async_trait]
impl FileSource for PathFileSource {
    async fn read_text(&self) -> anyhow::Result<Document> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Errore durante la lettura del file: {}", self.path.display()))?;
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Document::new(file_name, content))
    }
}

/// Result of a successful upload analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadAnalysis {
    pub classification: Classification,
    pub preview: ImportPreview,
    /// Content checksum, for detecting re-uploads of the same file
    pub checksum: String,
}

/// Read, classify and analyze one uploaded file.
///
/// - Read failure: the sink gets an error notification and the error is
///   returned; nothing is partially committed.
/// - Nothing importable: the sink gets a warning and `Ok(None)` is returned;
///   this is a terminal outcome, not an error.
/// - Otherwise the preview is returned for the user to confirm or discard.
pub async fn handle_file_upload(
    source: &dyn FileSource,
    sink: &dyn NotificationSink,
) -> anyhow::Result<Option<UploadAnalysis>> {
    let document = match source.read_text().await {
        Ok(document) => document,
        Err(e) => {
            sink.notify(&format!("Errore: {}", e), Severity::Error);
            return Err(e);
        }
    };

    let classification = classify_document(&document.file_name, &document.content);
    sink.notify(
        &format!(
            "File classificato come: {}. Analisi del contenuto in corso...",
            classification
        ),
        Severity::Info,
    );

    let preview = analyze_document_content(&document.content);
    if preview.is_empty() {
        sink.notify(
            "Analisi completata. Nessun elemento importabile trovato nel documento.",
            Severity::Warning,
        );
        return Ok(None);
    }

    log::debug!(
        "document '{}' analyzed: {} lessons, {} activities",
        document.file_name,
        preview.lessons.len(),
        preview.activities.len()
    );

    Ok(Some(UploadAnalysis {
        classification,
        checksum: document.checksum(),
        preview,
    }))
}

/// Persist a confirmed preview through the record store.
///
/// Creation calls happen once per candidate, lessons first then activities,
/// in extraction order. Best-effort policy: a failing record is recorded in
/// the report and the batch continues; earlier successes are not rolled
/// back, so the caller must surface partial results.
pub async fn confirm_import(
    repo: &dyn RecordRepository,
    preview: ImportPreview,
    sink: &dyn NotificationSink,
) -> ImportReport {
    let mut report = ImportReport::default();

    for (index, lesson) in preview.lessons.into_iter().enumerate() {
        let title = lesson.title.clone();
        match repo.create_lesson(lesson.into()).await {
            Ok(_) => report.created_lessons += 1,
            Err(e) => report.failures.push(ImportFailure {
                index,
                title,
                error: e.to_string(),
            }),
        }
    }

    for (index, activity) in preview.activities.into_iter().enumerate() {
        let title = activity.title.clone();
        match repo.create_activity(activity.into()).await {
            Ok(_) => report.created_activities += 1,
            Err(e) => report.failures.push(ImportFailure {
                index,
                title,
                error: e.to_string(),
            }),
        }
    }

    if report.failures.is_empty() {
        sink.notify(
            &format!("{} elementi importati con successo!", report.created_total()),
            Severity::Success,
        );
    } else {
        sink.notify(
            &format!(
                "{} elementi importati, {} falliti.",
                report.created_total(),
                report.failures.len()
            ),
            Severity::Warning,
        );
    }

    report
}
