//! High-level service functions over the repository trait.
//!
//! These helpers work with any [`RecordRepository`] implementation and are
//! what the HTTP handlers (and embedding applications) call instead of
//! touching the repository directly.

use chrono::NaiveDate;

use crate::api::{
    LineError, NewActivity, NewLesson, RosterImportSummary, ScheduledLesson, StoredActivity,
};
use crate::db::repository::{RecordRepository, RepositoryResult};
use crate::services::roster;

/// Persist one lesson record.
pub async fn create_lesson(
    repo: &dyn RecordRepository,
    lesson: NewLesson,
) -> RepositoryResult<ScheduledLesson> {
    repo.create_lesson(lesson).await
}

/// Persist one activity record.
pub async fn create_activity(
    repo: &dyn RecordRepository,
    activity: NewActivity,
) -> RepositoryResult<StoredActivity> {
    repo.create_activity(activity).await
}

/// All lesson records.
pub async fn list_lessons(repo: &dyn RecordRepository) -> RepositoryResult<Vec<ScheduledLesson>> {
    repo.list_lessons().await
}

/// All activity records.
pub async fn list_activities(
    repo: &dyn RecordRepository,
) -> RepositoryResult<Vec<StoredActivity>> {
    repo.list_activities().await
}

/// Lesson records on one date.
pub async fn lessons_on(
    repo: &dyn RecordRepository,
    date: NaiveDate,
) -> RepositoryResult<Vec<ScheduledLesson>> {
    repo.lessons_on(date).await
}

/// Whether the backing store is reachable.
pub async fn health_check(repo: &dyn RecordRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Import a roster CSV into a class.
///
/// Parses the content, skips students already enrolled (matched by email),
/// persists the rest one at a time. Per-line parse errors and per-record
/// store failures are collected in the summary; neither aborts the batch.
pub async fn import_roster(
    repo: &dyn RecordRepository,
    class_id: &str,
    content: &str,
) -> RepositoryResult<RosterImportSummary> {
    let report = roster::parse_roster(content);

    let mut summary = RosterImportSummary {
        errors: report.errors,
        ..Default::default()
    };

    for row in report.rows {
        if repo.student_exists(class_id, &row.email).await? {
            summary.skipped += 1;
            continue;
        }

        let line = row.line;
        match repo.add_student(class_id, row).await {
            Ok(_) => summary.imported += 1,
            Err(e) => summary.errors.push(LineError {
                line,
                message: e.to_string(),
            }),
        }
    }

    log::info!(
        "roster import for class {}: {} imported, {} skipped, {} errors",
        class_id,
        summary.imported,
        summary.skipped,
        summary.errors.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;

    #[tokio::test]
    async fn test_import_roster_skips_existing() {
        let repo = LocalRepository::new();
        let content = "Mario,Rossi,m@example.com\nAnna,Bianchi,a@example.com";

        let first = import_roster(&repo, "3B", content).await.unwrap();
        assert_eq!(first.imported, 2);
        assert_eq!(first.skipped, 0);

        let second = import_roster(&repo, "3B", content).await.unwrap();
        assert_eq!(second.imported, 0);
        assert_eq!(second.skipped, 2);
    }

    #[tokio::test]
    async fn test_import_roster_reports_bad_lines() {
        let repo = LocalRepository::new();
        let content = "Mario,Rossi,m@example.com\nriga rotta";

        let summary = import_roster(&repo, "3B", content).await.unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].line, 2);
    }

    #[tokio::test]
    async fn test_import_roster_same_email_other_class() {
        let repo = LocalRepository::new();
        let content = "Mario,Rossi,m@example.com";

        import_roster(&repo, "3B", content).await.unwrap();
        let other = import_roster(&repo, "3A", content).await.unwrap();
        // Enrollment is per class.
        assert_eq!(other.imported, 1);
    }
}
