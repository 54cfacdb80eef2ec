//! In-memory repository with optional JSON snapshot persistence.
//!
//! This is the "local-storage fallback" backend: records live in memory
//! behind a read-write lock, and when a snapshot path is configured every
//! mutation rewrites a JSON file so state survives restarts. Suitable for
//! unit testing, local development and single-user deployments.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::api::{
    ActivityId, LessonId, NewActivity, NewLesson, RosterRow, ScheduledLesson, Student, StudentId,
    StoredActivity,
};
use crate::db::repository::{
    ErrorContext, RecordRepository, RepositoryError, RepositoryResult,
};

/// Serializable store contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreState {
    lessons: Vec<ScheduledLesson>,
    activities: Vec<StoredActivity>,
    students: Vec<Student>,
}

/// In-memory implementation of [`RecordRepository`].
#[derive(Debug)]
pub struct LocalRepository {
    state: RwLock<StoreState>,
    snapshot_path: Option<PathBuf>,
}

impl LocalRepository {
    /// Create an empty, purely in-memory repository.
    pub fn new() -> Self {
        LocalRepository {
            state: RwLock::new(StoreState::default()),
            snapshot_path: None,
        }
    }

    /// Open a repository backed by a JSON snapshot file.
    ///
    /// An existing snapshot is loaded eagerly; a corrupt one surfaces as a
    /// storage error here rather than poisoning later operations. A missing
    /// file simply starts empty.
    pub fn with_snapshot(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                RepositoryError::storage_with_context(
                    e.to_string(),
                    ErrorContext::new("load_snapshot").with_details(path.display().to_string()),
                )
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                RepositoryError::storage_with_context(
                    e.to_string(),
                    ErrorContext::new("load_snapshot").with_details(path.display().to_string()),
                )
            })?
        } else {
            StoreState::default()
        };

        Ok(LocalRepository {
            state: RwLock::new(state),
            snapshot_path: Some(path),
        })
    }

    /// Rewrite the snapshot file, when configured.
    fn persist(&self, state: &StoreState) -> RepositoryResult<()> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(path, json).map_err(|e| {
            RepositoryError::storage_with_context(
                e.to_string(),
                ErrorContext::new("write_snapshot").with_details(path.display().to_string()),
            )
        })
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for LocalRepository {
    async fn create_lesson(&self, lesson: NewLesson) -> RepositoryResult<ScheduledLesson> {
        let title = lesson.title.trim();
        if title.is_empty() {
            return Err(RepositoryError::validation_with_context(
                "lesson title must not be blank",
                ErrorContext::new("create_lesson").with_entity("lesson"),
            ));
        }

        let record = ScheduledLesson {
            id: LessonId::random(),
            title: title.to_string(),
            subject: lesson.subject,
            description: lesson.description,
            date: lesson.date,
            time: lesson.time,
            notes: lesson.notes,
        };

        let mut state = self.state.write();
        state.lessons.push(record.clone());
        self.persist(&state)?;
        Ok(record)
    }

    async fn create_activity(&self, activity: NewActivity) -> RepositoryResult<StoredActivity> {
        let title = activity.title.trim();
        if title.is_empty() {
            return Err(RepositoryError::validation_with_context(
                "activity title must not be blank",
                ErrorContext::new("create_activity").with_entity("activity"),
            ));
        }

        let record = StoredActivity {
            id: ActivityId::random(),
            title: title.to_string(),
            kind: activity.kind,
            description: activity.description,
            date: activity.date,
        };

        let mut state = self.state.write();
        state.activities.push(record.clone());
        self.persist(&state)?;
        Ok(record)
    }

    async fn list_lessons(&self) -> RepositoryResult<Vec<ScheduledLesson>> {
        Ok(self.state.read().lessons.clone())
    }

    async fn list_activities(&self) -> RepositoryResult<Vec<StoredActivity>> {
        Ok(self.state.read().activities.clone())
    }

    async fn lessons_on(&self, date: NaiveDate) -> RepositoryResult<Vec<ScheduledLesson>> {
        Ok(self
            .state
            .read()
            .lessons
            .iter()
            .filter(|lesson| lesson.date == date)
            .cloned()
            .collect())
    }

    async fn add_student(&self, class_id: &str, row: RosterRow) -> RepositoryResult<Student> {
        if row.email.trim().is_empty() {
            return Err(RepositoryError::validation_with_context(
                "student email must not be blank",
                ErrorContext::new("add_student").with_entity("student"),
            ));
        }

        let record = Student {
            id: StudentId::random(),
            class_id: class_id.to_string(),
            name: row.name,
            surname: row.surname,
            email: row.email,
        };

        let mut state = self.state.write();
        state.students.push(record.clone());
        self.persist(&state)?;
        Ok(record)
    }

    async fn student_exists(&self, class_id: &str, email: &str) -> RepositoryResult<bool> {
        Ok(self
            .state
            .read()
            .students
            .iter()
            .any(|s| s.class_id == class_id && s.email.eq_ignore_ascii_case(email)))
    }

    async fn list_students(&self, class_id: &str) -> RepositoryResult<Vec<Student>> {
        Ok(self
            .state
            .read()
            .students
            .iter()
            .filter(|s| s.class_id == class_id)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn clear(&self) -> RepositoryResult<()> {
        let mut state = self.state.write();
        *state = StoreState::default();
        self.persist(&state)
    }
}
