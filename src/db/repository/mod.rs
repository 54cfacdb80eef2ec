//! Repository trait: the abstract persistence interface.
//!
//! The record store behind the import pipeline and the lesson store read by
//! the planner are the same collaborator; implementations can be swapped
//! without touching business logic (the production app persisted to a cloud
//! document database with a local-storage fallback).

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{
    NewActivity, NewLesson, RosterRow, ScheduledLesson, Student, StoredActivity,
};

/// Persistence operations for lesson, activity and student records.
///
/// Creation calls accept one record at a time; batching and retry are the
/// caller's concern. Reads return point-in-time snapshots.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Persist one lesson record. Rejects blank titles.
    async fn create_lesson(&self, lesson: NewLesson) -> RepositoryResult<ScheduledLesson>;

    /// Persist one activity record. Rejects blank titles.
    async fn create_activity(&self, activity: NewActivity) -> RepositoryResult<StoredActivity>;

    /// All lesson records, in insertion order.
    async fn list_lessons(&self) -> RepositoryResult<Vec<ScheduledLesson>>;

    /// All activity records, in insertion order.
    async fn list_activities(&self) -> RepositoryResult<Vec<StoredActivity>>;

    /// Lesson records on one calendar date.
    async fn lessons_on(&self, date: NaiveDate) -> RepositoryResult<Vec<ScheduledLesson>>;

    /// Add a student to a class roster. Rejects blank emails.
    async fn add_student(&self, class_id: &str, row: RosterRow) -> RepositoryResult<Student>;

    /// Whether a student with this email is already enrolled in the class.
    async fn student_exists(&self, class_id: &str, email: &str) -> RepositoryResult<bool>;

    /// Students enrolled in a class, in insertion order.
    async fn list_students(&self, class_id: &str) -> RepositoryResult<Vec<Student>>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Remove all records. Test and development helper.
    async fn clear(&self) -> RepositoryResult<()>;
}
