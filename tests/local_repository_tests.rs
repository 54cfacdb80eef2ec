//! Snapshot persistence tests for the local repository.
//!
//! The in-memory backend optionally mirrors its state to a JSON snapshot
//! file; these tests verify the state survives a reopen and that a corrupt
//! snapshot is rejected up front.

use chrono::NaiveDate;
use tempfile::tempdir;

use docente_rust::api::{NewActivity, NewLesson, ActivityKind, RosterRow};
use docente_rust::db::repositories::LocalRepository;
use docente_rust::db::repository::{RecordRepository, RepositoryError};

fn sample_lesson() -> NewLesson {
    NewLesson {
        title: "Il Futurismo".to_string(),
        subject: "Storia dell'Arte".to_string(),
        description: Some("Lezione dall'Unità 3 Le Avanguardie".to_string()),
        date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
        time: Some("11:00".parse().unwrap()),
        notes: None,
    }
}

#[tokio::test]
async fn test_snapshot_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let repo = LocalRepository::with_snapshot(&path).unwrap();
        let created = repo.create_lesson(sample_lesson()).await.unwrap();
        repo.create_activity(NewActivity {
            title: "Collage futurista".to_string(),
            kind: ActivityKind::Laboratorio,
            description: "Attività dall'Unità 3 Le Avanguardie".to_string(),
            date: created.date,
        })
        .await
        .unwrap();
    }

    let reopened = LocalRepository::with_snapshot(&path).unwrap();
    let lessons = reopened.list_lessons().await.unwrap();
    let activities = reopened.list_activities().await.unwrap();

    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].title, "Il Futurismo");
    assert_eq!(lessons[0].time, Some("11:00".parse().unwrap()));
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].kind, ActivityKind::Laboratorio);
}

#[tokio::test]
async fn test_snapshot_persists_students() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let repo = LocalRepository::with_snapshot(&path).unwrap();
        repo.add_student(
            "3B",
            RosterRow {
                line: 1,
                name: "Anna".to_string(),
                surname: "Bianchi".to_string(),
                email: "anna.bianchi@example.com".to_string(),
            },
        )
        .await
        .unwrap();
    }

    let reopened = LocalRepository::with_snapshot(&path).unwrap();
    assert!(reopened
        .student_exists("3B", "anna.bianchi@example.com")
        .await
        .unwrap());
    assert_eq!(reopened.list_students("3B").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_snapshot_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never-written.json");

    let repo = LocalRepository::with_snapshot(&path).unwrap();
    assert!(repo.list_lessons().await.unwrap().is_empty());
}

#[test]
fn test_corrupt_snapshot_rejected_on_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not valid json").unwrap();

    let err = LocalRepository::with_snapshot(&path).unwrap_err();
    assert!(matches!(err, RepositoryError::StorageError { .. }));
}

#[tokio::test]
async fn test_clear_rewrites_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let repo = LocalRepository::with_snapshot(&path).unwrap();
        repo.create_lesson(sample_lesson()).await.unwrap();
        repo.clear().await.unwrap();
    }

    let reopened = LocalRepository::with_snapshot(&path).unwrap();
    assert!(reopened.list_lessons().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_writes_all_land() {
    let repo = std::sync::Arc::new(LocalRepository::new());

    let mut handles = Vec::new();
    for i in 0..10 {
        let repo = std::sync::Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let mut lesson = sample_lesson();
            lesson.title = format!("Lezione {}", i);
            repo.create_lesson(lesson).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(repo.list_lessons().await.unwrap().len(), 10);
}
