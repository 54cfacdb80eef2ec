//! Unit tests for the shared API types.

use super::*;

#[test]
fn test_classification_serde_snake_case() {
    let json = serde_json::to_string(&Classification::DidacticPlan).unwrap();
    assert_eq!(json, r#""didactic_plan""#);

    let back: Classification = serde_json::from_str(r#""schedule""#).unwrap();
    assert_eq!(back, Classification::Schedule);
}

#[test]
fn test_classification_display() {
    assert_eq!(Classification::Schedule.to_string(), "orario");
    assert_eq!(Classification::Generic.to_string(), "generico");
}

#[test]
fn test_activity_kind_labels() {
    assert_eq!(ActivityKind::Esercitazione.label(), "Esercitazione");
    assert_eq!(ActivityKind::Verifica.to_string(), "Verifica");
    assert_eq!(ActivityKind::ALL.len(), 4);
}

#[test]
fn test_import_preview_empty() {
    let preview = ImportPreview::default();
    assert!(preview.is_empty());
    assert_eq!(preview.len(), 0);
}

#[test]
fn test_import_preview_len() {
    let preview = ImportPreview {
        lessons: vec![CandidateLesson {
            title: "t".to_string(),
            description: "d".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            subject: "s".to_string(),
        }],
        activities: vec![],
    };
    assert!(!preview.is_empty());
    assert_eq!(preview.len(), 1);
}

#[test]
fn test_slot_decision_constructors() {
    let ok = SlotDecision::valid();
    assert!(ok.is_valid);
    assert!(ok.reason.is_none());

    let rejected = SlotDecision::rejected("slot occupato");
    assert!(!rejected.is_valid);
    assert_eq!(rejected.reason.as_deref(), Some("slot occupato"));
}

#[test]
fn test_import_report_partial() {
    let mut report = ImportReport::default();
    assert!(!report.is_partial());

    report.created_lessons = 2;
    report.failures.push(ImportFailure {
        index: 2,
        title: "x".to_string(),
        error: "boom".to_string(),
    });
    assert!(report.is_partial());
    assert_eq!(report.created_total(), 2);
}

#[test]
fn test_ids_are_unique() {
    assert_ne!(LessonId::random().value(), LessonId::random().value());
    assert_ne!(ActivityId::random().value(), ActivityId::random().value());
}

#[test]
fn test_scheduled_lesson_serde_roundtrip() {
    let lesson = ScheduledLesson {
        id: LessonId::random(),
        title: "Fotosintesi".to_string(),
        subject: "Scienze".to_string(),
        description: None,
        date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        time: Some("09:00".parse().unwrap()),
        notes: None,
    };
    let json = serde_json::to_string(&lesson).unwrap();
    // absent optional fields are skipped
    assert!(!json.contains("notes"));
    assert!(json.contains(r#""time":"09:00""#));
    let back: ScheduledLesson = serde_json::from_str(&json).unwrap();
    assert_eq!(back, lesson);
}

#[test]
fn test_candidate_conversions_preserve_fields() {
    let candidate = CandidateLesson {
        title: "Pontormo".to_string(),
        description: "Lezione dall'Unità 2".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        subject: "Materia da Definire".to_string(),
    };
    let new_lesson: NewLesson = candidate.clone().into();
    assert_eq!(new_lesson.title, candidate.title);
    assert_eq!(new_lesson.description.as_deref(), Some("Lezione dall'Unità 2"));
    assert!(new_lesson.time.is_none());

    let activity = CandidateActivity {
        title: "Ricerca".to_string(),
        kind: ActivityKind::Progetto,
        description: "Attività dall'Unità 2".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    };
    let new_activity: NewActivity = activity.clone().into();
    assert_eq!(new_activity.kind, ActivityKind::Progetto);
    assert_eq!(new_activity.title, "Ricerca");
}
