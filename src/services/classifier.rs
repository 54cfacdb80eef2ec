//! Document classification.
//!
//! Classification is a case-insensitive substring search over the content and
//! the file name. The rules are checked in a fixed priority order and the
//! first match wins; there is no error path, every document gets a tag.

use crate::api::Classification;

/// Content keywords marking a timetable document.
const SCHEDULE_KEYWORDS: [&str; 1] = ["orario"];

/// Content keywords marking a didactic plan / teaching programme.
const DIDACTIC_PLAN_KEYWORDS: [&str; 2] = ["piano didattico", "programma"];

/// File-name keywords marking personal notes.
const NOTES_KEYWORDS: [&str; 1] = ["appunti"];

/// Classify a document from its file name and text content.
///
/// Pure and idempotent: identical inputs always produce the identical tag.
pub fn classify_document(file_name: &str, content: &str) -> Classification {
    let lower_content = content.to_lowercase();
    let lower_file_name = file_name.to_lowercase();

    if SCHEDULE_KEYWORDS.iter().any(|kw| lower_content.contains(kw)) {
        return Classification::Schedule;
    }
    if DIDACTIC_PLAN_KEYWORDS
        .iter()
        .any(|kw| lower_content.contains(kw))
    {
        return Classification::DidacticPlan;
    }
    if NOTES_KEYWORDS
        .iter()
        .any(|kw| lower_file_name.contains(kw))
    {
        return Classification::Notes;
    }
    Classification::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_wins_on_content() {
        let tag = classify_document("qualcosa.txt", "Ecco il nuovo ORARIO settimanale");
        assert_eq!(tag, Classification::Schedule);
    }

    #[test]
    fn test_didactic_plan_keywords() {
        assert_eq!(
            classify_document("doc.txt", "Piano Didattico annuale"),
            Classification::DidacticPlan
        );
        assert_eq!(
            classify_document("doc.txt", "il programma del corso"),
            Classification::DidacticPlan
        );
    }

    #[test]
    fn test_notes_from_file_name() {
        let tag = classify_document("Appunti-storia.txt", "contenuto qualsiasi");
        assert_eq!(tag, Classification::Notes);
    }

    #[test]
    fn test_generic_fallback() {
        let tag = classify_document("relazione.txt", "testo senza parole chiave");
        assert_eq!(tag, Classification::Generic);
    }

    #[test]
    fn test_priority_schedule_over_plan() {
        // Both keyword families present: the schedule rule is checked first.
        let tag = classify_document("doc.txt", "orario del programma didattico");
        assert_eq!(tag, Classification::Schedule);
    }

    #[test]
    fn test_priority_plan_over_notes() {
        let tag = classify_document("appunti.txt", "programma di matematica");
        assert_eq!(tag, Classification::DidacticPlan);
    }

    #[test]
    fn test_empty_content_is_generic() {
        assert_eq!(classify_document("vuoto.txt", ""), Classification::Generic);
    }

    #[test]
    fn test_idempotent() {
        let a = classify_document("doc.txt", "programma");
        let b = classify_document("doc.txt", "programma");
        assert_eq!(a, b);
    }
}
