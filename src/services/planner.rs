//! Timetable slot validation and forward search.
//!
//! The planner gate-keeps writes to the weekly timetable. It is a pure
//! decision function over the caller-supplied lesson set: no caching, no
//! side effects. The caller persists an accepted slot and surfaces rejection
//! reasons through the notification sink.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::api::{ScheduledLesson, Slot, SlotDecision};
use crate::models::HourSlot;

/// First schedulable hour of the working day (inclusive).
pub const START_HOUR: u32 = 8;

/// End of the working window (exclusive).
pub const END_HOUR: u32 = 14;

/// Maximum number of lessons on a single calendar day.
pub const MAX_LESSONS_PER_DAY: usize = 5;

/// Forward-search horizon, in days. The search gives up after this bound
/// rather than scanning indefinitely.
pub const SEARCH_HORIZON_DAYS: u64 = 30;

/// Whether the date falls on a working day (Monday through Friday).
fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Decide whether a lesson may be placed at `(date, time)`.
///
/// Checks short-circuit in a fixed order; the first failing check determines
/// the rejection reason:
///
/// 1. working day (Monday–Friday)
/// 2. hour within the working window `[START_HOUR, END_HOUR)`
/// 3. the exact slot is free
/// 4. the day is below the daily lesson capacity
///
/// `existing` is treated as a read-only snapshot; callers racing against
/// concurrent writers must re-validate before persisting.
pub fn can_schedule(date: NaiveDate, time: HourSlot, existing: &[ScheduledLesson]) -> SlotDecision {
    if !is_working_day(date) {
        return SlotDecision::rejected(
            "Non è possibile pianificare nel weekend (Sabato o Domenica).",
        );
    }

    let hour = time.hour();
    if !(START_HOUR..END_HOUR).contains(&hour) {
        return SlotDecision::rejected(format!(
            "L'orario deve essere compreso tra le {}:00 e le {}:00.",
            START_HOUR, END_HOUR
        ));
    }

    // Unplaced lessons (no hour assigned yet) cannot collide with a slot,
    // but they do occupy daily capacity below.
    let slot_taken = existing
        .iter()
        .any(|lesson| lesson.date == date && lesson.time == Some(time));
    if slot_taken {
        return SlotDecision::rejected(format!(
            "Slot orario {} già occupato da un'altra lezione.",
            time
        ));
    }

    let lessons_on_date = existing.iter().filter(|lesson| lesson.date == date).count();
    if lessons_on_date >= MAX_LESSONS_PER_DAY {
        return SlotDecision::rejected(format!(
            "Limite massimo di {} ore giornaliere già raggiunto.",
            MAX_LESSONS_PER_DAY
        ));
    }

    SlotDecision::valid()
}

/// Find the first legal slot at or after `start_date`.
///
/// Scans hour-by-hour within each day's working window, then day-by-day, and
/// returns the first candidate `can_schedule` accepts. Gives up after
/// [`SEARCH_HORIZON_DAYS`] and returns `None`. Deterministic for identical
/// inputs.
pub fn find_next_available_slot(
    start_date: NaiveDate,
    existing: &[ScheduledLesson],
) -> Option<Slot> {
    for offset in 0..SEARCH_HORIZON_DAYS {
        let date = start_date.checked_add_days(Days::new(offset))?;
        for hour in START_HOUR..END_HOUR {
            // Hours in the working window always form valid slots.
            let time = HourSlot::from_hour(hour)?;
            if can_schedule(date, time, existing).is_valid {
                return Some(Slot { date, time });
            }
        }
    }

    log::info!(
        "no free slot within {} days of {}",
        SEARCH_HORIZON_DAYS,
        start_date
    );
    None
}

/// Find the first legal slot starting from today.
pub fn find_next_available_slot_from_today(existing: &[ScheduledLesson]) -> Option<Slot> {
    find_next_available_slot(chrono::Local::now().date_naive(), existing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LessonId;

    fn lesson_at(date: NaiveDate, hour: u32) -> ScheduledLesson {
        ScheduledLesson {
            id: LessonId::random(),
            title: "Lezione".to_string(),
            subject: "Storia".to_string(),
            description: None,
            date,
            time: HourSlot::from_hour(hour),
            notes: None,
        }
    }

    fn monday() -> NaiveDate {
        // 2026-03-02 is a Monday
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn test_weekend_rejected() {
        let saturday = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let decision = can_schedule(saturday, HourSlot::from_hour(10).unwrap(), &[]);
        assert!(!decision.is_valid);
        assert!(decision.reason.unwrap().contains("weekend"));
    }

    #[test]
    fn test_end_hour_is_exclusive() {
        let decision = can_schedule(monday(), HourSlot::from_hour(END_HOUR).unwrap(), &[]);
        assert!(!decision.is_valid);
        assert!(decision.reason.unwrap().contains("orario"));
    }

    #[test]
    fn test_start_hour_is_inclusive() {
        let decision = can_schedule(monday(), HourSlot::from_hour(START_HOUR).unwrap(), &[]);
        assert!(decision.is_valid);
    }

    #[test]
    fn test_occupied_slot_rejected() {
        let existing = vec![lesson_at(monday(), 9)];
        let decision = can_schedule(monday(), HourSlot::from_hour(9).unwrap(), &existing);
        assert!(!decision.is_valid);
        assert!(decision.reason.unwrap().contains("occupato"));
    }

    #[test]
    fn test_daily_capacity_rejected_even_if_hour_free() {
        let existing: Vec<_> = (START_HOUR..START_HOUR + MAX_LESSONS_PER_DAY as u32)
            .map(|h| lesson_at(monday(), h))
            .collect();
        // 13:00 itself is free, but the day already holds five lessons.
        let decision = can_schedule(monday(), HourSlot::from_hour(13).unwrap(), &existing);
        assert!(!decision.is_valid);
        assert!(decision.reason.unwrap().contains("massimo"));
    }

    #[test]
    fn test_valid_slot_accepted() {
        let existing = vec![lesson_at(monday(), 8)];
        let decision = can_schedule(monday(), HourSlot::from_hour(9).unwrap(), &existing);
        assert_eq!(decision, SlotDecision::valid());
    }

    #[test]
    fn test_next_slot_skips_weekend() {
        let saturday = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let slot = find_next_available_slot(saturday, &[]).unwrap();
        assert_eq!(slot.date, NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
        assert_eq!(slot.time.hour(), START_HOUR);
    }

    #[test]
    fn test_next_slot_never_contradicts_can_schedule() {
        let mut existing = Vec::new();
        // Book every working hour of the starting week.
        for day_offset in 0..5 {
            let date = monday().checked_add_days(Days::new(day_offset)).unwrap();
            for hour in START_HOUR..END_HOUR {
                existing.push(lesson_at(date, hour));
            }
        }

        let slot = find_next_available_slot(monday(), &existing).unwrap();
        // Lands in the following week.
        assert!(slot.date >= NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
        assert!(can_schedule(slot.date, slot.time, &existing).is_valid);
    }

    #[test]
    fn test_next_slot_none_when_horizon_full() {
        let mut existing = Vec::new();
        for day_offset in 0..SEARCH_HORIZON_DAYS {
            let date = monday().checked_add_days(Days::new(day_offset)).unwrap();
            for hour in START_HOUR..END_HOUR {
                existing.push(lesson_at(date, hour));
            }
        }

        assert!(find_next_available_slot(monday(), &existing).is_none());
    }

    #[test]
    fn test_unplaced_lessons_count_toward_capacity_only() {
        let mut unplaced = lesson_at(monday(), 9);
        unplaced.time = None;
        let existing = vec![unplaced];

        // No collision possible with an unplaced lesson.
        let decision = can_schedule(monday(), HourSlot::from_hour(9).unwrap(), &existing);
        assert!(decision.is_valid);

        // But five unplaced lessons still exhaust the day.
        let existing: Vec<_> = (0..MAX_LESSONS_PER_DAY)
            .map(|_| {
                let mut lesson = lesson_at(monday(), 9);
                lesson.time = None;
                lesson
            })
            .collect();
        let decision = can_schedule(monday(), HourSlot::from_hour(9).unwrap(), &existing);
        assert!(!decision.is_valid);
    }

    #[test]
    fn test_capacity_counts_only_lessons_on_that_date() {
        let other_day = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        let existing: Vec<_> = (START_HOUR..START_HOUR + 5).map(|h| lesson_at(other_day, h)).collect();
        let decision = can_schedule(monday(), HourSlot::from_hour(9).unwrap(), &existing);
        assert!(decision.is_valid);
    }
}
