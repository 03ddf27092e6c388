//! Lesson Pairing Engine
//!
//! Groups normalized events into per-lesson queues and derives the duration
//! of the first review cycle for each lesson.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::types::{Action, Event, LessonKey, LessonLog, LogEntry, ReviewDuration};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// How the first review cycle is derived from a lesson's log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairingMode {
    /// The two oldest entries regardless of action role.
    ///
    /// A lesson whose two oldest entries are both submissions still yields a
    /// duration.
    #[default]
    FirstTwo,
    /// The earliest submission paired with the earliest review after it.
    ///
    /// Lessons without a completed review are skipped.
    SkipUnreviewed,
}

/// Groups events by lesson, preserving chronological order within each group.
///
/// Input events must already be in chronological (oldest-first) order, as
/// produced by [`crate::history::collect_history`]. Groups come out in
/// first-appearance order.
pub fn split_by_lesson(events: &[Event]) -> Vec<LessonLog> {
    let mut order: Vec<LessonKey> = Vec::new();
    let mut entries: HashMap<LessonKey, Vec<LogEntry>> = HashMap::new();

    for event in events {
        let key = LessonKey::new(event.module.clone(), event.lesson.clone());
        if !entries.contains_key(&key) {
            order.push(key.clone());
        }
        entries.entry(key).or_default().push(LogEntry {
            action: event.action,
            timestamp: event.timestamp,
        });
    }

    order
        .into_iter()
        .map(|key| {
            let log = entries.remove(&key).unwrap_or_default();
            LessonLog {
                key,
                entries: log.into(),
            }
        })
        .collect()
}

/// Derives first-review durations for every lesson that has a qualifying pair.
///
/// Lessons without a pair contribute nothing; there are no error paths here.
pub fn first_review_durations(logs: Vec<LessonLog>, mode: PairingMode) -> Vec<ReviewDuration> {
    logs.into_iter()
        .filter_map(|log| first_review(log, mode))
        .collect()
}

fn first_review(log: LessonLog, mode: PairingMode) -> Option<ReviewDuration> {
    let LessonLog { key, entries } = log;

    let (sent_at, received_at) = match mode {
        PairingMode::FirstTwo => {
            let mut timestamps = entries.iter().map(|entry| entry.timestamp);
            (timestamps.next()?, timestamps.next()?)
        }
        PairingMode::SkipUnreviewed => {
            let sent = entries.iter().find(|entry| entry.action == Action::Sent)?;
            let received = entries
                .iter()
                .find(|entry| entry.action == Action::Received && entry.timestamp > sent.timestamp)?;
            (sent.timestamp, received.timestamp)
        }
    };

    Some(ReviewDuration {
        key,
        hours: hours_between(sent_at, received_at),
    })
}

/// Elapsed time between two instants, in fractional hours.
pub fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 5, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn event(action: Action, lesson: &str, timestamp: NaiveDateTime) -> Event {
        Event {
            action,
            lesson: lesson.to_string(),
            module: "Знакомство с Django: ORM".to_string(),
            timestamp,
        }
    }

    #[test]
    fn test_first_review_duration_in_fractional_hours() {
        let events = vec![
            event(Action::Sent, "Урок 5. Пишем сайт для риелторов", at(18, 12, 25)),
            event(Action::Received, "Урок 5. Пишем сайт для риелторов", at(18, 15, 55)),
        ];

        let durations = first_review_durations(split_by_lesson(&events), PairingMode::FirstTwo);
        assert_eq!(durations.len(), 1);
        assert!((durations[0].hours - 3.5).abs() < 1e-9);
        assert_eq!(
            durations[0].key,
            LessonKey::new("Знакомство с Django: ORM", "Урок 5. Пишем сайт для риелторов")
        );
    }

    #[test]
    fn test_single_event_lesson_is_skipped() {
        let events = vec![event(Action::Sent, "Урок 1", at(18, 12, 0))];
        let durations = first_review_durations(split_by_lesson(&events), PairingMode::FirstTwo);
        assert!(durations.is_empty());
    }

    #[test]
    fn test_first_two_ignores_action_roles() {
        // two submissions, no review yet: still reported in this mode
        let events = vec![
            event(Action::Sent, "Урок 1", at(18, 10, 0)),
            event(Action::Sent, "Урок 1", at(18, 12, 0)),
        ];
        let durations = first_review_durations(split_by_lesson(&events), PairingMode::FirstTwo);
        assert_eq!(durations.len(), 1);
        assert!((durations[0].hours - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_skip_unreviewed_requires_a_review() {
        let events = vec![
            event(Action::Sent, "Урок 1", at(18, 10, 0)),
            event(Action::Sent, "Урок 1", at(18, 12, 0)),
        ];
        let durations =
            first_review_durations(split_by_lesson(&events), PairingMode::SkipUnreviewed);
        assert!(durations.is_empty());
    }

    #[test]
    fn test_skip_unreviewed_pairs_first_sent_with_first_review_after_it() {
        let events = vec![
            event(Action::Received, "Урок 1", at(17, 9, 0)),
            event(Action::Sent, "Урок 1", at(18, 10, 0)),
            event(Action::Sent, "Урок 1", at(18, 12, 0)),
            event(Action::Received, "Урок 1", at(18, 14, 0)),
        ];
        let durations =
            first_review_durations(split_by_lesson(&events), PairingMode::SkipUnreviewed);
        assert_eq!(durations.len(), 1);
        assert!((durations[0].hours - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_lessons_are_grouped_independently() {
        let events = vec![
            event(Action::Sent, "Урок 1", at(18, 10, 0)),
            event(Action::Sent, "Урок 2", at(18, 11, 0)),
            event(Action::Received, "Урок 1", at(18, 12, 0)),
        ];

        let logs = split_by_lesson(&events);
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].entries.len(), 2);
        assert_eq!(logs[1].entries.len(), 1);

        let durations = first_review_durations(logs, PairingMode::FirstTwo);
        assert_eq!(durations.len(), 1);
        assert!((durations[0].hours - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_hours_between_whole_days() {
        assert!((hours_between(at(18, 0, 0), at(19, 0, 0)) - 24.0).abs() < 1e-9);
    }
}
