//! Common Types
//!
//! Shared data structures used across the statistics pipeline.

use std::collections::VecDeque;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==================== Events ====================

/// Closed action vocabulary extracted from free-text history labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Learner submitted a solution for review.
    Sent,
    /// Learner received a code review.
    Received,
}

/// One qualifying row of the history page. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub action: Action,
    pub lesson: String,
    pub module: String,
    pub timestamp: NaiveDateTime,
}

// ==================== Grouping ====================

/// Identity of a lesson inside a module, used as the grouping key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonKey {
    pub module: String,
    pub lesson: String,
}

impl LessonKey {
    pub fn new(module: impl Into<String>, lesson: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            lesson: lesson.into(),
        }
    }
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.module, self.lesson)
    }
}

/// A single recorded entry of a lesson log.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogEntry {
    pub action: Action,
    pub timestamp: NaiveDateTime,
}

/// All recorded entries for one lesson, oldest first.
#[derive(Clone, Debug)]
pub struct LessonLog {
    pub key: LessonKey,
    pub entries: VecDeque<LogEntry>,
}

// ==================== Derived ====================

/// Duration of the first review cycle for one lesson, in fractional hours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewDuration {
    #[serde(flatten)]
    pub key: LessonKey,
    pub hours: f64,
}

impl fmt::Display for ReviewDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {:.2} ч.", self.key, self.hours)
    }
}

/// Per-module aggregate of first-review durations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModuleStats {
    pub module: String,
    pub mean_hours: f64,
    pub median_hours: f64,
}

impl fmt::Display for ModuleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Среднее {:.2}, медиана {:.2}",
            self.module, self.mean_hours, self.median_hours
        )
    }
}

/// Global summary across all computed first-review durations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total: usize,
    pub shortest: ReviewDuration,
    pub longest: ReviewDuration,
    pub mean_hours: f64,
    pub median_hours: f64,
}
