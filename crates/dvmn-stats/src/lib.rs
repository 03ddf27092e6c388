//! # dvmn-stats - review history statistics
//!
//! Pure core of the dvmn.org review-time tooling: no I/O, fully unit-tested,
//! reusable from the CLI and the HTTP backend alike.
//!
//! Pipeline: raw history page -> [`history::collect_history`] ->
//! [`pairing::split_by_lesson`] -> [`pairing::first_review_durations`] ->
//! [`stats::build_module_stats`] / [`stats::summarize`].
//!
//! ## Modules
//!
//! - [`types`] - event model and derived records
//! - [`timeparse`] - localized timestamp parsing
//! - [`normalize`] - label normalization and action classification
//! - [`history`] - history-page row extraction
//! - [`pairing`] - per-lesson pairing of submissions and reviews
//! - [`stats`] - per-module and global aggregation

pub mod history;
pub mod normalize;
pub mod pairing;
pub mod stats;
pub mod timeparse;
pub mod types;

pub use history::{collect_history, HistoryParseError};
pub use normalize::{classify_action, collapse_spaces};
pub use pairing::{first_review_durations, hours_between, split_by_lesson, PairingMode};
pub use stats::{build_module_stats, summarize, EmptyHistoryError};
pub use timeparse::{parse_history_timestamp, TimestampError};
pub use types::{
    Action, Event, HistorySummary, LessonKey, LessonLog, LogEntry, ModuleStats, ReviewDuration,
};
