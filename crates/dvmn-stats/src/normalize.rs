//! Label Normalization
//!
//! Free-text labels from the history page are whitespace-normalized before
//! classification, and action labels are mapped onto the closed vocabulary by
//! prefix match. Anything outside the vocabulary is discarded by the caller.

use crate::types::Action;

/// Prefix marking a "submitted for review" row.
const SENT_PREFIX: &str = "Отправил на проверку";

/// Prefix marking a "received code review" row.
const RECEIVED_PREFIX: &str = "Получил код-ревью";

/// Collapses whitespace runs to single spaces and trims both ends.
pub fn collapse_spaces(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classifies a normalized action label. Labels outside the vocabulary yield `None`.
pub fn classify_action(label: &str) -> Option<Action> {
    if label.starts_with(SENT_PREFIX) {
        Some(Action::Sent)
    } else if label.starts_with(RECEIVED_PREFIX) {
        Some(Action::Received)
    } else {
        None
    }
}
