//! History Page Row Extraction
//!
//! The history page contains repeated `logtable-row` blocks, each with exactly
//! four text cells in fixed order: action label, lesson label, module label,
//! timestamp label. The page lists newest entries first; the extractor returns
//! events in chronological (oldest-first) order.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::normalize::{classify_action, collapse_spaces};
use crate::timeparse::{parse_history_timestamp, TimestampError};
use crate::types::Event;

fn row_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<div[^>]*class="[^"]*logtable-row[^"]*"[^>]*>"#)
            .expect("row pattern is valid")
    })
}

fn cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<div[^>]*>(.*?)</div>").expect("cell pattern is valid"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"))
}

#[derive(Debug, Error)]
pub enum HistoryParseError {
    #[error("history row has fewer than four cells")]
    RowShape,
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Extracts qualifying review events from the raw history page.
///
/// Rows whose action label is outside the closed vocabulary are discarded.
/// A malformed timestamp in a qualifying row is a hard failure.
pub fn collect_history(html: &str) -> Result<Vec<Event>, HistoryParseError> {
    let row_starts: Vec<usize> = row_start_re().find_iter(html).map(|m| m.end()).collect();

    let mut events = Vec::new();
    for (index, &start) in row_starts.iter().enumerate() {
        let end = row_starts.get(index + 1).copied().unwrap_or(html.len());
        let row = &html[start..end];

        let mut cells = cell_re()
            .captures_iter(row)
            .filter_map(|captures| captures.get(1))
            .map(|cell| cell_text(cell.as_str()));

        let action_label = cells.next().ok_or(HistoryParseError::RowShape)?;
        let lesson = cells.next().ok_or(HistoryParseError::RowShape)?;
        let module = cells.next().ok_or(HistoryParseError::RowShape)?;
        let timestamp_label = cells.next().ok_or(HistoryParseError::RowShape)?;

        // the timestamp is validated for every row, qualifying or not
        let timestamp = parse_history_timestamp(&timestamp_label)?;

        let action = match classify_action(&action_label) {
            Some(action) => action,
            None => continue,
        };

        events.push(Event {
            action,
            lesson,
            module,
            timestamp,
        });
    }

    // the page logs newest entries first
    events.reverse();
    Ok(events)
}

fn cell_text(raw: &str) -> String {
    let stripped = tag_re().replace_all(raw, " ");
    collapse_spaces(&decode_entities(&stripped))
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
