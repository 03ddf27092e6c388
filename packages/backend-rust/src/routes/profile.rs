//! Per-user review statistics endpoints.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use dvmn_stats::{
    build_module_stats, collect_history, first_review_durations, split_by_lesson, summarize,
    HistorySummary, ModuleStats, PairingMode, ReviewDuration,
};

use crate::response::AppError;
use crate::services::history::HistoryFetchError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    /// Pair the first submission with the first review after it instead of
    /// taking the two oldest entries.
    #[serde(default)]
    skip_unreviewed: bool,
}

#[derive(Debug, Serialize)]
struct UserStatsResponse {
    username: String,
    total_first_reviews: usize,
    mean_hours: f64,
    median_hours: f64,
    modules: Vec<ModuleStats>,
}

#[derive(Debug, Serialize)]
struct MinMaxResponse {
    username: String,
    shortest: ReviewDuration,
    longest: ReviewDuration,
}

pub async fn user_stats(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<StatsQuery>,
) -> Result<Response, AppError> {
    let (summary, modules) = load_stats(&state, &username, query.pairing_mode()).await?;

    Ok(Json(UserStatsResponse {
        username,
        total_first_reviews: summary.total,
        mean_hours: summary.mean_hours,
        median_hours: summary.median_hours,
        modules,
    })
    .into_response())
}

pub async fn user_minmax(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<StatsQuery>,
) -> Result<Response, AppError> {
    let (summary, _) = load_stats(&state, &username, query.pairing_mode()).await?;

    Ok(Json(MinMaxResponse {
        username,
        shortest: summary.shortest,
        longest: summary.longest,
    })
    .into_response())
}

impl StatsQuery {
    fn pairing_mode(&self) -> PairingMode {
        if self.skip_unreviewed {
            PairingMode::SkipUnreviewed
        } else {
            PairingMode::FirstTwo
        }
    }
}

async fn load_stats(
    state: &AppState,
    username: &str,
    mode: PairingMode,
) -> Result<(HistorySummary, Vec<ModuleStats>), AppError> {
    let html = state
        .history()
        .fetch_history(username)
        .await
        .map_err(|err: HistoryFetchError| {
            tracing::warn!(error = %err, username, "history fetch failed");
            AppError::not_found("User not found!")
        })?;

    let events = collect_history(&html).map_err(|err| {
        tracing::error!(error = %err, username, "malformed history page");
        AppError::upstream("History page could not be parsed.")
    })?;

    let durations = first_review_durations(split_by_lesson(&events), mode);
    let summary =
        summarize(&durations).map_err(|_| AppError::not_found("History is empty."))?;
    let modules = build_module_stats(&durations);

    Ok((summary, modules))
}
