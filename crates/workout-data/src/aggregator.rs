//! Aggregation queries over loaded sessions: personal records, volume totals,
//! per-exercise progression, single-session summaries and recent workouts.
//!
//! Dates are compared as strings throughout. That matches calendar order only
//! for zero-padded `YYYY-MM-DD` dates (see [`workout_core::dates`]).

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use workout_core::error::{Result, WorkoutError};
use workout_core::models::{DateRange, SessionEntry};

pub use workout_core::settings::DEFAULT_WINDOW_DAYS;

/// Default number of sessions returned by [`WorkoutAggregator::recent_workouts`].
pub const DEFAULT_RECENT_LIMIT: usize = 7;

// ── Result types ──────────────────────────────────────────────────────────────

/// Session volume on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumePoint {
    pub date: String,
    pub volume: f64,
}

/// Heaviest set of a session on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: String,
    pub weight: f64,
}

/// Per-session time series for one exercise, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progression {
    pub exercise: String,
    pub total_sessions: usize,
    pub date_range: DateRange,
    pub volume_progression: Vec<VolumePoint>,
    pub max_weight_progression: Vec<WeightPoint>,
}

/// Headline numbers for a single session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub date: String,
    pub exercise: String,
    pub total_volume: f64,
    pub sets_count: usize,
    pub max_weight: f64,
    pub avg_reps: f64,
    pub duration_minutes: u32,
}

// ── WorkoutAggregator ─────────────────────────────────────────────────────────

/// Stateless collection of queries over a slice of sessions.
pub struct WorkoutAggregator;

impl WorkoutAggregator {
    /// Heaviest weight ever recorded, per exercise.
    ///
    /// Each session contributes its heaviest set (`0.0` when it has no sets),
    /// and the running maximum per exercise starts at `0.0`. With a filter the
    /// result always holds exactly one entry for that exercise, valued `0.0`
    /// when nothing was recorded for it.
    pub fn personal_records(
        sessions: &[SessionEntry],
        exercise: Option<&str>,
    ) -> BTreeMap<String, f64> {
        let mut prs: BTreeMap<String, f64> = BTreeMap::new();

        for session in sessions {
            if exercise.is_some_and(|name| session.exercise() != name) {
                continue;
            }
            let current = prs.entry(session.exercise().to_string()).or_insert(0.0);
            *current = current.max(session.max_weight());
        }

        if let Some(name) = exercise {
            prs.entry(name.to_string()).or_insert(0.0);
        }
        prs
    }

    /// Volume and max-weight series for `exercise`, one point per session,
    /// ordered by date ascending (stable for equal dates).
    ///
    /// `window_days` is accepted for callers that want to express a rolling
    /// window, but no recency filtering is applied: every session for the
    /// exercise is included.
    pub fn calculate_progression(
        sessions: &[SessionEntry],
        exercise: &str,
        window_days: u32,
    ) -> Result<Progression> {
        let mut selected: Vec<&SessionEntry> =
            sessions.iter().filter(|s| s.exercise() == exercise).collect();

        // TODO: apply `window_days` once it is decided whether the window is
        // anchored at today or at the latest session.
        debug!(
            "Progression for {}: {} sessions, window of {} days not applied",
            exercise,
            selected.len(),
            window_days
        );

        if selected.is_empty() {
            return Err(WorkoutError::NoExerciseData(exercise.to_string()));
        }

        selected.sort_by(|a, b| a.date().cmp(b.date()));

        let first = selected[0].date().to_string();
        let last = selected[selected.len() - 1].date().to_string();

        Ok(Progression {
            exercise: exercise.to_string(),
            total_sessions: selected.len(),
            date_range: DateRange {
                start: first,
                end: last,
            },
            volume_progression: selected
                .iter()
                .map(|s| VolumePoint {
                    date: s.date().to_string(),
                    volume: s.total_volume(),
                })
                .collect(),
            max_weight_progression: selected
                .iter()
                .map(|s| WeightPoint {
                    date: s.date().to_string(),
                    weight: s.max_weight(),
                })
                .collect(),
        })
    }

    /// Sum of session volume per exercise.
    pub fn volume_by_exercise(sessions: &[SessionEntry]) -> BTreeMap<String, f64> {
        let mut volumes: BTreeMap<String, f64> = BTreeMap::new();
        for session in sessions {
            *volumes.entry(session.exercise().to_string()).or_insert(0.0) +=
                session.total_volume();
        }
        volumes
    }

    /// Summary of the first session (in log order) recorded on `date`.
    pub fn session_summary(sessions: &[SessionEntry], date: &str) -> Result<SessionSummary> {
        let session = sessions
            .iter()
            .find(|s| s.date() == date)
            .ok_or_else(|| WorkoutError::NoSessionOnDate(date.to_string()))?;

        Ok(SessionSummary {
            date: session.date().to_string(),
            exercise: session.exercise().to_string(),
            total_volume: session.total_volume(),
            sets_count: session.sets().len(),
            max_weight: session.max_weight(),
            avg_reps: session.average_reps(),
            duration_minutes: session.duration_minutes(),
        })
    }

    /// The `limit` most recent sessions, newest first, with their sets.
    ///
    /// `limit` is a count of sessions, not a number of days. Sessions sharing
    /// a date keep their log order.
    pub fn recent_workouts(sessions: &[SessionEntry], limit: usize) -> Vec<SessionEntry> {
        let mut sorted: Vec<&SessionEntry> = sessions.iter().collect();
        sorted.sort_by(|a, b| b.date().cmp(a.date()));
        sorted.into_iter().take(limit).cloned().collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
