//! Full performance report over a session log.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use workout_core::error::{Result, WorkoutError};
use workout_core::models::{DateRange, SessionEntry};

use crate::aggregator::WorkoutAggregator;

/// Number of recent sessions embedded in a report.
pub const REPORT_RECENT_LIMIT: usize = 5;

// ── Public types ──────────────────────────────────────────────────────────────

/// The complete output of [`generate_report`].
///
/// This is display-shaped: it has no `sessions` key, so serialising a report
/// and feeding it back to the reader loads nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutReport {
    /// Number of sessions in the log.
    pub total_sessions: usize,
    /// Exercises that have a personal-record entry, in map order.
    pub exercises_tracked: Vec<String>,
    /// Heaviest weight per exercise.
    pub personal_records: BTreeMap<String, f64>,
    /// Summed session volume per exercise.
    pub total_volume_by_exercise: BTreeMap<String, f64>,
    /// Sum of `total_volume_by_exercise`.
    pub total_volume_overall: f64,
    /// Earliest and latest session date.
    pub date_range: DateRange,
    /// Most recent sessions, newest first.
    pub recent_workouts: Vec<SessionEntry>,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Assemble a [`WorkoutReport`].
///
/// Returns [`WorkoutError::EmptyCollection`] without computing anything when
/// `sessions` is empty.
pub fn generate_report(sessions: &[SessionEntry]) -> Result<WorkoutReport> {
    let Some(date_range) = DateRange::spanning(sessions) else {
        return Err(WorkoutError::EmptyCollection);
    };

    let personal_records = WorkoutAggregator::personal_records(sessions, None);
    let total_volume_by_exercise = WorkoutAggregator::volume_by_exercise(sessions);
    let total_volume_overall: f64 = total_volume_by_exercise.values().sum();

    debug!(
        "Report over {} sessions, {} exercises",
        sessions.len(),
        personal_records.len()
    );

    Ok(WorkoutReport {
        total_sessions: sessions.len(),
        exercises_tracked: personal_records.keys().cloned().collect(),
        personal_records,
        total_volume_by_exercise,
        total_volume_overall,
        date_range,
        recent_workouts: WorkoutAggregator::recent_workouts(sessions, REPORT_RECENT_LIMIT),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::SessionLog;
    use crate::reader::load_sessions_from_path;
    use tempfile::TempDir;
    use workout_core::models::SetEntry;

    fn make_session(date: &str, exercise: &str, sets: &[(u32, f64)]) -> SessionEntry {
        let sets = sets
            .iter()
            .map(|&(reps, weight)| SetEntry::new(exercise, reps, weight, 8.0, date))
            .collect();
        SessionEntry::new(date, exercise, sets, 60)
    }

    fn sample_log() -> SessionLog {
        SessionLog::from_sessions(vec![
            make_session("2026-01-03", "Squat", &[(5, 100.0), (3, 120.0)]),
            make_session("2026-01-01", "Bench Press", &[(8, 60.0)]),
            make_session("2026-01-07", "Squat", &[(5, 110.0)]),
            make_session("2026-01-05", "Deadlift", &[(5, 140.0)]),
            make_session("2026-01-02", "Bench Press", &[(8, 62.5)]),
            make_session("2026-01-06", "Row", &[(10, 50.0)]),
        ])
    }

    #[test]
    fn test_generate_report_empty_log() {
        let err = generate_report(SessionLog::new().sessions()).unwrap_err();
        assert!(matches!(err, WorkoutError::EmptyCollection));
        assert_eq!(err.to_string(), "No workout data available");
    }

    #[test]
    fn test_generate_report_totals() {
        let log = sample_log();
        let report = generate_report(log.sessions()).unwrap();

        assert_eq!(report.total_sessions, 6);
        assert_eq!(
            report.exercises_tracked,
            vec!["Bench Press", "Deadlift", "Row", "Squat"]
        );
        assert_eq!(report.personal_records["Squat"], 120.0);
        assert_eq!(report.personal_records["Bench Press"], 62.5);

        // 860 + 480 + 550 + 700 + 500 + 500
        assert!((report.total_volume_overall - 3590.0).abs() < 1e-9);
        let summed: f64 = report.total_volume_by_exercise.values().sum();
        assert!((report.total_volume_overall - summed).abs() < 1e-9);
    }

    #[test]
    fn test_generate_report_date_range() {
        let log = sample_log();
        let report = generate_report(log.sessions()).unwrap();
        assert_eq!(report.date_range.start, "2026-01-01");
        assert_eq!(report.date_range.end, "2026-01-07");
    }

    #[test]
    fn test_generate_report_recent_workouts_limited() {
        let log = sample_log();
        let report = generate_report(log.sessions()).unwrap();

        let dates: Vec<&str> = report.recent_workouts.iter().map(|s| s.date()).collect();
        assert_eq!(
            dates,
            vec!["2026-01-07", "2026-01-06", "2026-01-05", "2026-01-03", "2026-01-02"]
        );
    }

    #[test]
    fn test_generate_report_single_session() {
        let log = SessionLog::from_sessions(vec![make_session("2026-02-01", "Squat", &[])]);
        let report = generate_report(log.sessions()).unwrap();

        assert_eq!(report.date_range.start, report.date_range.end);
        assert_eq!(report.personal_records["Squat"], 0.0);
        assert_eq!(report.total_volume_overall, 0.0);
        assert_eq!(report.recent_workouts.len(), 1);
    }

    #[test]
    fn test_serialized_report_is_not_reingestible() {
        let log = sample_log();
        let report = generate_report(log.sessions()).unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, serde_json::to_string_pretty(&report).unwrap()).unwrap();

        let mut reloaded = SessionLog::new();
        let summary = load_sessions_from_path(&mut reloaded, &path).unwrap();

        assert_eq!(summary.loaded, 0);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_serialized_report_shape() {
        let log = sample_log();
        let value = serde_json::to_value(generate_report(log.sessions()).unwrap()).unwrap();

        for key in [
            "total_sessions",
            "exercises_tracked",
            "personal_records",
            "total_volume_by_exercise",
            "total_volume_overall",
            "date_range",
            "recent_workouts",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert!(value.get("error").is_none());
        assert_eq!(value["recent_workouts"][0]["sets"][0]["reps"], 5);
    }
}
