//! JSON workout document loading.
//!
//! Reads a document of the form
//!
//! ```json
//! { "sessions": [ { "date": "2026-01-05", "exercise": "Squat",
//!                   "duration_minutes": 50,
//!                   "sets": [ { "exercise": "Squat", "reps": 5, "weight": 100,
//!                               "rpe": 7.5, "date": "2026-01-05", "notes": "" } ] } ] }
//! ```
//!
//! and appends the resulting [`SessionEntry`] values to a [`SessionLog`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};
use workout_core::dates::check_date_format;
use workout_core::error::{Result, WorkoutError};
use workout_core::models::{null_as_default, SessionEntry, SetEntry};

use crate::log::SessionLog;

/// Origin reported in errors for documents that did not come from a file.
const INLINE_ORIGIN: &str = "<inline>";

// ── Public types ──────────────────────────────────────────────────────────────

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Sessions appended to the log by this load.
    pub loaded: usize,
    /// Session items rejected because a required field was missing or mistyped.
    pub skipped: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the workout document at `path` into `log`.
///
/// A missing file yields [`WorkoutError::SourceNotFound`], other read failures
/// [`WorkoutError::FileRead`], and invalid JSON
/// [`WorkoutError::MalformedSource`]. In every failure case a warning is
/// logged and `log` is left untouched, so the caller may keep using whatever
/// it already holds.
pub fn load_sessions_from_path(log: &mut SessionLog, path: &Path) -> Result<LoadSummary> {
    let result = std::fs::read_to_string(path)
        .map_err(|e| read_error(path, e))
        .and_then(|content| load_document(log, &content, path));

    if let Err(e) = &result {
        warn!("{}", e);
    }
    result
}

/// Load a workout document held in memory into `log`.
pub fn load_sessions_from_str(log: &mut SessionLog, content: &str) -> Result<LoadSummary> {
    load_document(log, content, Path::new(INLINE_ORIGIN))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// One session item as it appears in the input document.
#[derive(Debug, Deserialize)]
struct RawSession {
    date: String,
    exercise: String,
    #[serde(default, deserialize_with = "null_as_default")]
    duration_minutes: u32,
    #[serde(default)]
    sets: Vec<SetEntry>,
}

impl From<RawSession> for SessionEntry {
    fn from(raw: RawSession) -> Self {
        SessionEntry::new(raw.date, raw.exercise, raw.sets, raw.duration_minutes)
    }
}

fn read_error(path: &Path, source: std::io::Error) -> WorkoutError {
    if source.kind() == std::io::ErrorKind::NotFound {
        WorkoutError::SourceNotFound(path.to_path_buf())
    } else {
        WorkoutError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn malformed(origin: &Path, reason: impl Into<String>) -> WorkoutError {
    WorkoutError::MalformedSource {
        path: PathBuf::from(origin),
        reason: reason.into(),
    }
}

/// Parse the whole document first, then append, so a malformed document
/// never leaves a partial load behind.
fn load_document(log: &mut SessionLog, content: &str, origin: &Path) -> Result<LoadSummary> {
    let (sessions, skipped) = parse_sessions(content, origin)?;
    let loaded = sessions.len();
    log.extend(sessions);

    info!("Loaded {} workout sessions", log.len());
    if skipped > 0 {
        warn!(
            "Skipped {} session(s) with missing or invalid fields in {}",
            skipped,
            origin.display()
        );
    }

    Ok(LoadSummary { loaded, skipped })
}

/// Turn document text into sessions plus the count of rejected items.
fn parse_sessions(content: &str, origin: &Path) -> Result<(Vec<SessionEntry>, usize)> {
    let document: serde_json::Value =
        serde_json::from_str(content).map_err(|e| malformed(origin, e.to_string()))?;

    let Some(root) = document.as_object() else {
        return Err(malformed(origin, "top-level value is not an object"));
    };

    let items = match root.get("sessions") {
        None => return Ok((Vec::new(), 0)),
        Some(serde_json::Value::Array(items)) => items,
        Some(_) => return Err(malformed(origin, "\"sessions\" is not an array")),
    };

    let mut sessions = Vec::with_capacity(items.len());
    let mut skipped = 0usize;

    for (index, item) in items.iter().enumerate() {
        match RawSession::deserialize(item) {
            Ok(raw) => {
                let context = format!("session {}", index);
                check_date_format(&raw.date, &context);
                for set in &raw.sets {
                    check_date_format(&set.date, &context);
                }
                sessions.push(SessionEntry::from(raw));
            }
            Err(e) => {
                warn!("Skipping session {} in {}: {}", index, origin.display(), e);
                skipped += 1;
            }
        }
    }

    debug!(
        "Parsed {} sessions ({} skipped) from {}",
        sessions.len(),
        skipped,
        origin.display()
    );

    Ok((sessions, skipped))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
