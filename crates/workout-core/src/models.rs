use serde::{Deserialize, Deserializer, Serialize};

use crate::calculations;

/// Deserialize an explicit `null` as the field type's default.
///
/// Pair with `#[serde(default)]` so an absent key and a `null` value load the
/// same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single performed set, as recorded in the input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Exercise performed in this set.
    pub exercise: String,
    /// Number of repetitions completed.
    pub reps: u32,
    /// Load lifted per repetition.
    pub weight: f64,
    /// Rate of perceived exertion, conventionally 1–10. Not validated.
    pub rpe: f64,
    /// Calendar date of the set, `YYYY-MM-DD`.
    pub date: String,
    /// Free-text note.
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

impl SetEntry {
    pub fn new(
        exercise: impl Into<String>,
        reps: u32,
        weight: f64,
        rpe: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            exercise: exercise.into(),
            reps,
            weight,
            rpe,
            date: date.into(),
            notes: String::new(),
        }
    }

    /// Attach a free-text note to the set.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// `reps × weight` for this set.
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

/// One workout occurrence: a single exercise performed on a single date.
///
/// `total_volume` is derived from `sets` when the session is built and cannot
/// be set independently, so it always equals the sum of `reps × weight`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionEntry {
    date: String,
    exercise: String,
    sets: Vec<SetEntry>,
    total_volume: f64,
    duration_minutes: u32,
}

impl SessionEntry {
    /// Build a session and compute its total volume.
    pub fn new(
        date: impl Into<String>,
        exercise: impl Into<String>,
        sets: Vec<SetEntry>,
        duration_minutes: u32,
    ) -> Self {
        let total_volume = calculations::calculate_total_volume(&sets);
        Self {
            date: date.into(),
            exercise: exercise.into(),
            sets,
            total_volume,
            duration_minutes,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    /// Sets in the order they were performed.
    pub fn sets(&self) -> &[SetEntry] {
        &self.sets
    }

    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Heaviest set in the session, `0.0` when there are no sets.
    pub fn max_weight(&self) -> f64 {
        calculations::max_weight(&self.sets)
    }

    /// Mean repetitions per set, `0.0` when there are no sets.
    pub fn average_reps(&self) -> f64 {
        calculations::average_reps(&self.sets)
    }
}

/// First and last date of a group of sessions, compared as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// Lexicographic min/max over the session dates. `None` for no sessions.
    pub fn spanning<'a, I>(sessions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a SessionEntry>,
    {
        let mut dates = sessions.into_iter().map(SessionEntry::date);
        let first = dates.next()?;
        let (start, end) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}
