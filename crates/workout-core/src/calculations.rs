use crate::models::SetEntry;

/// Total volume of a sequence of sets: the sum of `reps × weight`.
///
/// Returns `0.0` for an empty slice. No rounding or unit conversion is applied.
///
/// # Examples
///
/// ```
/// use workout_core::calculations::calculate_total_volume;
/// use workout_core::models::SetEntry;
///
/// let sets = vec![
///     SetEntry::new("Squat", 5, 100.0, 7.0, "2026-01-01"),
///     SetEntry::new("Squat", 3, 120.0, 8.0, "2026-01-01"),
/// ];
/// assert_eq!(calculate_total_volume(&sets), 860.0);
/// assert_eq!(calculate_total_volume(&[]), 0.0);
/// ```
pub fn calculate_total_volume(sets: &[SetEntry]) -> f64 {
    sets.iter().map(SetEntry::volume).sum()
}

/// Heaviest weight across `sets`, or `0.0` when the slice is empty.
pub fn max_weight(sets: &[SetEntry]) -> f64 {
    sets.iter().map(|s| s.weight).reduce(f64::max).unwrap_or(0.0)
}

/// Mean repetitions per set.
///
/// Returns `0.0` for an empty slice to avoid division by zero.
pub fn average_reps(sets: &[SetEntry]) -> f64 {
    if sets.is_empty() {
        return 0.0;
    }
    let total: u64 = sets.iter().map(|s| u64::from(s.reps)).sum();
    total as f64 / sets.len() as f64
}
