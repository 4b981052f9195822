//! Stdout rendering of query results, as pretty JSON or plain-text tables.

use serde::Serialize;
use workout_core::error::{Result, WorkoutError};
use workout_core::formatting::{format_minutes, format_number, format_weight};
use workout_core::settings::OutputFormat;
use workout_data::aggregator::Progression;
use workout_data::analysis::WorkoutReport;

const BANNER_WIDTH: usize = 60;

/// Title framed by two rules of `=`, preceded by a blank line.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("\n{rule}\n{title}\n{rule}")
}

/// JSON shape printed in place of a result when a query fails.
pub fn error_payload(err: &WorkoutError) -> serde_json::Value {
    serde_json::json!({
        "error": err.to_string(),
        "code": err.code(),
    })
}

/// Render a report query outcome.
pub fn render_report(result: &Result<WorkoutReport>, format: OutputFormat) -> Result<String> {
    render(result, format, report_text)
}

/// Render a progression query outcome.
pub fn render_progression(result: &Result<Progression>, format: OutputFormat) -> Result<String> {
    render(result, format, progression_text)
}

fn render<T: Serialize>(
    result: &Result<T>,
    format: OutputFormat,
    text: fn(&T) -> String,
) -> Result<String> {
    match (result, format) {
        (Ok(value), OutputFormat::Json) => Ok(serde_json::to_string_pretty(value)?),
        (Err(e), OutputFormat::Json) => Ok(serde_json::to_string_pretty(&error_payload(e))?),
        (Ok(value), OutputFormat::Text) => Ok(text(value)),
        (Err(e), OutputFormat::Text) => Ok(format!("error: {} ({})", e, e.code())),
    }
}

fn report_text(report: &WorkoutReport) -> String {
    let mut lines = vec![
        format!(
            "Sessions:      {} ({} to {})",
            report.total_sessions, report.date_range.start, report.date_range.end
        ),
        format!(
            "Total volume:  {}",
            format_number(report.total_volume_overall, 0)
        ),
        String::new(),
        format!("{:<24} {:>10} {:>14}", "Exercise", "PR", "Volume"),
    ];
    for exercise in &report.exercises_tracked {
        let pr = report.personal_records.get(exercise).copied().unwrap_or(0.0);
        let volume = report
            .total_volume_by_exercise
            .get(exercise)
            .copied()
            .unwrap_or(0.0);
        lines.push(format!(
            "{:<24} {:>10} {:>14}",
            exercise,
            format_weight(pr),
            format_number(volume, 0)
        ));
    }
    lines.push(String::new());
    lines.push("Recent workouts".to_string());
    lines.extend(report.recent_workouts.iter().map(|session| {
        format!(
            "  {}  {:<20} {:>3} sets {:>10} {:>8}",
            session.date(),
            session.exercise(),
            session.sets().len(),
            format_number(session.total_volume(), 0),
            format_minutes(session.duration_minutes())
        )
    }));
    lines.join("\n")
}

fn progression_text(progression: &Progression) -> String {
    let mut lines = vec![
        format!(
            "{}: {} sessions ({} to {})",
            progression.exercise,
            progression.total_sessions,
            progression.date_range.start,
            progression.date_range.end
        ),
        String::new(),
        format!("{:<12} {:>14} {:>12}", "Date", "Volume", "Max weight"),
    ];
    lines.extend(
        progression
            .volume_progression
            .iter()
            .zip(&progression.max_weight_progression)
            .map(|(volume, weight)| {
                format!(
                    "{:<12} {:>14} {:>12}",
                    volume.date,
                    format_number(volume.volume, 0),
                    format_weight(weight.weight)
                )
            }),
    );
    lines.join("\n")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
