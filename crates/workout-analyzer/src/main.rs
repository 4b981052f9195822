mod bootstrap;
mod render;

use std::io::Write;

use anyhow::Result;
use workout_core::settings::Settings;
use workout_data::aggregator::WorkoutAggregator;
use workout_data::analysis::generate_report;
use workout_data::log::SessionLog;
use workout_data::reader::load_sessions_from_path;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Workout Analyzer v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    run(&settings, &mut stdout.lock())
}

/// Load the workout log named in `settings`, then write the full report and
/// the progression for the selected exercise to `out`.
fn run(settings: &Settings, out: &mut impl Write) -> Result<()> {
    let mut log = SessionLog::new();
    // Load failures are logged by the reader; the report then covers an empty log.
    let _ = load_sessions_from_path(&mut log, &settings.data_file);

    let report = generate_report(log.sessions());
    writeln!(out, "{}", render::banner("WORKOUT PERFORMANCE REPORT"))?;
    writeln!(out, "{}", render::render_report(&report, settings.format)?)?;

    let progression = WorkoutAggregator::calculate_progression(
        log.sessions(),
        &settings.exercise,
        settings.window_days,
    );
    let title = format!("{} PROGRESSION ANALYSIS", settings.exercise.to_uppercase());
    writeln!(out, "{}", render::banner(&title))?;
    writeln!(
        out,
        "{}",
        render::render_progression(&progression, settings.format)?
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r#"{"sessions": [
        {"date": "2026-01-01", "exercise": "Squat", "duration_minutes": 45, "sets": [
            {"exercise": "Squat", "reps": 5, "weight": 100, "rpe": 7, "date": "2026-01-01"}
        ]},
        {"date": "2026-01-03", "exercise": "Squat", "sets": [
            {"exercise": "Squat", "reps": 5, "weight": 105, "rpe": 8, "date": "2026-01-03"}
        ]}
    ]}"#;

    fn run_to_string(args: &[&str]) -> String {
        let settings = Settings::load_from_args(args.iter().copied());
        let mut buf: Vec<u8> = Vec::new();
        run(&settings, &mut buf).expect("run");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_run_prints_report_and_progression() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("workouts.json");
        std::fs::write(&path, DOC).unwrap();

        let output = run_to_string(&["workout-analyzer", path.to_str().unwrap()]);

        assert!(output.contains("WORKOUT PERFORMANCE REPORT"));
        assert!(output.contains("SQUAT PROGRESSION ANALYSIS"));
        assert!(output.contains("\"total_volume_overall\": 1025.0"));
        assert!(output.contains("\"volume_progression\""));
    }

    #[test]
    fn test_run_missing_file_prints_error_shapes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let output = run_to_string(&["workout-analyzer", path.to_str().unwrap()]);

        assert!(output.contains("\"error\": \"No workout data available\""));
        assert!(output.contains("\"error\": \"No data for Squat\""));
    }

    #[test]
    fn test_run_text_format_for_other_exercise() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("workouts.json");
        std::fs::write(&path, DOC).unwrap();

        let output = run_to_string(&[
            "workout-analyzer",
            path.to_str().unwrap(),
            "--format",
            "text",
            "--exercise",
            "Bench Press",
        ]);

        assert!(output.contains("BENCH PRESS PROGRESSION ANALYSIS"));
        assert!(output.contains("error: No data for Bench Press (no_data)"));
        assert!(output.contains("Total volume:  1,025"));
    }
}
