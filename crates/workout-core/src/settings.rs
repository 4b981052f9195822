use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default rolling window passed to the progression query, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

// ── OutputFormat ───────────────────────────────────────────────────────────────

/// How query results are written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Human-readable tables.
    Text,
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Analyze workout logs: personal records, volume totals and progression
#[derive(Parser, Debug, Clone)]
#[command(
    name = "workout-analyzer",
    about = "Analyze workout logs: personal records, volume totals and progression",
    version
)]
pub struct Settings {
    /// Path to the JSON workout log
    #[arg(default_value = "data/sample_workouts.json")]
    pub data_file: PathBuf,

    /// Exercise to run the progression analysis for
    #[arg(long, default_value = "Squat")]
    pub exercise: String,

    /// Rolling window for the progression analysis, in days
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window_days: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply flag overrides.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve_overrides(Settings::parse_from(args))
    }

    /// `--debug` overrides the log level.
    fn resolve_overrides(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
