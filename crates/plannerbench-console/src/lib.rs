//! Colorful console output for benchmark progress.
//!
//! Provides a custom `tracing` layer that formats benchmark events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (benchmark/planner start and end, report saved)
//! - **DEBUG**: One line per trial
//! - **ERROR**: Aborted benchmarks

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const TARGET: &str = "plannerbench_benchmark";

/// Initializes the benchmark console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchmarkConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats benchmark events with colors.
pub struct BenchmarkConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchmarkConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with(TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    planner: Option<String>,
    error: Option<String>,
    path: Option<String>,
    planner_count: Option<u64>,
    planner_index: Option<u64>,
    run_count: Option<u64>,
    runs: Option<u64>,
    solved: Option<bool>,
    max_time_seconds: Option<f64>,
    max_memory_mb: Option<f64>,
    solved_ratio: Option<f64>,
    time_seconds: Option<f64>,
    memory_bytes: Option<f64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "planner" => self.planner = Some(value),
            "error" => self.error = Some(value),
            "path" => self.path = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "planner_count" => self.planner_count = Some(value),
            "planner_index" => self.planner_index = Some(value),
            "run_count" => self.run_count = Some(value),
            "runs" => self.runs = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "max_time_seconds" | "max_time" => self.max_time_seconds = Some(value),
            "max_memory_mb" => self.max_memory_mb = Some(value),
            "solved_ratio" => self.solved_ratio = Some(value),
            "time_seconds" => self.time_seconds = Some(value),
            "memory_bytes" => self.memory_bytes = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "solved" {
            self.solved = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "benchmark_start" => format_benchmark_start(v),
        "planner_start" => format_planner_start(v),
        "trial_end" => format_trial_end(v),
        "planner_end" => format_planner_end(v),
        "benchmark_end" => format_benchmark_end(v),
        "benchmark_aborted" => format_aborted(v),
        "results_saved" => format_results_saved(v),
        _ => String::new(),
    }
}

fn prefix(level: Level, scope: &str) -> String {
    let level = match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => " WARN".yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    };
    format!(
        "{} {} {}",
        timestamp().bright_black(),
        level,
        format!("[{}]", scope).bright_cyan()
    )
}

fn timestamp() -> String {
    format!("{:>8.3}s", elapsed_secs())
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    format!(
        "{} Benchmark started: planners ({}), runs per planner ({}), time limit ({}), memory limit ({})",
        prefix(Level::INFO, "Benchmark"),
        v.planner_count.unwrap_or(0).bright_yellow(),
        v.run_count.unwrap_or(0).bright_yellow(),
        format_seconds(v.max_time_seconds.unwrap_or(0.0)).yellow(),
        format!("{:.0} MB", v.max_memory_mb.unwrap_or(0.0)).yellow(),
    )
}

fn format_planner_start(v: &EventVisitor) -> String {
    let planner = v.planner.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} planner ({}) started",
        prefix(Level::INFO, planner),
        planner.white().bold(),
        v.planner_index.unwrap_or(0).to_string().yellow()
    )
}

fn format_trial_end(v: &EventVisitor) -> String {
    let planner = v.planner.as_deref().unwrap_or("Unknown");
    let outcome = if v.solved.unwrap_or(false) {
        "solved".bright_green().to_string()
    } else {
        "unsolved".bright_red().to_string()
    };
    format!(
        "{} trial {}: time ({}), memory ({})",
        prefix(Level::DEBUG, planner),
        outcome,
        format_seconds(v.time_seconds.unwrap_or(0.0)).yellow(),
        format_megabytes(v.memory_bytes.unwrap_or(0.0)).yellow(),
    )
}

fn format_planner_end(v: &EventVisitor) -> String {
    let planner = v.planner.as_deref().unwrap_or("Unknown");
    let ratio = v.solved_ratio.unwrap_or(0.0);
    let solved = format!("{:.1}%", ratio * 100.0);
    let solved = if ratio >= 1.0 {
        solved.bright_green().bold().to_string()
    } else if ratio > 0.0 {
        solved.yellow().to_string()
    } else {
        solved.bright_red().to_string()
    };
    format!(
        "{} {} planner ({}) ended: runs ({}), solved ({})",
        prefix(Level::INFO, planner),
        planner.white().bold(),
        v.planner_index.unwrap_or(0).to_string().yellow(),
        v.runs.unwrap_or(0).to_string().white(),
        solved
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    format!(
        "{} Benchmark ended: {} planners measured",
        prefix(Level::INFO, "Benchmark"),
        v.planner_count.unwrap_or(0).bright_yellow()
    )
}

fn format_aborted(v: &EventVisitor) -> String {
    let reason = v
        .error
        .as_deref()
        .or(v.message.as_deref())
        .unwrap_or("unknown error");
    format!(
        "{} Benchmark aborted: {}",
        prefix(Level::ERROR, "Benchmark"),
        reason.bright_red()
    )
}

fn format_results_saved(v: &EventVisitor) -> String {
    format!(
        "{} Results written to {}",
        prefix(Level::INFO, "Report"),
        v.path.as_deref().unwrap_or("?").underline()
    )
}

fn format_seconds(secs: f64) -> String {
    if secs < 1.0 {
        format!("{:.1}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.2}s", secs)
    } else {
        let whole = secs as u64;
        format!("{}m {}s", whole / 60, whole % 60)
    }
}

fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / (1024.0 * 1024.0))
}
