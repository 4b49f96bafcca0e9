//! Colored console output for planning runs.
//!
//! A `tracing` layer that renders solver lifecycle events:
//!
//! - **INFO**: solve and phase start/end
//! - **DEBUG**: progress every thousand steps
//! - **TRACE**: individual steps

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the console layer as the global subscriber.
///
/// Only the first call has an effect. `RUST_LOG` overrides the default
/// `info` level.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(StudyPlanConsoleLayer)
            .try_init();
    });
}

fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    SOLVE_START_NANOS.store(epoch.elapsed().as_nanos() as u64, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now = epoch.elapsed().as_nanos() as u64;
    now.saturating_sub(start) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "studyplan".bright_cyan().bold(),
        format!("v{VERSION}").bright_white()
    );
    let _ = stdout.flush();
}

/// Formats events from the studyplan crates. Everything else is dropped.
pub struct StudyPlanConsoleLayer;

impl<S: Subscriber> Layer<S> for StudyPlanConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("studyplan") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    phase: Option<String>,
    score: Option<String>,
    steps: Option<u64>,
    step: Option<u64>,
    speed: Option<u64>,
    session: Option<u64>,
    accepted: Option<bool>,
    duration_ms: Option<u64>,
    session_count: Option<u64>,
    date_count: Option<u64>,
    time_count: Option<u64>,
    time_limit_ms: Option<u64>,
    assigned: Option<u64>,
    unassigned: Option<u64>,
    moves_evaluated: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{value:?}");
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "phase" => self.phase = Some(s),
            "score" => self.score = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "steps" => self.steps = Some(value),
            "step" => self.step = Some(value),
            "speed" => self.speed = Some(value),
            "session" => self.session = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "session_count" => self.session_count = Some(value),
            "date_count" => self.date_count = Some(value),
            "time_count" => self.time_count = Some(value),
            "time_limit_ms" => self.time_limit_ms = Some(value),
            "assigned" => self.assigned = Some(value),
            "unassigned" => self.unassigned = Some(value),
            "moves_evaluated" => self.moves_evaluated = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "accepted" {
            self.accepted = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref() {
        Some("solve_start") => format_solve_start(v),
        Some("solve_end") => format_solve_end(v),
        Some("phase_start") => format_phase_start(v),
        Some("phase_end") => format_phase_end(v),
        Some("progress") => format_progress(v),
        Some("step") if level == Level::TRACE => format_step(v),
        Some(_) => String::new(),
        // Plain log lines, such as decomposition warnings
        None => format_message(v, level),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs()).bright_black().to_string()
}

fn count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let mut output = format!(
        "{} {} Planning │ {} sessions │ {} days │ {} start times",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.session_count.unwrap_or(0)).bright_yellow(),
        count(v.date_count.unwrap_or(0)).bright_yellow(),
        count(v.time_count.unwrap_or(0)).bright_yellow(),
    );
    if let Some(limit) = v.time_limit_ms.filter(|ms| *ms > 0) {
        output.push_str(&format!(" │ {} limit", format_duration_ms(limit).bright_yellow()));
    }
    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let unassigned = v.unassigned.unwrap_or(0);
    let feasible = score.starts_with("0hard") && unassigned == 0;
    let status = if feasible {
        "FEASIBLE".bright_green().bold().to_string()
    } else {
        "INFEASIBLE".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Planning complete │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_score(score),
        status
    );
    output.push_str(&format!(
        "\n{} {} placed │ {} unplaced │ {} steps │ {} moves │ {}",
        " ".repeat(9),
        count(v.assigned.unwrap_or(0)).white(),
        count(unassigned).white(),
        count(v.steps.unwrap_or(0)).white(),
        count(v.moves_evaluated.unwrap_or(0)).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    ));
    output
}

fn format_phase_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} started",
        format_elapsed(),
        "▶".bright_blue(),
        v.phase.as_deref().unwrap_or("Unknown").white().bold()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} ended │ {} │ {} steps │ {} moves/s │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        v.phase.as_deref().unwrap_or("Unknown").white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.steps.unwrap_or(0)).white(),
        count(v.speed.unwrap_or(0)).bright_magenta().bold(),
        format_score(v.score.as_deref().unwrap_or("N/A")),
    )
}

fn format_progress(v: &EventVisitor) -> String {
    format!(
        "{} {} {:>10} steps │ {:>12}/s │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(v.steps.unwrap_or(0)).white(),
        count(v.speed.unwrap_or(0)).bright_magenta().bold(),
        format_score(v.score.as_deref().unwrap_or("N/A"))
    )
}

fn format_step(v: &EventVisitor) -> String {
    let icon = match v.accepted {
        Some(false) => "✗".bright_red().to_string(),
        _ => "✓".bright_green().to_string(),
    };
    let mut output = format!(
        "{} {} Step {:>10}",
        format_elapsed(),
        icon,
        count(v.step.unwrap_or(0)).bright_black()
    );
    if let Some(session) = v.session {
        output.push_str(&format!(" │ Session {:>5}", count(session).bright_black()));
    }
    output.push_str(&format!(
        " │ {}",
        format_score(v.score.as_deref().unwrap_or("N/A"))
    ));
    output
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };
    match level {
        Level::ERROR => format!("{} {} {}", format_elapsed(), "✗".bright_red(), message.red()),
        Level::WARN => format!("{} {} {}", format_elapsed(), "!".yellow().bold(), message.yellow()),
        Level::INFO => format!("{} {} {}", format_elapsed(), "·".bright_black(), message),
        _ => String::new(),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

fn format_score(score: &str) -> String {
    let Some((hard, soft)) = score.split_once('/') else {
        return score.white().to_string();
    };
    let hard = hard.trim_end_matches("hard");
    let soft = soft.trim_end_matches("soft");

    let hard_str = if hard.starts_with('-') {
        format!("{hard}hard").bright_red().to_string()
    } else {
        format!("{hard}hard").bright_green().to_string()
    };
    let soft_str = if soft.starts_with('-') {
        format!("{soft}soft").yellow().to_string()
    } else {
        format!("{soft}soft").white().to_string()
    };
    format!("{hard_str}/{soft_str}")
}
