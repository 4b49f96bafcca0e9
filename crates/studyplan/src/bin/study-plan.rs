//! # study-plan
//!
//! Plans study sessions from a JSON request.
//!
//! Usage:
//!   study-plan request.json                      # Plan from tomorrow
//!   study-plan request.json --today 2025-06-01   # Plan as of a fixed date
//!   study-plan request.json --config solver.toml --explain
//!   study-plan request.json --json               # Machine-readable output

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use owo_colors::OwoColorize;
use studyplan::studyplan_config::SolverConfig;
use studyplan::{console, PlanResult, Planner, PlanningRequest};

#[derive(Parser)]
#[command(
    name = "study-plan",
    version,
    about = "Schedules study sessions around fixed commitments"
)]
struct Cli {
    /// Planning request (JSON)
    request: PathBuf,

    /// Solver configuration (TOML or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Plan as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print the per-constraint score breakdown
    #[arg(long)]
    explain: bool,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.json {
        console::init();
    }

    let raw = fs::read_to_string(&cli.request)
        .with_context(|| format!("reading {}", cli.request.display()))?;
    let request: PlanningRequest = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", cli.request.display()))?;

    let config = match &cli.config {
        Some(path) => SolverConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SolverConfig::default(),
    };
    let planner = Planner::new(config).context("invalid solver configuration")?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let plan = planner.plan_on(&request, today)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    print_plan(&plan);
    if cli.explain {
        if let Some(schedule) = &plan.schedule {
            print_explanation(&planner, schedule);
        }
    }
    Ok(())
}

fn print_plan(plan: &PlanResult) {
    println!();
    for session in plan.sessions.iter().filter(|s| s.is_assigned()) {
        let (Some(date), Some(start), Some(end)) = (session.date, session.start_time, session.end_time)
        else {
            continue;
        };
        println!(
            "  {}  {}-{}  {}",
            date.format("%a %Y-%m-%d").bright_white(),
            start.format("%H:%M"),
            end.format("%H:%M"),
            session.title().bright_cyan()
        );
    }
    if plan.unassigned > 0 {
        println!(
            "\n  {} {} sessions could not be placed",
            "!".yellow().bold(),
            plan.unassigned
        );
    }

    let status = if plan.feasible {
        "feasible".bright_green().bold().to_string()
    } else {
        "infeasible".bright_red().bold().to_string()
    };
    println!("\n  Score {} ({status})", plan.score);
}

fn print_explanation(planner: &Planner, schedule: &studyplan::studyplan_core::Schedule) {
    let explanation = planner.explain(schedule);
    println!();
    for analysis in &explanation.constraint_analyses {
        let kind = if analysis.is_hard { "hard" } else { "soft" };
        println!(
            "  {:<28} {:<4} {:>4} matches  {}",
            analysis.name,
            kind.bright_black(),
            analysis.match_count(),
            analysis.score
        );
        for m in &analysis.matches {
            println!("      {}", m.justification.description.bright_black());
        }
    }
}
