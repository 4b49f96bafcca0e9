use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use studyplan_config::{AcceptorConfig, ConstructionHeuristicType, MoveThreadCount, SolverConfig};
use studyplan_core::HardSoftScore;
use studyplan_scoring::default_constraints;
use studyplan_test::{task, ScheduleBuilder};
use tokio::sync::mpsc;

use super::*;

fn two_tasks() -> ScheduleBuilder {
    ScheduleBuilder::new()
        .task(task("Algebra", 4.0, Some(10), 1.0))
        .task(task("History", 2.0, Some(6), 1.0))
        .days(12)
}

fn seeded(steps: u64) -> SolverConfig {
    SolverConfig::new().with_random_seed(17).with_step_limit(steps)
}

#[test]
fn solves_small_instance_feasibly() {
    let result = Solver::new(seeded(400), default_constraints()).solve(two_tasks().build());

    assert!(result.is_complete());
    assert!(result.score.is_feasible());
    assert_eq!(result.schedule.score(), Some(result.score));
    assert_eq!(result.statistics.phase_count(), 2);
}

#[test]
fn fixed_seed_is_reproducible() {
    let solver = Solver::new(seeded(300), default_constraints());
    let first = solver.solve(two_tasks().build());
    let second = solver.solve(two_tasks().build());

    assert_eq!(first.score, second.score);
    assert_eq!(first.schedule.sessions, second.schedule.sessions);
}

#[test]
fn thread_count_does_not_change_the_result() {
    let sequential = Solver::new(seeded(200), default_constraints()).solve(two_tasks().build());
    let parallel = Solver::new(
        seeded(200).with_move_thread_count(MoveThreadCount::Count(3)),
        default_constraints(),
    )
    .solve(two_tasks().build());

    assert_eq!(sequential.score, parallel.score);
    assert_eq!(sequential.schedule.sessions, parallel.schedule.sessions);
}

#[test]
fn zero_budget_returns_initial_schedule() {
    let config = SolverConfig::new().with_termination_millis(0);
    let result = Solver::new(config, default_constraints()).solve(two_tasks().build());

    assert_eq!(result.schedule.assigned_count(), 0);
    assert_eq!(result.score, HardSoftScore::ZERO);
    assert!(!result.is_complete());
}

#[test]
fn empty_schedule_skips_phases() {
    let result = Solver::new(seeded(10), default_constraints()).solve(ScheduleBuilder::new().build());

    assert!(result.schedule.sessions.is_empty());
    assert_eq!(result.score, HardSoftScore::ZERO);
    assert_eq!(result.statistics.phase_count(), 0);
}

#[test]
fn infeasible_instance_still_returns_best() {
    // Three one-hour sessions but only a single start slot on a single day
    let schedule = ScheduleBuilder::new()
        .task(task("Algebra", 3.0, Some(1), 1.0))
        .window(studyplan_test::time(9, 0), studyplan_test::time(9, 30), 0)
        .days(1)
        .build();
    let result = Solver::new(seeded(50), default_constraints()).solve(schedule);

    assert!(result.is_complete());
    assert!(!result.score.is_feasible());
}

#[test]
fn best_score_limit_stops_early() {
    let config = SolverConfig::new()
        .with_random_seed(3)
        .with_step_limit(100_000)
        .with_best_score_limit(HardSoftScore::of(0, -1_000));
    let result = Solver::new(config, default_constraints()).solve(two_tasks().build());

    assert!(result.score >= HardSoftScore::of(0, -1_000));
    assert!(result.statistics.total_step_count < 100_000);
}

#[test]
fn raised_flag_stops_a_running_solve() {
    let flag = Arc::new(AtomicBool::new(false));
    let config = SolverConfig::new()
        .with_random_seed(17)
        .with_termination_seconds(60)
        .with_unimproved_millis(60_000);
    let solver = Solver::new(config, default_constraints()).with_terminate_flag(Arc::clone(&flag));

    let canceller = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(100));
        flag.store(true, Ordering::SeqCst);
    });
    let started = Instant::now();
    let result = solver.solve(two_tasks().build());
    canceller.join().unwrap();

    assert!(started.elapsed() < Duration::from_secs(30));
    assert!(result.is_complete());
}

#[test]
fn cancellation_does_not_leak_into_the_next_solve() {
    let solver = Solver::new(seeded(200), default_constraints());
    solver.terminate_early();

    let result = solver.solve(two_tasks().build());
    assert!(result.is_complete());
    assert!(result.statistics.total_step_count > 0);
    assert!(!solver.terminate_flag().load(Ordering::SeqCst));
}

#[test]
fn terminate_early_sets_shared_flag() {
    let solver = Solver::new(seeded(1), default_constraints());
    let flag = solver.terminate_flag();
    solver.terminate_early();
    assert!(flag.load(Ordering::SeqCst));
}

#[test]
fn streams_improving_solutions() {
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let solver = Solver::new(seeded(100), default_constraints()).with_best_solution_sender(sender);
    let result = solver.solve(two_tasks().build());

    let mut received = Vec::new();
    while let Ok(update) = receiver.try_recv() {
        received.push(update);
    }
    assert!(received.len() >= 2);
    let (last_schedule, last_score) = received.pop().expect("final update");
    assert_eq!(last_score, result.score);
    assert_eq!(last_schedule.sessions, result.schedule.sessions);
}

#[test]
fn configured_phases_are_used() {
    let config = seeded(150)
        .with_construction_heuristic(ConstructionHeuristicType::FirstFit)
        .with_acceptor(AcceptorConfig::HillClimbing);
    let result = Solver::new(config, default_constraints()).solve(two_tasks().build());

    assert!(result.is_complete());
    let phases: Vec<&str> = result
        .statistics
        .phase_statistics
        .iter()
        .map(|p| p.phase_type.as_str())
        .collect();
    assert_eq!(phases, ["ConstructionHeuristic", "LocalSearch"]);
}

#[test]
fn from_config_applies_constraint_weights() {
    let config = seeded(0).with_constraint_weight(
        studyplan_scoring::names::DEADLINE_LATENESS,
        HardSoftScore::of_soft(5),
    );
    let solver = Solver::from_config(config).unwrap();
    let analyses = solver.constraints().evaluate_detailed(&two_tasks().build());

    assert_eq!(analyses.len(), 8);
    assert_eq!(analyses[1].weight, HardSoftScore::of_soft(5));
    assert_eq!(analyses[0].weight, HardSoftScore::ONE_HARD);
}
