use std::time::Duration;

use chrono::NaiveTime;
use studyplan_core::HardSoftScore;

use super::*;

#[test]
fn test_defaults() {
    let config = SolverConfig::default();
    assert_eq!(config.time_limit(), DEFAULT_TIME_LIMIT);
    assert_eq!(config.unimproved_time_limit(), DEFAULT_UNIMPROVED_TIME_LIMIT);
    assert_eq!(config.move_thread_count, MoveThreadCount::None);
    assert_eq!(
        config.construction.construction_heuristic_type,
        ConstructionHeuristicType::BestFit
    );
    assert_eq!(config.planning.date_buffer_days, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 7
        move_thread_count = { count = 4 }

        [termination]
        seconds_spent_limit = 2
        millis_spent_limit = 500
        unimproved_seconds_spent_limit = 1
        step_count_limit = 1000
        best_score_limit = "0hard/-10soft"

        [construction]
        construction_heuristic_type = "first_fit"

        [local_search]
        accepted_count_limit = 2
        [local_search.acceptor]
        type = "late_acceptance"
        late_acceptance_size = 50
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.move_thread_count, MoveThreadCount::Count(4));
    assert_eq!(config.time_limit(), Duration::from_millis(2500));
    assert_eq!(config.unimproved_time_limit(), Duration::from_secs(1));
    assert_eq!(config.step_count_limit(), Some(1000));
    assert_eq!(
        config.best_score_limit().unwrap(),
        Some(HardSoftScore::of(0, -10))
    );
    assert_eq!(
        config.construction.construction_heuristic_type,
        ConstructionHeuristicType::FirstFit
    );
    assert_eq!(config.local_search.accepted_count_limit, 2);
    assert_eq!(config.local_search.move_count_per_step, 64);
    assert_eq!(
        config.local_search.acceptor,
        AcceptorConfig::LateAcceptance(LateAcceptanceConfig {
            late_acceptance_size: 50
        })
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
termination:
  millis_spent_limit: 250
local_search:
  acceptor:
    type: hill_climbing
planning:
  default_study_start: "09:00"
  default_study_end: "17:30"
constraint_weights:
  Duplicate time slot: "0hard/50soft"
"#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.time_limit(), Duration::from_millis(250));
    assert_eq!(config.local_search.acceptor, AcceptorConfig::HillClimbing);

    let window = config.planning.study_window().unwrap();
    assert_eq!(window.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    assert_eq!(window.end, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
    assert_eq!(window.break_minutes, 15);

    assert_eq!(
        config.constraint_weights().unwrap(),
        vec![("Duplicate time slot".to_string(), HardSoftScore::of_soft(50))]
    );
}

#[test]
fn test_zero_budget_is_kept() {
    let config = SolverConfig::from_toml_str("[termination]\nmillis_spent_limit = 0").unwrap();
    assert_eq!(config.time_limit(), Duration::ZERO);
}

#[test]
fn test_builder_methods() {
    let config = SolverConfig::new()
        .with_random_seed(3)
        .with_termination_seconds(4)
        .with_termination_millis(20)
        .with_unimproved_millis(10)
        .with_step_limit(50)
        .with_best_score_limit(HardSoftScore::ZERO)
        .with_constraint_weight("Session after deadline", HardSoftScore::of_soft(2));

    assert_eq!(config.random_seed, Some(3));
    assert_eq!(config.time_limit(), Duration::from_millis(20));
    assert_eq!(config.unimproved_time_limit(), Duration::from_millis(10));
    assert_eq!(config.step_count_limit(), Some(50));
    assert_eq!(config.best_score_limit().unwrap(), Some(HardSoftScore::ZERO));
    assert_eq!(config.constraint_weights().unwrap().len(), 1);
}

#[test]
fn test_validation_errors() {
    let bad_weight = SolverConfig {
        constraint_weights: [("Overlapping sessions".to_string(), "heavy".to_string())].into(),
        ..SolverConfig::default()
    };
    assert!(matches!(bad_weight.validate(), Err(ConfigError::Invalid(_))));

    let mut inverted = SolverConfig::default();
    inverted.planning.default_study_start = "20:00".to_string();
    inverted.planning.default_study_end = "08:00".to_string();
    assert!(matches!(inverted.validate(), Err(ConfigError::Invalid(_))));

    let mut bad_time = SolverConfig::default();
    bad_time.planning.default_study_end = "late".to_string();
    assert!(bad_time.validate().is_err());

    let mut zero_moves = SolverConfig::default();
    zero_moves.local_search.move_count_per_step = 0;
    assert!(zero_moves.validate().is_err());

    let bad_limit = SolverConfig::from_toml_str("[termination]\nbest_score_limit = \"0/0\"").unwrap();
    assert!(bad_limit.validate().is_err());
}

#[test]
fn test_load_missing_file() {
    let result = SolverConfig::load("/nonexistent/solver.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_toml() {
    let result = SolverConfig::from_toml_str("random_seed = \"seven\"");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}
