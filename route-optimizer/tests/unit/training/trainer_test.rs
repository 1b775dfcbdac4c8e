use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::{test_environment, test_environment_with_logs};

fn create_trainer(alpha: Float, gamma: Float, epsilon: Float, seed: u64) -> Trainer {
    Trainer::new(Hyperparams { alpha, gamma, epsilon }, SyntheticSettings::default(), test_environment(seed))
}

fn create_default_trainer(seed: u64) -> Trainer {
    Trainer::new(Hyperparams::default(), SyntheticSettings::default(), test_environment(seed))
}

#[test]
fn can_reject_zero_episode_count() {
    let mut model = PolicyModel::default();

    let result = create_default_trainer(0).train(&mut model, &[], 0);

    assert!(matches!(result, Err(RouteError::InvalidTraining(_))));
    assert_eq!(model, PolicyModel::default());
}

parameterized_test! {can_reject_invalid_corpus_without_touching_model, (corpus, expected), {
    let mut model = create_trained_model(vec![vec![-1.; 2]; 2]);
    let original = model.clone();

    let result = create_default_trainer(0).train(&mut model, corpus.as_slice(), 10);

    assert_eq!(result.map(|_| ()), Err(expected));
    assert_eq!(model, original);
}}

can_reject_invalid_corpus_without_touching_model! {
    case01_empty_episode: (vec![create_episode(create_line_locations(3)), create_episode(vec![])], RouteError::EmptyInput),
    case02_invalid_location: (
        vec![create_episode(vec![test_location("depot", 0., 0.), test_location("bad", 0., 200.)])],
        RouteError::InvalidLocation { index: 1, reason: "longitude 200 of 'bad' is outside of [-180, 180]".to_string() }
    ),
}

#[test]
fn can_apply_bellman_update_on_last_move() {
    let locations = create_line_locations(2);
    let matrix = DistanceMatrix::new(locations.as_slice()).unwrap();
    let distance = matrix.distance(0, 1);
    let mut model = PolicyModel::default();

    let metrics = create_trainer(0.5, 0.9, 0., 0).train(&mut model, &[create_episode(locations)], 1).unwrap();

    let table = model.table.as_ref().unwrap();
    assert_eq!(table.capacity(), 2);
    assert!((table.get(0, 1).unwrap() - 0.5 * (-distance + 0.9 * -distance)).abs() < 1E-12);
    assert_eq!(table.get(1, 0), Some(0.));
    assert_eq!(metrics.episodes_trained, 1);
    assert_eq!(metrics.final_reward, round_to(-distance, 2));
    assert_eq!(metrics.avg_reward_last_100, round_to(-distance, 2));
    assert_eq!(metrics.improvement_pct, 0.);
    assert_eq!((model.learning_rate, model.discount_factor), (0.5, 0.9));
}

#[test]
fn can_learn_from_previous_episodes() {
    let locations = create_line_locations(3);
    let matrix = DistanceMatrix::new(locations.as_slice()).unwrap();
    let (d01, d12, d02) = (matrix.distance(0, 1), matrix.distance(1, 2), matrix.distance(0, 2));
    let mut model = PolicyModel::default();

    let metrics = create_trainer(1., 1., 0., 0).train(&mut model, &[create_episode(locations)], 2).unwrap();

    // first episode goes 0 -> 1 -> 2, the second one prefers untried 0 -> 2 -> 1
    let table = model.table.as_ref().unwrap();
    assert!((table.get(0, 1).unwrap() + d01).abs() < 1E-12);
    assert!((table.get(1, 2).unwrap() + d12 + d02).abs() < 1E-12);
    assert!((table.get(0, 2).unwrap() + d02).abs() < 1E-12);
    assert!((table.get(2, 1).unwrap() + d12 + d01).abs() < 1E-12);
    assert_eq!(metrics.final_reward, round_to(-(d02 + d12), 2));
    assert_eq!(metrics.avg_reward_last_100, round_to((-(d01 + d12) - (d02 + d12)) / 2., 2));
    assert!((metrics.improvement_pct + 50.).abs() < 1E-9);
}

#[test]
fn can_accumulate_episodes_over_synthetic_trainings() {
    let (environment, logs) = test_environment_with_logs(0);
    let trainer = Trainer::new(Hyperparams::default(), SyntheticSettings::default(), environment);
    let mut model = PolicyModel::default();

    let first = trainer.train(&mut model, &[], 1000).unwrap();
    let second = trainer.train(&mut model, &[], 1000).unwrap();

    assert_eq!(first.episodes_trained, 1000);
    assert_eq!(second.episodes_trained, 2000);
    assert_eq!(model.episodes_trained, 2000);
    assert!((5..=9).contains(&model.capacity()));
    assert!(second.avg_reward_last_100 < 0.);
    assert!(logs.contains("synthetic"));
    assert!(logs.contains("training completed: 2000 episodes in total"));
}

#[test]
fn can_reproduce_training_with_same_seed() {
    let train = |seed: u64| {
        let mut model = PolicyModel::default();
        let metrics = create_default_trainer(seed).train(&mut model, &[], 200).unwrap();
        (model, metrics.avg_reward_last_100)
    };

    let (first_model, first_reward) = train(11);
    let (second_model, second_reward) = train(11);

    assert_eq!(first_model, second_model);
    assert_eq!(first_reward, second_reward);
}

parameterized_test! {can_grow_table_cycling_over_corpus, (episode_count, expected_capacity), {
    let corpus = vec![create_episode(create_line_locations(3)), create_episode(create_line_locations(5))];
    let mut model = PolicyModel::default();

    create_default_trainer(0).train(&mut model, corpus.as_slice(), episode_count).unwrap();

    assert_eq!(model.capacity(), expected_capacity);
}}

can_grow_table_cycling_over_corpus! {
    case01_first_only: (1, 3),
    case02_both: (2, 5),
}

#[test]
fn can_keep_table_capacity_when_training_smaller_episodes() {
    let mut model = PolicyModel::default();
    let trainer = create_default_trainer(0);

    trainer.train(&mut model, &[create_episode(create_line_locations(6))], 5).unwrap();
    trainer.train(&mut model, &[create_episode(create_line_locations(2))], 5).unwrap();

    assert_eq!(model.capacity(), 6);
    assert_eq!(model.episodes_trained, 10);
}
