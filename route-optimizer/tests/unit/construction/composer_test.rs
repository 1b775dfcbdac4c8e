use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::{LogCollector, test_logger};
use proptest::prelude::*;

fn create_composer() -> RouteComposer {
    RouteComposer::new(30., test_logger())
}

fn get_square_perimeter(locations: &[Location]) -> Float {
    let matrix = DistanceMatrix::new(locations).unwrap();

    matrix.distance(0, 1) + matrix.distance(1, 2) + matrix.distance(2, 3) + matrix.distance(3, 0)
}

#[test]
fn can_return_empty_input_error() {
    let result = create_composer().optimize(&PolicyModel::default(), &[]);

    assert_eq!(result, Err(RouteError::EmptyInput));
}

#[test]
fn can_return_invalid_location_error_with_trained_policy() {
    let locations = vec![test_location("depot", 0., 0.), test_location("bad", Float::NAN, 0.)];
    let model = create_trained_model(vec![vec![0.; 2]; 2]);

    let result = create_composer().optimize(&model, locations.as_slice());

    assert!(matches!(result, Err(RouteError::InvalidLocation { index: 1, .. })));
}

#[test]
fn can_optimize_single_depot() {
    let locations = create_line_locations(1);

    let route = create_composer().optimize(&PolicyModel::default(), locations.as_slice()).unwrap();

    assert_eq!(route.total_stops(), 1);
    assert_eq!(route.stops[0].location_id, "l0");
    assert_eq!(route.total_distance_km, 0.);
    assert_eq!(route.total_time_min, 0.);
    assert_eq!(route.method_used, RouteMethod::GreedyFallback);
}

#[test]
fn can_build_perimeter_tour_when_untrained() {
    let locations = create_square_locations();
    let logs = LogCollector::default();
    let composer = RouteComposer::new(30., logs.logger());

    let route = composer.optimize(&PolicyModel::default(), locations.as_slice()).unwrap();

    let perimeter = get_square_perimeter(locations.as_slice());
    assert_eq!(route.positions(), vec![0, 1, 2, 3]);
    assert_eq!(route.method_used, RouteMethod::GreedyFallback);
    assert!((route.total_distance_km - perimeter).abs() < 1E-9);
    assert!((route.total_distance_km - 4. * 1.111949).abs() < 1E-3);
    assert!(logs.contains("not trained"));
}

#[test]
fn can_follow_learned_policy() {
    let locations = create_square_locations();
    let model = create_trained_model(vec![
        vec![0., -9., -9., -1.],
        vec![-9., 0., -9., -9.],
        vec![-9., -1., 0., -9.],
        vec![-9., -9., -1., 0.],
    ]);

    let route = create_composer().optimize(&model, locations.as_slice()).unwrap();

    assert_eq!(route.positions(), vec![0, 3, 2, 1]);
    assert_eq!(route.method_used, RouteMethod::LearnedPolicy);
    assert!((route.total_distance_km - get_square_perimeter(locations.as_slice())).abs() < 1E-9);
}

#[test]
fn can_switch_to_greedy_when_table_is_too_small() {
    let locations = create_line_locations(6);
    let logs = LogCollector::default();
    let composer = RouteComposer::new(30., logs.logger());
    let model = create_trained_model(vec![vec![0., -5., -1.], vec![0.; 3], vec![0.; 3]]);

    let route = composer.optimize(&model, locations.as_slice()).unwrap();

    assert_eq!(route.positions(), vec![0, 2, 1, 3, 4, 5]);
    assert_eq!(route.method_used, RouteMethod::Mixed);
    assert!(logs.contains("completing 3 stops greedily"));
}

#[test]
fn can_switch_to_greedy_when_values_are_not_finite() {
    let locations = create_line_locations(3);
    let model = create_trained_model(vec![vec![0., Float::NAN, Float::NAN]; 3]);

    let route = create_composer().optimize(&model, locations.as_slice()).unwrap();

    assert_eq!(route.positions(), vec![0, 1, 2]);
    assert_eq!(route.method_used, RouteMethod::Mixed);
}

#[test]
fn can_handle_empty_table() {
    let locations = create_square_locations();
    let model = create_trained_model(vec![]);

    let route = create_composer().optimize(&model, locations.as_slice()).unwrap();

    assert_permutation(route.positions().as_slice(), 4);
    assert_eq!(route.method_used, RouteMethod::Mixed);
}

#[test]
fn can_build_greedy_route_ignoring_policy() {
    let locations = create_line_locations(4);

    let route = create_composer().greedy_route(locations.as_slice()).unwrap();

    assert_eq!(route.positions(), vec![0, 1, 2, 3]);
    assert_eq!(route.method_used, RouteMethod::GreedyFallback);
    assert!((route.return_distance_km - route.stops.iter().map(|stop| stop.distance_from_previous).sum::<Float>()).abs() < 1E-9);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn can_always_return_permutation(
        coordinates in prop::collection::vec((-60.0..60.0, -170.0..170.0), 1..12),
        values in prop::collection::vec(-100.0..0.0, 36),
        capacity in 0_usize..6,
    ) {
        let locations = coordinates
            .iter()
            .enumerate()
            .map(|(idx, &(lat, lon))| test_location(&idx.to_string(), lat, lon))
            .collect::<Vec<_>>();
        let rows = (0..capacity).map(|row| values[row * 6..row * 6 + capacity].to_vec()).collect::<Vec<_>>();
        let model = create_trained_model(rows);

        let route = create_composer().optimize(&model, locations.as_slice()).unwrap();

        assert_permutation(route.positions().as_slice(), locations.len());
        prop_assert!(route.total_distance_km.is_finite() && route.total_distance_km >= 0.);
        prop_assert!((route.total_time_min - route.total_distance_km / 30. * 60.).abs() < 1E-9);
        if locations.len() > 1 && locations.len() > capacity {
            prop_assert_ne!(route.method_used, RouteMethod::LearnedPolicy);
        }
    }
}
