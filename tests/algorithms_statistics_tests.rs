#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use kinefit_rs::internals::algorithms::statistics::aggregate;
use kinefit_rs::internals::primitives::sample::PositionSample;

fn sample(entity_id: &str, frame: u32, x: f64, y: f64) -> PositionSample<f64> {
    PositionSample {
        frame,
        x,
        y,
        entity_id: entity_id.to_string(),
    }
}

#[test]
fn test_empty_input_yields_zero_summary() {
    let summary = aggregate::<f64>(&[], 30.0, None);
    assert_eq!(summary.total_distance, 0.0);
    assert_eq!(summary.average_velocity, 0.0);
    assert_eq!(summary.max_velocity, 0.0);
    assert_eq!(summary.average_acceleration, 0.0);
}

#[test]
fn test_constant_speed_path() {
    // 100 px per second for two seconds.
    let samples = [
        sample("ball", 0, 0.0, 0.0),
        sample("ball", 30, 100.0, 0.0),
        sample("ball", 60, 200.0, 0.0),
    ];
    let summary = aggregate(&samples, 30.0, None);
    assert_relative_eq!(summary.total_distance, 200.0, epsilon = 1e-9);
    assert_relative_eq!(summary.average_velocity, 100.0, epsilon = 1e-9);
    assert_relative_eq!(summary.max_velocity, 100.0, epsilon = 1e-9);
    assert_relative_eq!(summary.average_acceleration, 0.0, epsilon = 1e-9);
}

#[test]
fn test_scale_converts_to_meters() {
    // 200 px at 10 px per meter is 20 m.
    let samples = [
        sample("ball", 0, 0.0, 0.0),
        sample("ball", 30, 100.0, 0.0),
        sample("ball", 60, 200.0, 0.0),
    ];
    let summary = aggregate(&samples, 30.0, Some(10.0));
    assert_relative_eq!(summary.total_distance, 20.0, epsilon = 1e-9);
    assert_relative_eq!(summary.average_velocity, 10.0, epsilon = 1e-9);
    assert_relative_eq!(summary.max_velocity, 10.0, epsilon = 1e-9);
}

#[test]
fn test_scale_is_linear_in_every_field() {
    let samples = [
        sample("a", 0, 0.0, 0.0),
        sample("a", 15, 30.0, 40.0),
        sample("a", 45, 35.0, 40.0),
        sample("b", 0, 100.0, 0.0),
        sample("b", 30, 100.0, 60.0),
    ];
    let px = aggregate(&samples, 30.0, None);
    let m = aggregate(&samples, 30.0, Some(8.0));
    assert_relative_eq!(m.total_distance, px.total_distance / 8.0, epsilon = 1e-9);
    assert_relative_eq!(m.average_velocity, px.average_velocity / 8.0, epsilon = 1e-9);
    assert_relative_eq!(m.max_velocity, px.max_velocity / 8.0, epsilon = 1e-9);
    assert_relative_eq!(
        m.average_acceleration,
        px.average_acceleration / 8.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_distance_sums_across_entities() {
    let samples = [
        sample("a", 0, 0.0, 0.0),
        sample("a", 30, 3.0, 4.0),
        sample("b", 0, 0.0, 0.0),
        sample("b", 30, 0.0, 10.0),
    ];
    let summary = aggregate(&samples, 30.0, None);
    assert_relative_eq!(summary.total_distance, 15.0, epsilon = 1e-9);
}

#[test]
fn test_single_sample_entity_excluded_from_speed_means() {
    // Entity "lone" contributes no displacement and must not drag the
    // average velocity toward zero.
    let moving = [
        sample("ball", 0, 0.0, 0.0),
        sample("ball", 30, 100.0, 0.0),
    ];
    let with_lone = [
        moving[0].clone(),
        moving[1].clone(),
        sample("lone", 0, 500.0, 500.0),
    ];
    let base = aggregate(&moving, 30.0, None);
    let summary = aggregate(&with_lone, 30.0, None);
    assert_relative_eq!(summary.average_velocity, base.average_velocity, epsilon = 1e-9);
    assert_relative_eq!(summary.max_velocity, base.max_velocity, epsilon = 1e-9);
    assert_relative_eq!(summary.total_distance, base.total_distance, epsilon = 1e-9);
}

#[test]
fn test_speed_uses_2d_displacement() {
    // A 3-4-5 step per second.
    let samples = [
        sample("ball", 0, 0.0, 0.0),
        sample("ball", 30, 3.0, 4.0),
    ];
    let summary = aggregate(&samples, 30.0, None);
    assert_relative_eq!(summary.max_velocity, 5.0, epsilon = 1e-9);
    assert_relative_eq!(summary.average_velocity, 5.0, epsilon = 1e-9);
}

#[test]
fn test_acceleration_magnitudes_are_averaged() {
    // Speeds 100, 0, 0 px/s give acceleration magnitudes 100, 0, 0.
    let samples = [
        sample("ball", 0, 0.0, 0.0),
        sample("ball", 30, 100.0, 0.0),
        sample("ball", 60, 100.0, 0.0),
    ];
    let summary = aggregate(&samples, 30.0, None);
    assert_relative_eq!(summary.average_acceleration, 100.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn test_interleaved_entities_are_partitioned() {
    // Samples arrive interleaved and out of frame order.
    let samples = [
        sample("b", 30, 0.0, 10.0),
        sample("a", 0, 0.0, 0.0),
        sample("b", 0, 0.0, 0.0),
        sample("a", 30, 3.0, 4.0),
    ];
    let summary = aggregate(&samples, 30.0, None);
    assert_relative_eq!(summary.total_distance, 15.0, epsilon = 1e-9);
    assert_relative_eq!(summary.max_velocity, 10.0, epsilon = 1e-9);
}
