use warpfactor_lib::{
    duration_to_text, estimated_travel_time, maximum_distance, parse_real, required_warp,
    speed_to_warp, speed_to_warp_with, warp_to_speed, Error, SearchOptions, TimeComponents,
    WarpScale, DEFAULT_ACCURACY,
};

#[test]
fn continuous_across_warp_nine() {
    let below = warp_to_speed(9.0 - 1e-9, 15, WarpScale::Tng);
    let at = warp_to_speed(9.0, 15, WarpScale::Tng);
    let above = warp_to_speed(9.0 + 1e-9, 15, WarpScale::Tng);
    assert!((above - below).abs() < 1e-5, "{} vs {}", below, above);
    assert!((at - 9f64.powf(10.0 / 3.0)).abs() < 1e-9);
}

#[test]
fn asymptote_is_signed_infinity() {
    assert_eq!(warp_to_speed(10.0, 15, WarpScale::Tng), f64::INFINITY);
    assert_eq!(warp_to_speed(-10.0, 15, WarpScale::Tng), f64::NEG_INFINITY);
    assert_eq!(warp_to_speed(10.0, 15, WarpScale::Tos), 1000.0);
}

#[test]
fn canonical_tng_values() {
    let cases = [
        (1.0, 1.0),
        (9.0, 1516.381107004839),
        (9.6, 2017.767370102803),
        (9.975, 5128.549844825657),
        (9.999, 32153.15391050381),
    ];
    for (warp, speed) in cases {
        let actual = warp_to_speed(warp, 15, WarpScale::Tng);
        assert!(
            (actual - speed).abs() / speed < 1e-12,
            "warp {}: expected {}, got {}",
            warp,
            speed,
            actual
        );
    }
}

#[test]
fn search_handles_large_speeds_within_budget() {
    let options = SearchOptions {
        accuracy: 15,
        max_iterations: Some(1_000),
    };
    for speed in [1.0e4, 1.0e5, 1.0e6] {
        let warp = speed_to_warp_with(speed, 15, WarpScale::Tng, &options);
        assert!(warp > 9.0 && warp < 10.0);
        let back = warp_to_speed(warp, 15, WarpScale::Tng);
        assert!((back - speed).abs() / speed < 1e-8, "{} -> {} -> {}", speed, warp, back);
    }
}

#[test]
fn negative_speed_gives_negative_warp() {
    let warp = speed_to_warp(-2017.767370102803, 6, WarpScale::Tng, 15);
    assert_eq!(warp, -9.6);
}

#[test]
fn travel_time_edge_cases() {
    assert!(estimated_travel_time(0.0, 0.0, WarpScale::Tng, 15).is_nan());
    assert!(estimated_travel_time(8.6, 0.0, WarpScale::Tng, 15).is_nan());
    assert_eq!(estimated_travel_time(0.0, 5.0, WarpScale::Tng, 15), 0.0);
}

#[test]
fn travel_time_feeds_duration_text() {
    // 27ly at TOS warp 3 (27c) takes exactly one year.
    let time = estimated_travel_time(27.0, 3.0, WarpScale::Tos, 15);
    assert_eq!(duration_to_text(time, true, true), "1 year ");
}

#[test]
fn required_warp_with_time_components() {
    let time = TimeComponents {
        years: 1.0,
        ..TimeComponents::default()
    };
    let distance = maximum_distance(9.6, time.to_years(), 15, WarpScale::Tng);
    let warp = required_warp(distance, time.to_years(), 9, WarpScale::Tng).unwrap();
    assert_eq!(warp, 9.6);
}

#[test]
fn required_warp_zero_time_is_a_domain_error() {
    let err = required_warp(1.0, 0.0, 15, WarpScale::Tos).unwrap_err();
    assert!(matches!(err, Error::ZeroTravelTime { .. }));
    assert!(err.to_string().contains("non-zero"));
}

#[test]
fn parsing_never_falls_back_to_zero() {
    let err = parse_real("nine").unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            input: "nine".to_string()
        }
    );
}

#[test]
fn one_accuracy_type_drives_every_operation() {
    let accuracy = DEFAULT_ACCURACY;
    let warp = speed_to_warp(2017.767_370_102_803, 15, WarpScale::Tng, accuracy);
    let years = estimated_travel_time(2017.767_370_102_803, warp, WarpScale::Tng, accuracy);
    assert!((warp - 9.6).abs() < 1e-9, "got {}", warp);
    assert!((years - 1.0).abs() < 1e-9, "got {}", years);
    let options = SearchOptions::with_accuracy(accuracy);
    assert_eq!(options.accuracy, accuracy);
}
