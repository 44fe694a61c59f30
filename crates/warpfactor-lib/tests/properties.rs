//! Property tests for the warp/speed conversions.
//!
//! Reproduce a failure with `PROPTEST_SEED=<seed> cargo test -p warpfactor-lib --test properties`.

use proptest::prelude::*;
use warpfactor_lib::{
    maximum_distance, required_warp, speed_to_warp, warp_to_speed, WarpScale,
};

fn any_scale() -> impl Strategy<Value = WarpScale> {
    prop_oneof![Just(WarpScale::Tng), Just(WarpScale::Tos)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tng_round_trip_below_asymptote(warp in 0.0f64..9.999) {
        let speed = warp_to_speed(warp, 15, WarpScale::Tng);
        let recovered = speed_to_warp(speed, 15, WarpScale::Tng, 15);
        prop_assert!(
            (recovered - warp).abs() < 1e-6,
            "warp {} -> speed {} -> warp {}",
            warp,
            speed,
            recovered
        );
    }

    #[test]
    fn speed_is_monotonic_in_warp(a in 0.0f64..12.0, b in 0.0f64..12.0, scale in any_scale()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(warp_to_speed(low, 15, scale) <= warp_to_speed(high, 15, scale));
    }

    #[test]
    fn negative_warp_mirrors_positive(warp in 0.0f64..50.0, scale in any_scale(), digits in 0u32..16) {
        prop_assert_eq!(
            warp_to_speed(-warp, digits, scale),
            -warp_to_speed(warp, digits, scale)
        );
    }

    #[test]
    fn tos_is_a_cube(warp in -1000.0f64..1000.0) {
        let speed = warp_to_speed(warp, 15, WarpScale::Tos);
        let expected = warp * warp * warp;
        prop_assert!(
            (speed - expected).abs() <= expected.abs() * 1e-12 + 1e-12,
            "{} vs {}",
            speed,
            expected
        );
    }

    #[test]
    fn required_warp_inverts_maximum_distance(warp in 0.5f64..9.99, time in 0.01f64..100.0) {
        let distance = maximum_distance(warp, time, 15, WarpScale::Tng);
        let recovered = required_warp(distance, time, 15, WarpScale::Tng).expect("non-zero time");
        prop_assert!((recovered - warp).abs() < 1e-6, "{} vs {}", warp, recovered);
    }
}
