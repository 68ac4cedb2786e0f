//! Behavior tests for the reading value object
//!
//! Exercises the public API the way node firmware does: construct from raw
//! driver output, gate on validity, normalize, render. Property tests cover
//! the numeric contracts across the whole input space.

use aerosense_core::{altitude_from_pressure, Reading, ReadingError, PM10_CURVE, PM25_CURVE};
use proptest::prelude::*;

#[test]
fn empty_and_full_constructions_are_distinguishable() {
    assert!(Reading::new(12.0, 25.0, 21.0, 45.0, 120.0, 101325.0).is_ok());
    assert!(!Reading::empty().is_ok());

    assert_eq!(Reading::empty().check(), Err(ReadingError::Empty));
}

#[test]
fn normalization_matches_reference_formula() {
    let mut reading = Reading::new(35.0, 80.0, 21.0, 60.0, 0.0, 101325.0);

    let expected_pm25 = 35.0 / (1.0 + 0.48756 * libm::powf(0.6, 8.60068));
    let expected_pm10 = 80.0 / (1.0 + 0.81559 * libm::powf(0.6, 5.83411));

    assert_eq!(reading.normalize_pm25(), expected_pm25);
    assert_eq!(reading.normalize_pm10(), expected_pm10);
}

#[test]
fn display_field_order_is_stable() {
    let line = Reading::new(12.5, 30.0, 21.5, 45.0, 120.0, 101325.0)
        .render::<128>()
        .unwrap();
    let line = line.as_str();

    let labels = [
        "PM10: ", "PM2.5: ", "Temperature: ", "Humidity: ", "Pressure: ", "Altitude: ",
    ];
    let positions: Vec<usize> = labels
        .iter()
        .map(|label| line.find(label).expect("label missing"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(!line.ends_with('\n'));
}

#[test]
fn short_display_truncates() {
    let reading = Reading::new(10.0, 20.0, 23.9, 60.2, 99.9, 101325.0);
    assert_eq!(
        reading.render_short::<64>().unwrap().as_str(),
        "temp: 23 / hum: 60 / pre: 1013 / alt: 99",
    );
}

#[test]
fn barometric_altitude_is_plausible() {
    assert!(altitude_from_pressure(1013.25, 1013.25).abs() < 1.0);
    assert!((altitude_from_pressure(835.0, 1013.25) - 1600.0).abs() < 50.0);
}

proptest! {
    #[test]
    fn pressure_is_stored_divided_by_100(pressure_pa in 0.0f32..200_000.0) {
        let reading = Reading::new(0.0, 0.0, 0.0, 0.0, 0.0, pressure_pa);
        prop_assert_eq!(reading.pressure, pressure_pa / 100.0);
    }

    #[test]
    fn dry_or_drifted_humidity_passes_raw_through(
        pm25 in 0.0f32..1000.0,
        humidity in -50.0f32..=0.0,
    ) {
        let mut reading = Reading::new(pm25, 0.0, 21.0, humidity, 0.0, 101325.0);
        prop_assert_eq!(reading.normalize_pm25(), pm25);
    }

    #[test]
    fn correction_never_inflates_a_reading(
        pm25 in 0.0f32..1000.0,
        pm10 in 0.0f32..1000.0,
        humidity in 0.01f32..100.0,
    ) {
        let mut reading = Reading::new(pm25, pm10, 21.0, humidity, 0.0, 101325.0);
        prop_assert!(reading.normalize_pm25() <= pm25);
        prop_assert!(reading.normalize_pm10() <= pm10);
    }

    #[test]
    fn second_access_returns_the_cached_value(
        pm25 in 0.1f32..1000.0,
        humidity in 0.01f32..100.0,
    ) {
        let mut reading = Reading::new(pm25, 0.0, 21.0, humidity, 0.0, 101325.0);
        let first = reading.normalize_pm25();

        // A humidity change after the first access must not be observed
        reading.humidity = humidity / 2.0;
        prop_assert_eq!(reading.normalize_pm25(), first);
    }

    #[test]
    fn check_agrees_with_is_ok_for_finite_samples(
        pm25 in 0.0f32..1000.0,
        pm10 in 0.0f32..1000.0,
        temperature in -40.0f32..60.0,
        humidity in 0.0f32..100.0,
    ) {
        let reading = Reading::new(pm25, pm10, temperature, humidity, 0.0, 101325.0);
        prop_assert!(reading.is_ok());
        prop_assert_eq!(reading.check(), Ok(()));
    }

    #[test]
    fn curves_agree_with_their_growth_factors(
        raw in 0.0f32..1000.0,
        humidity in 0.01f32..100.0,
    ) {
        prop_assert_eq!(
            PM25_CURVE.apply(raw, humidity),
            raw / PM25_CURVE.growth_factor(humidity)
        );
        prop_assert_eq!(
            PM10_CURVE.apply(raw, humidity),
            raw / PM10_CURVE.growth_factor(humidity)
        );
    }
}
