use grove_cal::{AQI_WARMING_UP, AqiBreakpoints, AqiStatus};

#[test]
fn sentinel_while_warming_up_regardless_of_reading() {
    let bp = AqiBreakpoints::default();

    for raw in [0, 1, 99, 100, 299, 300, 699, 700, 1023] {
        assert_eq!(bp.aqi(raw, false), AQI_WARMING_UP);
    }
}

#[test]
fn output_stays_on_epa_scale() {
    let bp = AqiBreakpoints::default();

    for raw in 0..=1023 {
        let aqi = bp.aqi(raw, true);
        assert!(
            (0.0..=500.0).contains(&aqi),
            "raw {} gave out-of-range AQI {}",
            raw,
            aqi
        );
    }
}

#[test]
fn continuous_at_segment_boundaries() {
    let bp = AqiBreakpoints::default();

    // Approach each breakpoint from below and evaluate at it; the two
    // segments must agree at the boundary value.
    let cases = [(100.0_f32, 25.0_f32), (300.0, 100.0), (700.0, 200.0)];

    for (boundary, expected) in cases {
        let below = bp.aqi(boundary - 1e-3, true);
        let at = bp.aqi(boundary, true);

        assert!((at - expected).abs() < 1e-3, "at {}: {}", boundary, at);
        assert!(
            (below - at).abs() < 0.01,
            "discontinuity at {}: {} vs {}",
            boundary,
            below,
            at
        );
    }
}

#[test]
fn endpoints() {
    let bp = AqiBreakpoints::default();

    assert_eq!(bp.aqi(0, true), 0.0);
    assert!((bp.aqi(1023, true) - 500.0).abs() < 1e-3);
}

#[test]
fn interpolates_within_segments() {
    let bp = AqiBreakpoints::default();

    // Halfway through the fresh-air segment
    assert!((bp.aqi(50, true) - 12.5).abs() < 1e-3);
    // Halfway between low and high pollution
    assert!((bp.aqi(500, true) - 150.0).abs() < 1e-3);
}

#[test]
fn monotonic_in_reading() {
    let bp = AqiBreakpoints::default();

    let mut previous = bp.aqi(0, true);
    for raw in 1..=1023 {
        let aqi = bp.aqi(raw, true);
        assert!(aqi >= previous, "dropped at raw {}", raw);
        previous = aqi;
    }
}

#[test]
fn status_band_boundaries() {
    assert_eq!(AqiStatus::from_aqi(AQI_WARMING_UP), AqiStatus::Warmup);
    assert_eq!(AqiStatus::from_aqi(-0.5), AqiStatus::Warmup);
    assert_eq!(AqiStatus::from_aqi(0.0), AqiStatus::Good);
    assert_eq!(AqiStatus::from_aqi(50.0), AqiStatus::Good);
    assert_eq!(AqiStatus::from_aqi(51.0), AqiStatus::Moderate);
    assert_eq!(AqiStatus::from_aqi(100.0), AqiStatus::Moderate);
    assert_eq!(AqiStatus::from_aqi(150.0), AqiStatus::SensitiveUnhealthy);
    assert_eq!(AqiStatus::from_aqi(200.0), AqiStatus::Unhealthy);
    assert_eq!(AqiStatus::from_aqi(300.0), AqiStatus::VeryUnhealthy);
    assert_eq!(AqiStatus::from_aqi(301.0), AqiStatus::Hazardous);
    assert_eq!(AqiStatus::from_aqi(500.0), AqiStatus::Hazardous);
}

#[test]
fn status_labels() {
    assert_eq!(AqiStatus::Warmup.label(), "Warmup");
    assert_eq!(AqiStatus::Good.label(), "Good");
    assert_eq!(AqiStatus::Moderate.label(), "Moderate");
    assert_eq!(AqiStatus::SensitiveUnhealthy.label(), "Sens.Unhlth");
    assert_eq!(AqiStatus::Unhealthy.label(), "Unhealthy");
    assert_eq!(AqiStatus::VeryUnhealthy.label(), "VeryUnhlth");
    assert_eq!(AqiStatus::Hazardous.label(), "Hazardous");
}

#[test]
fn custom_breakpoints_shift_the_mapping() {
    let bp = AqiBreakpoints {
        fresh_air: 200.0,
        low_pollution: 400.0,
        high_pollution: 800.0,
    };
    assert!(bp.validate().is_ok());

    // Fresh-air anchor now sits at raw 200
    assert!((bp.aqi(200, true) - 25.0).abs() < 1e-3);
}
