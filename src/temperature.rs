//! Altitude correction for temperature readings.

/// Standard atmospheric lapse rate in °C per 1000 m.
pub const LAPSE_RATE_C_PER_KM: f32 = 6.5;

/// Restore a sea-level-equivalent temperature from a sensor that
/// under-reads at altitude.
///
/// Linear and reversible: correcting with `-altitude_m` undoes the
/// correction. No clamping; the domain is unrestricted.
pub fn correct_for_altitude(temp_c: f32, altitude_m: i32) -> f32 {
    temp_c + (altitude_m as f32 / 1000.0) * LAPSE_RATE_C_PER_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_is_identity() {
        assert_eq!(correct_for_altitude(21.5, 0), 21.5);
    }

    #[test]
    fn one_km_adds_lapse_rate() {
        assert!((correct_for_altitude(10.0, 1000) - 16.5).abs() < 1e-6);
    }
}
