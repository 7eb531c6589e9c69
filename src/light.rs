//! Light level conversion.
//!
//! Two strategies for mapping a photoresistor voltage-divider reading to
//! lux. The power-law variant follows the LDR resistance/illuminance
//! relationship; the linear variant is a simple approximation for sensors
//! where the power law does not fit. Both are exposed; the caller picks one.

use num_traits::AsPrimitive;

use crate::config::{ADC_FULL_SCALE, ConfigError};

/// Calibration constants for the light sensor.
///
/// `lux_constant` and `lux_exponent` are empirical and sensor-specific.
/// Calibrate by noting readings in darkness and under a known light level
/// (e.g. a 500 lux office) and adjusting until they match.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightCalibration {
    /// Power-law coefficient.
    pub lux_constant: f32,
    /// Power-law exponent (negative: resistance falls with light).
    pub lux_exponent: f32,
    /// Fixed leg of the voltage divider, in kilo-ohms.
    pub divider_kohm: f32,
    /// Upper clamp for the power-law conversion.
    pub ceiling_lux: f32,
    /// Lux at full-scale reading for the linear conversion.
    pub max_lux_linear: f32,
}

impl Default for LightCalibration {
    fn default() -> Self {
        Self {
            lux_constant: 500_000.0,
            lux_exponent: -1.4,
            divider_kohm: 10.0,
            ceiling_lux: 10_000.0,
            max_lux_linear: 1000.0,
        }
    }
}

impl LightCalibration {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divider_kohm <= 0.0 || self.ceiling_lux <= 0.0 || self.max_lux_linear <= 0.0 {
            return Err(ConfigError::InvalidLightRange);
        }
        Ok(())
    }

    /// Convert a raw ADC reading to lux via the LDR power law.
    ///
    /// Non-positive input returns 0.0 (the divider resistance is undefined
    /// there). The result is clamped to `[0.0, ceiling_lux]`; a full-scale
    /// reading (zero LDR resistance) saturates at the ceiling.
    pub fn lux<T>(&self, raw: T) -> f32
    where
        T: Copy + AsPrimitive<f32>,
    {
        let raw_f = raw.as_();
        if raw_f <= 0.0 {
            return 0.0;
        }

        // Cap at full scale so the divider term cannot go negative
        let raw_f = raw_f.min(ADC_FULL_SCALE);

        let resistance = (ADC_FULL_SCALE - raw_f) * self.divider_kohm / raw_f;
        let lux = self.lux_constant * libm::powf(resistance, self.lux_exponent);

        lux.clamp(0.0, self.ceiling_lux)
    }

    /// Convert a raw ADC reading to lux with a plain linear mapping.
    ///
    /// Zero reading maps to 0 lux, full scale to `max_lux_linear`. No
    /// guards needed; the mapping is defined over the whole ADC range.
    pub fn lux_linear<T>(&self, raw: T) -> f32
    where
        T: Copy + AsPrimitive<f32>,
    {
        (raw.as_() / ADC_FULL_SCALE) * self.max_lux_linear
    }
}
