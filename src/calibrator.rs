use num_traits::AsPrimitive;

use crate::air_quality::AqiStatus;
use crate::config::{CalibrationConfig, ConfigError};
use crate::temperature;

/// Validated calibration plus the conversion entry points the sampling
/// loop calls.
///
/// Construction validates the configuration once; after that every
/// conversion is total over the ADC domain (guards and clamping, no
/// error returns).
pub struct Calibrator {
    config: CalibrationConfig,
}

impl Calibrator {
    pub fn new(config: CalibrationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Sound level in dB. See [`SoundCalibration::decibels`](crate::sound::SoundCalibration::decibels).
    pub fn decibels<T>(&self, raw: T) -> f32
    where
        T: Copy + AsPrimitive<f32>,
    {
        self.config.sound.decibels(raw)
    }

    /// Illuminance in lux via the LDR power law.
    pub fn lux<T>(&self, raw: T) -> f32
    where
        T: Copy + AsPrimitive<f32>,
    {
        self.config.light.lux(raw)
    }

    /// Illuminance in lux via the linear approximation.
    pub fn lux_linear<T>(&self, raw: T) -> f32
    where
        T: Copy + AsPrimitive<f32>,
    {
        self.config.light.lux_linear(raw)
    }

    /// AQI on the EPA 0-500 scale, or the warm-up sentinel.
    pub fn aqi<T>(&self, raw: T, warmed_up: bool) -> f32
    where
        T: Copy + AsPrimitive<f32>,
    {
        self.config.aqi.aqi(raw, warmed_up)
    }

    /// Status band for an AQI value.
    pub fn aqi_status(&self, aqi: f32) -> AqiStatus {
        AqiStatus::from_aqi(aqi)
    }

    /// Sea-level-equivalent temperature at the configured altitude.
    pub fn sea_level_temperature(&self, temp_c: f32) -> f32 {
        temperature::correct_for_altitude(temp_c, self.config.altitude_m)
    }
}
