//! Sound level conversion.
//!
//! Maps raw readings from an analog sound sensor to an approximate dB
//! level with a logarithmic model. Not laboratory accurate.

use num_traits::AsPrimitive;

use crate::config::{ADC_FULL_SCALE, ConfigError};

/// Calibration constants for the sound sensor.
///
/// Calibration procedure:
/// 1. In a quiet room (~30 dB), note the raw reading.
/// 2. With a known source (e.g. phone app at 70 dB), note the reading.
/// 3. Adjust `offset_db` and `scale_db` until both match.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundCalibration {
    /// ADC reference voltage.
    pub vref: f32,
    /// dB at minimum reading.
    pub offset_db: f32,
    /// dB range multiplier.
    pub scale_db: f32,
    /// Added to the voltage before taking log10, so a near-zero
    /// reading never produces log(0).
    pub log_epsilon: f32,
    /// Lower clamp; also returned for non-positive raw input.
    pub floor_db: f32,
    /// Upper clamp.
    pub ceiling_db: f32,
}

impl Default for SoundCalibration {
    fn default() -> Self {
        Self {
            vref: 5.0,
            offset_db: 30.0,
            scale_db: 20.0,
            log_epsilon: 0.001,
            floor_db: 30.0,
            ceiling_db: 100.0,
        }
    }
}

impl SoundCalibration {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floor_db >= self.ceiling_db || self.vref <= 0.0 {
            return Err(ConfigError::InvalidSoundRange);
        }
        Ok(())
    }

    /// Convert a raw ADC reading to an approximate sound level in dB.
    ///
    /// Non-positive input returns `floor_db` (baseline quiet room).
    /// The result is clamped to `[floor_db, ceiling_db]`.
    pub fn decibels<T>(&self, raw: T) -> f32
    where
        T: Copy + AsPrimitive<f32>,
    {
        let raw_f = raw.as_();
        if raw_f <= 0.0 {
            return self.floor_db;
        }

        let voltage = raw_f * (self.vref / ADC_FULL_SCALE);

        // Sound amplitude is logarithmic by nature
        let db = self.offset_db + self.scale_db * libm::log10f(voltage + self.log_epsilon);

        db.clamp(self.floor_db, self.ceiling_db)
    }
}
