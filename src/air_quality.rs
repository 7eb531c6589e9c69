//! Air quality conversion.
//!
//! Maps gas sensor readings onto the EPA 0-500 AQI scale with a
//! piecewise-linear interpolation over named thresholds, plus the
//! categorical status bands used for display.
//!
//! The gas sensor needs a warm-up period before its readings are
//! chemically stable. Until then the conversion returns the
//! [`AQI_WARMING_UP`] sentinel, which callers must check before using the
//! value numerically.

use num_traits::AsPrimitive;

use crate::config::{ADC_FULL_SCALE, ConfigError};

/// Sentinel returned while the gas sensor is warming up.
pub const AQI_WARMING_UP: f32 = -1.0;

/// Warm-up period of the gas sensor in milliseconds (2 minutes).
pub const WARMUP_PERIOD_MS: u32 = 120_000;

/// AQI at the fresh-air threshold.
pub const AQI_AT_FRESH_AIR: f32 = 25.0;
/// AQI at the low-pollution threshold.
pub const AQI_AT_LOW_POLLUTION: f32 = 100.0;
/// AQI at the high-pollution threshold.
pub const AQI_AT_HIGH_POLLUTION: f32 = 200.0;
/// Top of the EPA scale, reached at full-scale reading.
pub const AQI_SCALE_MAX: f32 = 500.0;

/// Raw-reading thresholds separating the interpolation segments.
///
/// Values come from the sensor datasheet; recalibrate the fresh-air
/// baseline in clean outdoor air after the warm-up period.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AqiBreakpoints {
    pub fresh_air: f32,
    pub low_pollution: f32,
    pub high_pollution: f32,
}

impl Default for AqiBreakpoints {
    fn default() -> Self {
        Self {
            fresh_air: 100.0,
            low_pollution: 300.0,
            high_pollution: 700.0,
        }
    }
}

impl AqiBreakpoints {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 0.0 < self.fresh_air
            && self.fresh_air < self.low_pollution
            && self.low_pollution < self.high_pollution
            && self.high_pollution < ADC_FULL_SCALE;

        if !ordered {
            return Err(ConfigError::InvalidAqiThresholds);
        }
        Ok(())
    }

    /// Convert a raw gas sensor reading to an AQI value (EPA 0-500 scale).
    ///
    /// Returns [`AQI_WARMING_UP`] until `warmed_up` is true. Otherwise
    /// interpolates linearly within the segment the reading falls in;
    /// lower readings mean better air. The result is continuous across
    /// segment boundaries and clamped to `[0.0, AQI_SCALE_MAX]`.
    pub fn aqi<T>(&self, raw: T, warmed_up: bool) -> f32
    where
        T: Copy + AsPrimitive<f32>,
    {
        if !warmed_up {
            return AQI_WARMING_UP;
        }

        let raw_f = raw.as_();

        let aqi = if raw_f < self.fresh_air {
            (raw_f / self.fresh_air) * AQI_AT_FRESH_AIR
        } else if raw_f < self.low_pollution {
            AQI_AT_FRESH_AIR
                + (raw_f - self.fresh_air) / (self.low_pollution - self.fresh_air)
                    * (AQI_AT_LOW_POLLUTION - AQI_AT_FRESH_AIR)
        } else if raw_f < self.high_pollution {
            AQI_AT_LOW_POLLUTION
                + (raw_f - self.low_pollution) / (self.high_pollution - self.low_pollution)
                    * (AQI_AT_HIGH_POLLUTION - AQI_AT_LOW_POLLUTION)
        } else {
            AQI_AT_HIGH_POLLUTION
                + (raw_f - self.high_pollution) / (ADC_FULL_SCALE - self.high_pollution)
                    * (AQI_SCALE_MAX - AQI_AT_HIGH_POLLUTION)
        };

        aqi.clamp(0.0, AQI_SCALE_MAX)
    }
}

/// EPA air quality bands, plus the warm-up placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AqiStatus {
    Warmup,
    Good,
    Moderate,
    SensitiveUnhealthy,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiStatus {
    /// Map an AQI value to its status band.
    ///
    /// Any negative value is treated as the warm-up sentinel.
    pub fn from_aqi(aqi: f32) -> Self {
        if aqi < 0.0 {
            AqiStatus::Warmup
        } else if aqi <= 50.0 {
            AqiStatus::Good
        } else if aqi <= 100.0 {
            AqiStatus::Moderate
        } else if aqi <= 150.0 {
            AqiStatus::SensitiveUnhealthy
        } else if aqi <= 200.0 {
            AqiStatus::Unhealthy
        } else if aqi <= 300.0 {
            AqiStatus::VeryUnhealthy
        } else {
            AqiStatus::Hazardous
        }
    }

    /// Short display label, sized for a 16-character LCD line.
    pub const fn label(&self) -> &'static str {
        match self {
            AqiStatus::Warmup => "Warmup",
            AqiStatus::Good => "Good",
            AqiStatus::Moderate => "Moderate",
            AqiStatus::SensitiveUnhealthy => "Sens.Unhlth",
            AqiStatus::Unhealthy => "Unhealthy",
            AqiStatus::VeryUnhealthy => "VeryUnhlth",
            AqiStatus::Hazardous => "Hazardous",
        }
    }
}

impl core::fmt::Display for AqiStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Tracks the gas sensor warm-up window from caller-supplied millisecond
/// timestamps (e.g. `millis()` on AVR targets).
#[derive(Debug, Clone, Copy)]
pub struct WarmupTimer {
    started_at_ms: u32,
    period_ms: u32,
}

impl WarmupTimer {
    /// Start the standard 2-minute warm-up at `now_ms`.
    pub const fn new(now_ms: u32) -> Self {
        Self::with_period(now_ms, WARMUP_PERIOD_MS)
    }

    pub const fn with_period(now_ms: u32, period_ms: u32) -> Self {
        Self {
            started_at_ms: now_ms,
            period_ms,
        }
    }

    /// Whether the warm-up period has elapsed. Wrapping-safe across the
    /// u32 millisecond rollover.
    pub fn warmed_up(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.started_at_ms) >= self.period_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warming_up_returns_sentinel() {
        let bp = AqiBreakpoints::default();
        assert_eq!(bp.aqi(512, false), AQI_WARMING_UP);
    }

    #[test]
    fn thresholds_hit_their_anchors() {
        let bp = AqiBreakpoints::default();
        assert!((bp.aqi(100, true) - 25.0).abs() < 1e-4);
        assert!((bp.aqi(300, true) - 100.0).abs() < 1e-4);
        assert!((bp.aqi(700, true) - 200.0).abs() < 1e-4);
        assert!((bp.aqi(1023, true) - 500.0).abs() < 1e-3);
    }

    #[test]
    fn warmup_timer_wraps() {
        // Started just before the u32 millis rollover
        let timer = WarmupTimer::new(u32::MAX - 1000);
        assert!(!timer.warmed_up(u32::MAX));
        assert!(timer.warmed_up(WARMUP_PERIOD_MS));
    }
}
