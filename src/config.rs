use crate::air_quality::AqiBreakpoints;
use crate::light::LightCalibration;
use crate::sound::SoundCalibration;

/// Full-scale reading of the 10-bit ADC all conversions assume.
pub const ADC_FULL_SCALE: f32 = 1023.0;

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    InvalidSoundRange,
    InvalidLightRange,
    InvalidAqiThresholds,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidSoundRange => {
                write!(f, "sound floor_db must be less than ceiling_db")
            }
            ConfigError::InvalidLightRange => {
                write!(f, "light ranges and divider resistance must be positive")
            }
            ConfigError::InvalidAqiThresholds => {
                write!(
                    f,
                    "AQI thresholds must satisfy 0 < fresh_air < low_pollution < high_pollution < full scale"
                )
            }
        }
    }
}

/// Calibration for one complete sensor set.
///
/// Every constant in here is an empirical tunable, not a physical law.
/// The defaults match typical Grove sensors; calibrate against reference
/// instruments before trusting absolute values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationConfig {
    pub sound: SoundCalibration,
    pub light: LightCalibration,
    pub aqi: AqiBreakpoints,

    /// Installation altitude in meters, used for temperature correction.
    pub altitude_m: i32,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            sound: SoundCalibration::default(),
            light: LightCalibration::default(),
            aqi: AqiBreakpoints::default(),
            altitude_m: 0,
        }
    }
}

impl CalibrationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sound.validate()?;
        self.light.validate()?;
        self.aqi.validate()
    }
}
