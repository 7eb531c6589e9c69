#![no_std]

mod calibrator;
mod config;
pub mod air_quality;
pub mod light;
pub mod smoothing;
pub mod sound;
pub mod temperature;

pub use calibrator::Calibrator;
pub use config::{ADC_FULL_SCALE, CalibrationConfig, ConfigError};
pub use air_quality::{AQI_WARMING_UP, AqiBreakpoints, AqiStatus, WarmupTimer};
pub use light::LightCalibration;
pub use smoothing::{SMOOTHING_SAMPLES, SmoothingFilter};
pub use sound::SoundCalibration;
pub use temperature::{LAPSE_RATE_C_PER_KM, correct_for_altitude};
