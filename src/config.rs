// src/config.rs
//! Pipeline configuration structures and TOML loading

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Filter corner configuration for one signal processor instance.
///
/// The configuration is fixed at processor construction; changing corner
/// frequencies mid-stream means building a new processor, which makes the
/// implied filter-state invalidation explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Stream sample rate in Hz
    #[serde(default = "defaults::sample_rate_hz")]
    pub sample_rate_hz: f32,

    /// Line-interference notch centre frequency in Hz; 0 disables the notch
    #[serde(default = "defaults::notch_hz")]
    pub notch_hz: f32,

    /// High-pass corner in Hz, removes DC offset and motion drift
    #[serde(default = "defaults::highpass_hz")]
    pub highpass_hz: f32,

    /// Low-pass corner in Hz, band-limits just under Nyquist
    #[serde(default = "defaults::lowpass_hz")]
    pub lowpass_hz: f32,
}

mod defaults {
    pub fn sample_rate_hz() -> f32 {
        50.0
    }
    pub fn notch_hz() -> f32 {
        0.0
    }
    pub fn highpass_hz() -> f32 {
        5.0
    }
    pub fn lowpass_hz() -> f32 {
        24.0
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::wearable_50hz()
    }
}

impl PipelineConfig {
    /// Profile for the 50 Hz wearable sleeve stream.
    ///
    /// The notch is disabled: with a 25 Hz Nyquist limit, line-interference
    /// frequencies are not representable and alias into the passband anyway.
    /// The 5 Hz high-pass removes motion drift, the 24 Hz low-pass
    /// band-limits just under Nyquist.
    pub fn wearable_50hz() -> Self {
        Self {
            sample_rate_hz: 50.0,
            notch_hz: 0.0,
            highpass_hz: 5.0,
            lowpass_hz: 24.0,
        }
    }

    /// Profile for a 1 kHz clinical-grade acquisition front end: 60 Hz mains
    /// notch with a 20-500 Hz passband.
    pub fn clinical_1000hz() -> Self {
        Self {
            sample_rate_hz: 1000.0,
            notch_hz: 60.0,
            highpass_hz: 20.0,
            lowpass_hz: 500.0,
        }
    }

    /// Nyquist frequency for this configuration.
    pub fn nyquist_hz(&self) -> f32 {
        self.sample_rate_hz / 2.0
    }

    /// Validate corner frequencies against the sample rate.
    ///
    /// A low-pass corner exactly at Nyquist is accepted: the designed biquad
    /// degenerates to unity gain there, which the clinical profile relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_hz <= 0.0 {
            return Err(ConfigError::Invalid(
                "sample rate must be positive".to_string(),
            ));
        }
        if self.notch_hz < 0.0 {
            return Err(ConfigError::Invalid(
                "notch frequency cannot be negative".to_string(),
            ));
        }
        if self.highpass_hz <= 0.0 || self.highpass_hz >= self.nyquist_hz() {
            return Err(ConfigError::Invalid(
                "high-pass corner must lie strictly between 0 and Nyquist".to_string(),
            ));
        }
        if self.lowpass_hz <= 0.0 || self.lowpass_hz > self.nyquist_hz() {
            return Err(ConfigError::Invalid(
                "low-pass corner must lie between 0 and Nyquist".to_string(),
            ));
        }
        if self.lowpass_hz <= self.highpass_hz {
            return Err(ConfigError::Invalid(
                "low-pass corner must be above the high-pass corner".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a TOML file.
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        debug!(?path, ?config, "loaded pipeline configuration");
        Ok(config)
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("io error reading configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for [`PipelineConfig`]
    #[error("configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed values violate the corner-frequency constraints
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
