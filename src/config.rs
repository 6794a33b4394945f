use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

/// How an image is scaled to fill the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FitMode {
    /// Scale to fill the container, cropping the overflow.
    #[default]
    Cover,
    /// Scale to fit entirely inside the container (letterboxed).
    Contain,
    /// Stretch to the container, ignoring aspect ratio.
    Stretch,
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid container size {width}x{height}: both dimensions must be positive")]
    InvalidContainer { width: f32, height: f32 },

    #[error("invalid fade duration {0}s: must be finite and non-negative")]
    InvalidFadeDuration(f32),

    #[error("invalid dwell duration {0}s: must be finite and non-negative")]
    InvalidDwellDuration(f32),
}

/// Cycler configuration. Validated once at construction, immutable afterwards.
#[derive(Debug, Clone)]
pub struct CyclerConfig {
    images: Vec<PathBuf>,
    fade_secs: f32,
    dwell_secs: f32,
    fit: FitMode,
}

impl CyclerConfig {
    pub fn new(
        images: Vec<PathBuf>,
        fade_secs: f32,
        dwell_secs: f32,
        fit: FitMode,
    ) -> Result<Self, ConfigError> {
        if !fade_secs.is_finite() || fade_secs < 0.0 {
            return Err(ConfigError::InvalidFadeDuration(fade_secs));
        }
        if !dwell_secs.is_finite() || dwell_secs < 0.0 {
            return Err(ConfigError::InvalidDwellDuration(dwell_secs));
        }
        Ok(Self {
            images,
            fade_secs,
            dwell_secs,
            fit,
        })
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn fade_secs(&self) -> f32 {
        self.fade_secs
    }

    pub fn dwell_secs(&self) -> f32 {
        self.dwell_secs
    }

    pub fn fit(&self) -> FitMode {
        self.fit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("img{i}.jpg"))).collect()
    }

    #[test]
    fn test_valid_config() {
        let config = CyclerConfig::new(paths(3), 1.5, 6.0, FitMode::Cover).unwrap();
        assert_eq!(config.len(), 3);
        assert_eq!(config.fade_secs(), 1.5);
        assert_eq!(config.dwell_secs(), 6.0);
        assert_eq!(config.fit(), FitMode::Cover);
    }

    #[test]
    fn test_zero_durations_are_legal() {
        assert!(CyclerConfig::new(paths(1), 0.0, 0.0, FitMode::Contain).is_ok());
    }

    #[test]
    fn test_negative_fade_rejected() {
        let err = CyclerConfig::new(paths(2), -1.0, 6.0, FitMode::Cover).unwrap_err();
        assert_eq!(err, ConfigError::InvalidFadeDuration(-1.0));
    }

    #[test]
    fn test_negative_dwell_rejected() {
        let err = CyclerConfig::new(paths(2), 1.5, -0.5, FitMode::Cover).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDwellDuration(-0.5));
    }

    #[test]
    fn test_non_finite_durations_rejected() {
        assert!(CyclerConfig::new(paths(2), f32::NAN, 6.0, FitMode::Cover).is_err());
        assert!(CyclerConfig::new(paths(2), 1.5, f32::INFINITY, FitMode::Cover).is_err());
    }

    #[test]
    fn test_empty_image_list_is_not_an_error() {
        let config = CyclerConfig::new(Vec::new(), 1.5, 6.0, FitMode::Cover).unwrap();
        assert!(config.is_empty());
    }
}
