use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::core::entrain::{OscillatorParams, ResettingMode};
use crate::core::utterance::Utterance;
use crate::error::{ConfigError, ConfigResult};

/// Raw model configuration as read from TOML or the command line.
///
/// `resetting` stays a string here; it is checked in [`ModelConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "ModelConfig::default_alpha")]
    pub alpha: f64,
    #[serde(default = "ModelConfig::default_beta")]
    pub beta: f64,
    #[serde(default = "ModelConfig::default_w0")]
    pub w0: f64,
    #[serde(default = "ModelConfig::default_t0")]
    pub t0: f64,
    #[serde(default = "ModelConfig::default_units_per_sg")]
    pub units_per_sg: Vec<u32>,
    #[serde(default = "ModelConfig::default_amplitudes")]
    pub amplitudes: Vec<f64>,
    #[serde(default)]
    pub catalexis: u32,
    #[serde(default = "ModelConfig::default_resetting")]
    pub resetting: String,
    #[serde(default)]
    pub plot_contour: bool,
}

impl ModelConfig {
    fn default_alpha() -> f64 {
        0.4
    }
    fn default_beta() -> f64 {
        1.1
    }
    fn default_w0() -> f64 {
        0.78
    }
    fn default_t0() -> f64 {
        0.165
    }
    fn default_units_per_sg() -> Vec<u32> {
        vec![4, 4]
    }
    fn default_amplitudes() -> Vec<f64> {
        vec![0.5, 1.0]
    }
    fn default_resetting() -> String {
        ResettingMode::Fixed.as_str().to_string()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            alpha: Self::default_alpha(),
            beta: Self::default_beta(),
            w0: Self::default_w0(),
            t0: Self::default_t0(),
            units_per_sg: Self::default_units_per_sg(),
            amplitudes: Self::default_amplitudes(),
            catalexis: 0,
            resetting: Self::default_resetting(),
            plot_contour: false,
        }
    }
}

impl ModelConfig {
    /// Validates into oscillator parameters and utterance structure.
    ///
    /// Length mismatch is reported first, then the resetting mode, then the
    /// remaining checks.
    pub fn resolve(&self) -> ConfigResult<(OscillatorParams, Utterance)> {
        if self.units_per_sg.len() != self.amplitudes.len() {
            return Err(ConfigError::SizeMismatch {
                units: self.units_per_sg.len(),
                amplitudes: self.amplitudes.len(),
            });
        }
        let resetting: ResettingMode = self.resetting.parse()?;
        let params = OscillatorParams {
            alpha: self.alpha,
            beta: self.beta,
            w0: self.w0,
            t0: self.t0,
            resetting,
        };
        params.validate()?;
        let utterance = Utterance::new(&self.units_per_sg, &self.amplitudes, self.catalexis)?;
        Ok((params, utterance))
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults as a commented template.
        let default_cfg = Self::default();
        match toml::to_string(&default_cfg) {
            Ok(text) => {
                let mut commented = String::from("# vvsim model configuration\n");
                for line in text.lines() {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        commented.push('\n');
                    } else {
                        commented.push_str("# ");
                        commented.push_str(trimmed);
                        commented.push('\n');
                    }
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                warn!("Failed to serialize default config ({err}); continuing with defaults");
            }
        }
        default_cfg
    }
}
