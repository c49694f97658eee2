//! Model entry points: validate, build the sync profile, integrate durations,
//! optionally hand the contour to a renderer.

use std::error::Error;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::ModelConfig;
use crate::contour::{ContourSink, duration_contour};
use crate::core::entrain::{OscillatorParams, ResettingMode, integrate_durations};
use crate::core::sync::build_sync_profile;
use crate::core::utterance::Utterance;
use crate::error::{ConfigError, ConfigResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Simulation {
    pub sync: Vec<f64>,
    pub durations: Vec<f64>,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("contour rendering failed: {0}")]
    Render(Box<dyn Error>),
}

/// Runs both stages for an already resolved configuration.
pub fn simulate(params: &OscillatorParams, utterance: &Utterance) -> ConfigResult<Simulation> {
    params.validate()?;
    let sync = build_sync_profile(utterance, params.w0, params.t0);
    let durations = integrate_durations(&sync, utterance, params);
    Ok(Simulation {
        sync: sync.into_vec(),
        durations,
    })
}

/// Validates `config`, simulates it and, when `plot_contour` is set, passes the
/// duration contour to `sink`. Nothing is rendered if validation fails.
pub fn run(config: &ModelConfig, sink: &mut dyn ContourSink) -> Result<Simulation, RunError> {
    let (params, utterance) = config.resolve()?;
    let sim = simulate(&params, &utterance)?;
    info!(
        units = sim.durations.len(),
        groups = utterance.groups().len(),
        catalexis = utterance.catalexis(),
        resetting = %params.resetting,
        "simulated utterance"
    );
    if config.plot_contour {
        sink.render(&duration_contour(&sim.durations))
            .map_err(RunError::Render)?;
    }
    Ok(sim)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResettingComparison {
    pub fixed: Vec<f64>,
    pub variable: Vec<f64>,
    /// Reset window of each real group under each mode, as (fixed, variable).
    pub windows: Vec<(u32, u32)>,
}

/// Simulates `config` under both resetting modes, ignoring its own mode choice
/// once it has been validated.
pub fn compare_resetting(config: &ModelConfig) -> ConfigResult<ResettingComparison> {
    let (params, utterance) = config.resolve()?;
    let [fixed, variable] = ResettingMode::ALL.map(|mode| {
        let p = params.with_resetting(mode);
        let sync = build_sync_profile(&utterance, p.w0, p.t0);
        integrate_durations(&sync, &utterance, &p)
    });
    let windows = utterance
        .groups()
        .iter()
        .map(|g| {
            (
                ResettingMode::Fixed.reset_window_length(g.size),
                ResettingMode::Variable.reset_window_length(g.size),
            )
        })
        .collect();
    Ok(ResettingComparison {
        fixed,
        variable,
        windows,
    })
}
