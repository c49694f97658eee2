//! Coupled-oscillator simulation of speech rhythm.
//!
//! Every VV unit (vowel-to-vowel interval) is an oscillator. Its period is
//! entrained toward its neighbours with a strength given by the synchronicity
//! profile, and at the start of each stress group it is reset toward the
//! resting period `t0`, weighted by phrasal stress amplitude.

pub mod config;
pub mod contour;
pub mod core;
pub mod error;
pub mod logging;
pub mod model;
pub mod plot;

pub use crate::config::ModelConfig;
pub use crate::core::entrain::{OscillatorParams, ResettingMode};
pub use crate::core::utterance::{StressGroup, Utterance};
pub use crate::error::ConfigError;
pub use crate::model::{RunError, Simulation, compare_resetting, run, simulate};
