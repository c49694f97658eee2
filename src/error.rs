use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Caller configuration defects. Every variant is fatal and raised before any
/// duration is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("units_per_sg has {units} entries but amplitudes has {amplitudes}")]
    SizeMismatch { units: usize, amplitudes: usize },

    #[error("invalid resetting mode `{0}` (expected `fixed` or `variable`)")]
    InvalidResettingMode(String),

    #[error("utterance has no stress groups")]
    EmptyUtterance,

    #[error("stress group {index} has zero VV units")]
    EmptyStressGroup { index: usize },

    #[error("stress group {index} has non-positive amplitude {value}")]
    NonPositiveAmplitude { index: usize, value: f64 },

    #[error("parameter `{name}` has invalid value {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ConfigError::SizeMismatch {
            units: 2,
            amplitudes: 3,
        };
        assert_eq!(
            err.to_string(),
            "units_per_sg has 2 entries but amplitudes has 3"
        );

        let err = ConfigError::InvalidResettingMode("sliding".to_string());
        assert!(err.to_string().contains("`sliding`"));
    }
}
