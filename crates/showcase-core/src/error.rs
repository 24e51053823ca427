use thiserror::Error;

/// Rejected tuning values in [`crate::ShowcaseConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} range is empty: min {min} > max {max}")]
    EmptyRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("pitch limits [{min}, {max}] must lie strictly inside (-pi/2, pi/2)")]
    PitchOutOfRange { min: f32, max: f32 },
    #[error("orbit polar limits [{min}, {max}] must lie strictly inside (0, pi)")]
    PolarOutOfRange { min: f32, max: f32 },
    #[error("{name} must be at least 1.0, got {value}")]
    MultiplierBelowOne { name: &'static str, value: f32 },
    #[error("{name} must lie in (0, 1], got {value}")]
    FactorOutOfRange { name: &'static str, value: f32 },
}

/// Rejected scene descriptors (kind names, vectors) coming from the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("unknown object kind '{0}'")]
    UnknownKind(String),
    #[error("expected three numbers for a vector, got '{0}'")]
    BadVector(String),
    #[error("expected a positive number for scale, got '{0}'")]
    BadScale(String),
}
