//! Error types for the circular motion engine.
//!
//! Every evaluation either produces a finite value or one of these errors.
//! Nothing is ever reported as a sentinel zero or NaN.

use thiserror::Error;

use crate::parameters::Parameter;

/// Result type alias for engine operations.
pub type MotionResult<T> = Result<T, MotionError>;

/// Unified error type for resolution, evaluation and presentation.
#[derive(Debug, Error)]
pub enum MotionError {
    // ===== Engine errors =====
    /// The mode/scenario/quantity combination is not one of the supported cases.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// A divisor (radius or acceleration) is zero.
    #[error("division by zero: {divisor} must be non-zero")]
    DivisionByZero {
        /// Name of the offending divisor.
        divisor: &'static str,
    },

    /// cos(θ) vanishes at a 90° bank, so the banked normal force is undefined.
    #[error("normal force is undefined at a {angle_degrees}° banking angle")]
    UndefinedAtRightAngle {
        /// The banking angle in degrees.
        angle_degrees: f64,
    },

    /// A square root would be taken of a negative number.
    #[error("negative radicand {value} in square root")]
    NegativeRadicand {
        /// The radicand that was rejected.
        value: f64,
    },

    /// The inputs are in domain but the result overflows to ±∞ or NaN.
    #[error("{quantity} is not finite for these inputs")]
    NonFiniteResult {
        /// Name of the quantity being computed.
        quantity: &'static str,
    },

    // ===== Parameter errors =====
    /// A parameter required by the selected formula was not supplied.
    #[error("missing required parameter: {0}")]
    MissingParameter(Parameter),

    /// A supplied value lies outside its physical domain.
    #[error("{parameter} = {value} violates domain constraint {constraint}")]
    OutOfDomain {
        /// Parameter that was rejected.
        parameter: Parameter,
        /// Value supplied.
        value: f64,
        /// Human-readable constraint, e.g. `mass > 0`.
        constraint: &'static str,
    },

    /// A supplied value lies outside the input bounds published by the resolver.
    #[error("{parameter} = {value} is outside the accepted range [{min}, {}]", .max.map_or("∞".to_string(), |m| m.to_string()))]
    OutOfBounds {
        /// Parameter that was rejected.
        parameter: Parameter,
        /// Value supplied.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive), if any.
        max: Option<f64>,
    },

    /// A textual name could not be parsed into one of the engine's enums.
    #[error("unknown {kind}: '{name}'")]
    UnknownName {
        /// What was being parsed (mode, scenario, quantity, ...).
        kind: &'static str,
        /// The rejected input.
        name: String,
    },

    // ===== Configuration and output errors =====
    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Output serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MotionError {
    /// Create an invalid-scenario error with a message.
    #[must_use]
    pub fn invalid_scenario(message: impl Into<String>) -> Self {
        Self::InvalidScenario(message.into())
    }

    /// Create an unknown-name error.
    #[must_use]
    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            name: name.into(),
        }
    }
}
