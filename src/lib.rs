//! # Circular Motion Engine
//!
//! Closed-form circular motion calculator: centripetal force and acceleration,
//! normal and gravitational forces on flat and banked curves, and the forces
//! on an object travelling around a vertical loop.
//!
//! ```
//! use circular_motion::{evaluate, Mode, Parameter, ParameterSet, QuantityKind, ScenarioKind};
//!
//! let params = ParameterSet::new()
//!     .with(Parameter::Mass, 1.0)
//!     .with(Parameter::Radius, 5.0)
//!     .with(Parameter::Velocity, 5.0);
//! let result = evaluate(Mode::Vertical, ScenarioKind::Bottom, QuantityKind::NormalForce, &params)?;
//! assert!((result.value - 15.0).abs() < 1e-9);
//! # Ok::<(), circular_motion::MotionError>(())
//! ```

// Re-export the main types and functions
pub use config::{CalculatorConfig, OutputFormat};
pub use curve_sampling::{plot_parameters, sample_curve, CurveSeries, SampledCurve};
pub use engine::{evaluate, evaluate_with_curve, EvaluationResult};
pub use error::{MotionError, MotionResult};
pub use parameters::{resolve_parameters, Parameter, ParameterSet, ParameterSpec};
pub use report::format_result;
pub use scenario::{Mode, PlotKind, QuantityKind, ScenarioKind};

// Module declarations
pub mod config;
pub mod constants;
mod curve_sampling;
mod engine;
mod error;
pub mod formulas;
mod parameters;
pub mod report;
mod scenario;
