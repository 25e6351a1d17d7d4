//! Formula engine.
//!
//! `evaluate` is a pure function of its arguments: it resolves the inputs the
//! selection needs, checks them, dispatches to one closed-form formula and
//! fails fast on any guard. Identical inputs give bit-identical results.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve_sampling::{sample_curve, SampledCurve};
use crate::error::{MotionError, MotionResult};
use crate::formulas;
use crate::parameters::{resolve_parameters, Parameter, ParameterSet, ParameterSpec};
use crate::scenario::{Mode, PlotKind, QuantityKind, ScenarioKind};

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub mode: Mode,
    pub scenario: ScenarioKind,
    pub quantity: QuantityKind,
    /// Value in SI units
    pub value: f64,
    pub unit: String,
    pub label: String,
    pub formula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<SampledCurve>,
}

/// Evaluate one quantity.
///
/// Every parameter the resolver lists for the selection must be present and
/// inside its physical domain, even when the chosen formula ignores it (the
/// friction coefficient is checked but never used). A zero radius or
/// acceleration surfaces as `DivisionByZero` when the formula divides by it
/// and as `OutOfDomain` otherwise. A result that overflows is
/// `NonFiniteResult`.
pub fn evaluate(
    mode: Mode,
    scenario: ScenarioKind,
    quantity: QuantityKind,
    parameters: &ParameterSet,
) -> MotionResult<EvaluationResult> {
    let specs = resolve_parameters(mode, scenario, Some(quantity))?;
    parameters.check_domains(&specs)?;
    check_nonzero_inputs(&specs, divisors(scenario, quantity), parameters)?;

    let value = compute(scenario, quantity, parameters)?;
    if !value.is_finite() {
        return Err(MotionError::NonFiniteResult {
            quantity: quantity.name(),
        });
    }

    debug!(
        %mode,
        %scenario,
        %quantity,
        value,
        "evaluated"
    );

    Ok(EvaluationResult {
        mode,
        scenario,
        quantity,
        value,
        unit: quantity.unit().to_string(),
        label: quantity.label(mode).to_string(),
        formula: quantity.formula(scenario).to_string(),
        curve: None,
    })
}

/// Evaluate one quantity and attach a sampled curve.
///
/// The curve reads its inputs from the same parameter set; a failure in
/// either step fails the whole call.
pub fn evaluate_with_curve(
    mode: Mode,
    scenario: ScenarioKind,
    quantity: QuantityKind,
    parameters: &ParameterSet,
    plot: PlotKind,
) -> MotionResult<EvaluationResult> {
    let mut result = evaluate(mode, scenario, quantity, parameters)?;
    result.curve = Some(sample_curve(plot, parameters)?);
    Ok(result)
}

/// Inputs the selected formula divides by
fn divisors(scenario: ScenarioKind, quantity: QuantityKind) -> &'static [Parameter] {
    match quantity {
        QuantityKind::CentripetalForce | QuantityKind::CentripetalAcceleration => {
            &[Parameter::Radius]
        }
        QuantityKind::NormalForce
            if matches!(scenario, ScenarioKind::Top | ScenarioKind::Bottom) =>
        {
            &[Parameter::Radius]
        }
        QuantityKind::LoopRadius => &[Parameter::Acceleration],
        _ => &[],
    }
}

/// Reject a zero radius or acceleration the formula does not divide by.
fn check_nonzero_inputs(
    specs: &[ParameterSpec],
    divisors: &[Parameter],
    parameters: &ParameterSet,
) -> MotionResult<()> {
    for spec in specs {
        let constraint = match spec.parameter {
            Parameter::Radius => "radius > 0",
            Parameter::Acceleration => "acceleration > 0",
            _ => continue,
        };
        if divisors.contains(&spec.parameter) {
            continue;
        }
        let value = parameters.require(spec.parameter)?;
        if value == 0.0 {
            return Err(MotionError::OutOfDomain {
                parameter: spec.parameter,
                value,
                constraint,
            });
        }
    }
    Ok(())
}

/// Dispatch to the formula for the selection. The selection has already been
/// checked against the mode, so every combination reaching here is valid.
fn compute(
    scenario: ScenarioKind,
    quantity: QuantityKind,
    p: &ParameterSet,
) -> MotionResult<f64> {
    match quantity {
        QuantityKind::CentripetalForce => formulas::centripetal_force(
            p.require(Parameter::Mass)?,
            p.require(Parameter::Velocity)?,
            p.require(Parameter::Radius)?,
        ),
        QuantityKind::CentripetalAcceleration => formulas::centripetal_acceleration(
            p.require(Parameter::Velocity)?,
            p.require(Parameter::Radius)?,
        ),
        QuantityKind::GravitationalForce => {
            Ok(formulas::gravitational_force(p.require(Parameter::Mass)?))
        }
        QuantityKind::NormalForce => {
            let mass = p.require(Parameter::Mass)?;
            match scenario {
                ScenarioKind::BankedNoFriction | ScenarioKind::BankedWithFriction => {
                    formulas::banked_normal_force(mass, p.require(Parameter::AngleDegrees)?)
                }
                ScenarioKind::UnbankedWithFriction => Ok(formulas::gravitational_force(mass)),
                ScenarioKind::Top => formulas::loop_top_normal_force(
                    mass,
                    p.require(Parameter::Velocity)?,
                    p.require(Parameter::Radius)?,
                ),
                ScenarioKind::Bottom => formulas::loop_bottom_normal_force(
                    mass,
                    p.require(Parameter::Velocity)?,
                    p.require(Parameter::Radius)?,
                ),
            }
        }
        QuantityKind::TangentialVelocity => formulas::tangential_velocity(
            p.require(Parameter::Acceleration)?,
            p.require(Parameter::Radius)?,
        ),
        QuantityKind::LoopRadius => formulas::loop_radius(
            p.require(Parameter::Velocity)?,
            p.require(Parameter::Acceleration)?,
        ),
    }
}
