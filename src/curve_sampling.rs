//! Curve sampling for plots.
//!
//! Each plot sweeps a fixed range in `CURVE_SAMPLE_COUNT` evenly spaced
//! steps and evaluates the same closed-form formulas as the engine.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{CURVE_SAMPLE_COUNT, FORCE_VELOCITY_MAX_MPS, LOOP_ANGLE_MAX_RAD};
use crate::error::{MotionError, MotionResult};
use crate::formulas::{centripetal_force, gravitational_force, loop_normal_force_at};
use crate::parameters::{Parameter, ParameterSet};
use crate::scenario::PlotKind;

/// One named y-series of a sampled curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    pub name: String,
    pub unit: String,
    pub values: Vec<f64>,
}

/// Sampled curve: a shared x axis and one or more parallel y-series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    pub plot: PlotKind,
    pub x_label: String,
    pub x_unit: String,
    pub x: Vec<f64>,
    pub series: Vec<CurveSeries>,
}

impl SampledCurve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn series(&self, name: &str) -> Option<&CurveSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// (x, y) pairs of one series, in sweep order
    pub fn points<'a>(&'a self, series: &'a CurveSeries) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.x.iter().copied().zip(series.values.iter().copied())
    }
}

/// Inputs each plot reads from the parameter set
pub fn plot_parameters(plot: PlotKind) -> &'static [Parameter] {
    match plot {
        PlotKind::ForceVsVelocity => &[Parameter::Mass, Parameter::Radius],
        PlotKind::LoopForces => &[Parameter::Mass, Parameter::Radius, Parameter::Velocity],
    }
}

/// `count` evenly spaced values over `[start, end]`, both ends included.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            (0..count)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        start + (end - start) * i as f64 / last as f64
                    }
                })
                .collect()
        }
    }
}

/// Sample a plot over its fixed sweep.
///
/// Fails if a required parameter is missing or outside its domain, if a
/// formula guard trips (e.g. zero radius) or if any sample overflows. No
/// partial curve is returned.
pub fn sample_curve(plot: PlotKind, parameters: &ParameterSet) -> MotionResult<SampledCurve> {
    for &parameter in plot_parameters(plot) {
        parameter.check_domain(parameters.require(parameter)?)?;
    }
    let mass = parameters.require(Parameter::Mass)?;
    let radius = parameters.require(Parameter::Radius)?;

    let curve = match plot {
        PlotKind::ForceVsVelocity => {
            let x = linspace(0.0, FORCE_VELOCITY_MAX_MPS, CURVE_SAMPLE_COUNT);
            let force = x
                .iter()
                .map(|&v| centripetal_force(mass, v, radius))
                .collect::<MotionResult<Vec<_>>>()?;

            SampledCurve {
                plot,
                x_label: "Velocity".to_string(),
                x_unit: "m/s".to_string(),
                x,
                series: vec![CurveSeries {
                    name: "Centripetal Force".to_string(),
                    unit: "N".to_string(),
                    values: force,
                }],
            }
        }
        PlotKind::LoopForces => {
            let velocity = parameters.require(Parameter::Velocity)?;
            let x = linspace(0.0, LOOP_ANGLE_MAX_RAD, CURVE_SAMPLE_COUNT);
            let normal = x
                .iter()
                .map(|&phi| loop_normal_force_at(mass, velocity, radius, phi))
                .collect::<MotionResult<Vec<_>>>()?;
            let weight = vec![gravitational_force(mass); x.len()];

            SampledCurve {
                plot,
                x_label: "Angular Position".to_string(),
                x_unit: "rad".to_string(),
                x,
                series: vec![
                    CurveSeries {
                        name: "Normal Force".to_string(),
                        unit: "N".to_string(),
                        values: normal,
                    },
                    CurveSeries {
                        name: "Gravitational Force".to_string(),
                        unit: "N".to_string(),
                        values: weight,
                    },
                ],
            }
        }
    };

    if curve
        .series
        .iter()
        .flat_map(|s| s.values.iter())
        .any(|v| !v.is_finite())
    {
        return Err(MotionError::NonFiniteResult { quantity: plot.name() });
    }

    trace!(plot = %plot, samples = curve.len(), "sampled curve");

    Ok(curve)
}
