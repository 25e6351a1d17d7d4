//! Parameter resolution.
//!
//! Maps a mode/scenario/quantity selection to the inputs a caller has to
//! collect, with the defaults and bounds a form or CLI should offer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{MotionError, MotionResult};
use crate::scenario::{Mode, QuantityKind, ScenarioKind};

/// Named numeric input to a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Mass,
    Radius,
    Velocity,
    AngleDegrees,
    FrictionCoefficient,
    Acceleration,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::Mass,
        Parameter::Radius,
        Parameter::Velocity,
        Parameter::AngleDegrees,
        Parameter::FrictionCoefficient,
        Parameter::Acceleration,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Mass => "mass",
            Parameter::Radius => "radius",
            Parameter::Velocity => "velocity",
            Parameter::AngleDegrees => "angle_degrees",
            Parameter::FrictionCoefficient => "friction_coefficient",
            Parameter::Acceleration => "acceleration",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Mass => "kg",
            Parameter::Radius => "m",
            Parameter::Velocity => "m/s",
            Parameter::AngleDegrees => "°",
            Parameter::FrictionCoefficient => "",
            Parameter::Acceleration => "m/s²",
        }
    }

    /// Check a value against the parameter's physical domain.
    ///
    /// Radius and acceleration only reject negative values here: a zero
    /// divisor is left for the formula to report as `DivisionByZero`.
    pub fn check_domain(&self, value: f64) -> MotionResult<()> {
        let fail = |constraint| {
            Err(MotionError::OutOfDomain {
                parameter: *self,
                value,
                constraint,
            })
        };

        if !value.is_finite() {
            return fail("finite value");
        }

        match self {
            Parameter::Mass if value <= 0.0 => fail("mass > 0"),
            Parameter::Radius if value < 0.0 => fail("radius > 0"),
            Parameter::Velocity if value < 0.0 => fail("velocity ≥ 0"),
            Parameter::AngleDegrees if !(0.0..=90.0).contains(&value) => {
                fail("0° ≤ angle ≤ 90°")
            }
            Parameter::FrictionCoefficient if value < 0.0 => fail("friction_coefficient ≥ 0"),
            Parameter::Acceleration if value < 0.0 => fail("acceleration > 0"),
            _ => Ok(()),
        }
    }
}

impl FromStr for Parameter {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "mass" | "m" => Ok(Parameter::Mass),
            "radius" | "r" => Ok(Parameter::Radius),
            "velocity" | "v" => Ok(Parameter::Velocity),
            "angle_degrees" | "angle" => Ok(Parameter::AngleDegrees),
            "friction_coefficient" | "friction" | "mu" => Ok(Parameter::FrictionCoefficient),
            "acceleration" | "a" => Ok(Parameter::Acceleration),
            _ => Err(MotionError::unknown_name("parameter", s)),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One input to collect: its default and inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub parameter: Parameter,
    pub default: f64,
    pub min: f64,
    pub max: Option<f64>,
}

impl ParameterSpec {
    const fn new(parameter: Parameter, default: f64, min: f64, max: Option<f64>) -> Self {
        Self {
            parameter,
            default,
            min,
            max,
        }
    }

    /// Whether `value` lies within `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

// Horizontal inputs describe a car on a curve
const HORIZONTAL_MASS: ParameterSpec = ParameterSpec::new(Parameter::Mass, 1000.0, 0.1, None);
const HORIZONTAL_RADIUS: ParameterSpec = ParameterSpec::new(Parameter::Radius, 50.0, 1.0, None);
const HORIZONTAL_VELOCITY: ParameterSpec =
    ParameterSpec::new(Parameter::Velocity, 30.0, 1.0, None);
const BANK_ANGLE: ParameterSpec =
    ParameterSpec::new(Parameter::AngleDegrees, 30.0, 0.0, Some(90.0));
const FRICTION: ParameterSpec =
    ParameterSpec::new(Parameter::FrictionCoefficient, 0.5, 0.0, None);

// Vertical inputs describe a small object on a loop
const VERTICAL_MASS: ParameterSpec = ParameterSpec::new(Parameter::Mass, 1.0, 0.1, None);
const VERTICAL_RADIUS: ParameterSpec = ParameterSpec::new(Parameter::Radius, 5.0, 0.1, None);
const VERTICAL_VELOCITY: ParameterSpec = ParameterSpec::new(Parameter::Velocity, 5.0, 0.0, None);
const VERTICAL_ACCELERATION: ParameterSpec =
    ParameterSpec::new(Parameter::Acceleration, 5.0, 0.1, None);

/// Reject a quantity or scenario that does not belong to `mode`.
fn check_selection(
    mode: Mode,
    scenario: ScenarioKind,
    quantity: Option<QuantityKind>,
) -> MotionResult<()> {
    if scenario.mode() != mode {
        return Err(MotionError::invalid_scenario(format!(
            "scenario '{scenario}' is not available in {mode} mode"
        )));
    }
    if let Some(quantity) = quantity {
        if !mode.quantities().contains(&quantity) {
            return Err(MotionError::invalid_scenario(format!(
                "quantity '{quantity}' is not available in {mode} mode"
            )));
        }
    }
    Ok(())
}

/// List the inputs required for a selection, in presentation order.
///
/// In vertical mode the quantity decides whether centripetal acceleration is
/// an input; pass `None` to get the inputs shared by every vertical quantity.
pub fn resolve_parameters(
    mode: Mode,
    scenario: ScenarioKind,
    quantity: Option<QuantityKind>,
) -> MotionResult<Vec<ParameterSpec>> {
    check_selection(mode, scenario, quantity)?;

    let specs = match mode {
        Mode::Horizontal => {
            let mut specs = vec![HORIZONTAL_MASS, HORIZONTAL_RADIUS, HORIZONTAL_VELOCITY];
            if scenario.is_banked() {
                specs.push(BANK_ANGLE);
            }
            if scenario.has_friction() {
                specs.push(FRICTION);
            }
            specs
        }
        Mode::Vertical => {
            let mut specs = vec![VERTICAL_MASS, VERTICAL_RADIUS, VERTICAL_VELOCITY];
            if quantity.is_some_and(|q| q.takes_acceleration()) {
                specs.push(VERTICAL_ACCELERATION);
            }
            specs
        }
    };

    debug!(
        %mode,
        %scenario,
        quantity = ?quantity,
        parameters = ?specs.iter().map(|s| s.parameter.name()).collect::<Vec<_>>(),
        "resolved parameters"
    );

    Ok(specs)
}

/// Values supplied for a single evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<Parameter, f64>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        self.values.insert(parameter, value);
        self
    }

    /// A set holding the default value of every spec
    pub fn with_defaults(specs: &[ParameterSpec]) -> Self {
        specs.iter().map(|s| (s.parameter, s.default)).collect()
    }

    /// Fill any parameter named in `specs` but absent here with its default
    #[must_use]
    pub fn or_defaults(mut self, specs: &[ParameterSpec]) -> Self {
        for spec in specs {
            self.values.entry(spec.parameter).or_insert(spec.default);
        }
        self
    }

    pub fn insert(&mut self, parameter: Parameter, value: f64) -> Option<f64> {
        self.values.insert(parameter, value)
    }

    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        self.values.get(&parameter).copied()
    }

    /// Fetch a parameter, failing if it was not supplied
    pub fn require(&self, parameter: Parameter) -> MotionResult<f64> {
        self.get(parameter)
            .ok_or(MotionError::MissingParameter(parameter))
    }

    pub fn contains(&self, parameter: Parameter) -> bool {
        self.values.contains_key(&parameter)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }

    /// Require every spec'd parameter and check it against its physical domain
    pub fn check_domains(&self, specs: &[ParameterSpec]) -> MotionResult<()> {
        for spec in specs {
            let value = self.require(spec.parameter)?;
            spec.parameter.check_domain(value)?;
        }
        Ok(())
    }

    /// Check supplied values against the bounds a form would enforce.
    ///
    /// Parameters not present in the set are skipped.
    pub fn check_bounds(&self, specs: &[ParameterSpec]) -> MotionResult<()> {
        for spec in specs {
            if let Some(value) = self.get(spec.parameter) {
                if !spec.contains(value) {
                    return Err(MotionError::OutOfBounds {
                        parameter: spec.parameter,
                        value,
                        min: spec.min,
                        max: spec.max,
                    });
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<(Parameter, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (Parameter, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn names(specs: &[ParameterSpec]) -> Vec<Parameter> {
        specs.iter().map(|s| s.parameter).collect()
    }

    #[test]
    fn test_banked_no_friction_parameters() {
        let specs =
            resolve_parameters(Mode::Horizontal, ScenarioKind::BankedNoFriction, None).unwrap();
        assert_eq!(
            names(&specs),
            vec![
                Parameter::Mass,
                Parameter::Radius,
                Parameter::Velocity,
                Parameter::AngleDegrees
            ]
        );
    }

    #[test]
    fn test_banked_with_friction_parameters() {
        let specs =
            resolve_parameters(Mode::Horizontal, ScenarioKind::BankedWithFriction, None).unwrap();
        assert_eq!(
            names(&specs),
            vec![
                Parameter::Mass,
                Parameter::Radius,
                Parameter::Velocity,
                Parameter::AngleDegrees,
                Parameter::FrictionCoefficient
            ]
        );
    }

    #[test]
    fn test_unbanked_parameters() {
        let specs =
            resolve_parameters(Mode::Horizontal, ScenarioKind::UnbankedWithFriction, None).unwrap();
        assert_eq!(
            names(&specs),
            vec![
                Parameter::Mass,
                Parameter::Radius,
                Parameter::Velocity,
                Parameter::FrictionCoefficient
            ]
        );
    }

    #[test]
    fn test_vertical_parameters_depend_on_quantity() {
        for scenario in [ScenarioKind::Top, ScenarioKind::Bottom] {
            for quantity in Mode::Vertical.quantities() {
                let specs = resolve_parameters(Mode::Vertical, scenario, Some(*quantity)).unwrap();
                let set: BTreeSet<_> = names(&specs).into_iter().collect();
                assert!(set.contains(&Parameter::Mass));
                assert!(set.contains(&Parameter::Radius));
                assert!(set.contains(&Parameter::Velocity));
                assert_eq!(
                    set.contains(&Parameter::Acceleration),
                    quantity.takes_acceleration(),
                    "{quantity}"
                );
                assert_eq!(set.len(), 3 + usize::from(quantity.takes_acceleration()));
            }
        }
    }

    #[test]
    fn test_horizontal_defaults_and_bounds() {
        let specs =
            resolve_parameters(Mode::Horizontal, ScenarioKind::BankedWithFriction, None).unwrap();
        let angle = specs
            .iter()
            .find(|s| s.parameter == Parameter::AngleDegrees)
            .unwrap();
        assert_eq!(angle.default, 30.0);
        assert_eq!(angle.min, 0.0);
        assert_eq!(angle.max, Some(90.0));
        assert_eq!(specs[0].default, 1000.0);
        assert_eq!(specs[1].default, 50.0);
        assert_eq!(specs[2].default, 30.0);
    }

    #[test]
    fn test_vertical_defaults() {
        let specs = resolve_parameters(
            Mode::Vertical,
            ScenarioKind::Bottom,
            Some(QuantityKind::TangentialVelocity),
        )
        .unwrap();
        let set = ParameterSet::with_defaults(&specs);
        assert_eq!(set.get(Parameter::Radius), Some(5.0));
        assert_eq!(set.get(Parameter::Velocity), Some(5.0));
        assert_eq!(set.get(Parameter::Acceleration), Some(5.0));
    }

    #[test]
    fn test_mismatched_mode_and_scenario() {
        let err = resolve_parameters(Mode::Horizontal, ScenarioKind::Top, None).unwrap_err();
        assert!(matches!(err, MotionError::InvalidScenario(_)));

        let err =
            resolve_parameters(Mode::Vertical, ScenarioKind::BankedNoFriction, None).unwrap_err();
        assert!(matches!(err, MotionError::InvalidScenario(_)));
    }

    #[test]
    fn test_quantity_not_in_mode() {
        let err = resolve_parameters(
            Mode::Horizontal,
            ScenarioKind::UnbankedWithFriction,
            Some(QuantityKind::LoopRadius),
        )
        .unwrap_err();
        assert!(matches!(err, MotionError::InvalidScenario(_)));
    }

    #[test]
    fn test_check_domain() {
        assert!(Parameter::Mass.check_domain(1.0).is_ok());
        assert!(Parameter::Mass.check_domain(0.0).is_err());
        assert!(Parameter::Radius.check_domain(0.0).is_ok());
        assert!(Parameter::Radius.check_domain(-1.0).is_err());
        assert!(Parameter::Velocity.check_domain(0.0).is_ok());
        assert!(Parameter::Velocity.check_domain(-0.1).is_err());
        assert!(Parameter::AngleDegrees.check_domain(90.0).is_ok());
        assert!(Parameter::AngleDegrees.check_domain(90.5).is_err());
        assert!(Parameter::AngleDegrees.check_domain(-1.0).is_err());
        assert!(Parameter::FrictionCoefficient.check_domain(0.0).is_ok());
        assert!(Parameter::Acceleration.check_domain(-2.0).is_err());
        assert!(Parameter::Velocity.check_domain(f64::NAN).is_err());
        assert!(Parameter::Mass.check_domain(f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_domains_reports_missing() {
        let specs =
            resolve_parameters(Mode::Horizontal, ScenarioKind::BankedNoFriction, None).unwrap();
        let set = ParameterSet::new()
            .with(Parameter::Mass, 1000.0)
            .with(Parameter::Radius, 50.0)
            .with(Parameter::Velocity, 30.0);
        let err = set.check_domains(&specs).unwrap_err();
        assert!(matches!(
            err,
            MotionError::MissingParameter(Parameter::AngleDegrees)
        ));
    }

    #[test]
    fn test_check_bounds() {
        let specs =
            resolve_parameters(Mode::Horizontal, ScenarioKind::BankedNoFriction, None).unwrap();
        let ok = ParameterSet::with_defaults(&specs);
        assert!(ok.check_bounds(&specs).is_ok());

        let too_steep = ok.clone().with(Parameter::AngleDegrees, 91.0);
        match too_steep.check_bounds(&specs).unwrap_err() {
            MotionError::OutOfBounds { parameter, max, .. } => {
                assert_eq!(parameter, Parameter::AngleDegrees);
                assert_eq!(max, Some(90.0));
            }
            other => panic!("unexpected error: {other}"),
        }

        // Presentation bound on radius is stricter than the physical domain
        let tight = ok.with(Parameter::Radius, 0.5);
        assert!(tight.check_bounds(&specs).is_err());
    }

    #[test]
    fn test_or_defaults_keeps_supplied_values() {
        let specs =
            resolve_parameters(Mode::Horizontal, ScenarioKind::UnbankedWithFriction, None).unwrap();
        let set = ParameterSet::new()
            .with(Parameter::Velocity, 12.0)
            .or_defaults(&specs);
        assert_eq!(set.get(Parameter::Velocity), Some(12.0));
        assert_eq!(set.get(Parameter::Mass), Some(1000.0));
        assert_eq!(set.get(Parameter::FrictionCoefficient), Some(0.5));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_parameter_from_str() {
        assert_eq!("angle".parse::<Parameter>().unwrap(), Parameter::AngleDegrees);
        assert_eq!(
            "friction-coefficient".parse::<Parameter>().unwrap(),
            Parameter::FrictionCoefficient
        );
        assert!("density".parse::<Parameter>().is_err());
    }

    #[test]
    fn test_parameter_set_serializes_as_map() {
        let set = ParameterSet::new()
            .with(Parameter::Mass, 2.0)
            .with(Parameter::AngleDegrees, 15.0);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"mass":2.0,"angle_degrees":15.0}"#);
    }
}
