//! Text rendering of results and curves.

use serde::Serialize;
use std::fmt::Write;

use crate::curve_sampling::SampledCurve;
use crate::engine::EvaluationResult;
use crate::error::MotionResult;
use crate::parameters::ParameterSpec;

/// "Label: value unit", e.g. `Centripetal Force: 18000.00 N`
pub fn format_result(result: &EvaluationResult, precision: usize) -> String {
    format!(
        "{}: {:.*} {}",
        result.label, precision, result.value, result.unit
    )
}

/// Inner width of the result box; fits the longest scenario label
const RESULT_WIDTH: usize = 56;

/// Boxed summary table for one evaluation
pub fn result_table(result: &EvaluationResult, precision: usize) -> String {
    let rule = "═".repeat(RESULT_WIDTH);
    let field = RESULT_WIDTH - 12;
    let full = RESULT_WIDTH - 2;
    let mut out = String::new();
    let _ = writeln!(out, "╔{rule}╗");
    let _ = writeln!(out, "║ {:<full$} ║", "CIRCULAR MOTION RESULT");
    let _ = writeln!(out, "╠{rule}╣");
    let _ = writeln!(out, "║ Mode:     {:<field$} ║", result.mode);
    let _ = writeln!(out, "║ Scenario: {:<field$} ║", result.scenario.label());
    let _ = writeln!(out, "║ Formula:  {:<field$} ║", result.formula);
    let _ = writeln!(out, "╠{rule}╣");
    let _ = writeln!(out, "║ {:<full$} ║", format_result(result, precision));
    let _ = writeln!(out, "╚{rule}╝");
    out
}

/// Pretty-printed JSON for any serializable output
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> MotionResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Single-row CSV with a header line
pub fn result_csv(result: &EvaluationResult, precision: usize) -> String {
    format!(
        "mode,scenario,quantity,value,unit\n{},{},{},{:.*},{}\n",
        result.mode, result.scenario, result.quantity, precision, result.value, result.unit
    )
}

/// Table of parameter specs
pub fn specs_table(specs: &[ParameterSpec]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "┌──────────────────────┬────────────┬────────────┬────────────┐");
    let _ = writeln!(out, "│ Parameter            │  Default   │    Min     │    Max     │");
    let _ = writeln!(out, "├──────────────────────┼────────────┼────────────┼────────────┤");
    for spec in specs {
        let max = spec.max.map_or_else(|| "—".to_string(), |m| format!("{m:.2}"));
        let _ = writeln!(
            out,
            "│ {:<20} │ {:>10.2} │ {:>10.2} │ {:>10} │",
            spec.parameter.name(),
            spec.default,
            spec.min,
            max
        );
    }
    let _ = writeln!(out, "└──────────────────────┴────────────┴────────────┴────────────┘");
    out
}

/// Parameter specs as CSV; an absent max is an empty field
pub fn specs_csv(specs: &[ParameterSpec]) -> String {
    let mut out = String::from("parameter,unit,default,min,max\n");
    for spec in specs {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            spec.parameter.name(),
            spec.parameter.unit(),
            spec.default,
            spec.min,
            spec.max.map(|m| m.to_string()).unwrap_or_default()
        );
    }
    out
}

/// Curve as CSV: the x column followed by one column per series
pub fn curve_csv(curve: &SampledCurve, precision: usize) -> String {
    let mut out = String::new();
    let mut header = column_name(&curve.x_label, &curve.x_unit);
    for series in &curve.series {
        header.push(',');
        header.push_str(&column_name(&series.name, &series.unit));
    }
    let _ = writeln!(out, "{header}");

    for (i, x) in curve.x.iter().enumerate() {
        let mut row = format!("{x:.precision$}");
        for series in &curve.series {
            let _ = write!(row, ",{:.*}", precision, series.values[i]);
        }
        let _ = writeln!(out, "{row}");
    }
    out
}

/// Curve as a table, printing every `stride`-th row plus the last
pub fn curve_table(curve: &SampledCurve, precision: usize, stride: usize) -> String {
    let stride = stride.max(1);
    let mut out = String::new();
    let _ = writeln!(out, "{}", curve.plot.title());

    let mut header = format!("{:>14}", column_name(&curve.x_label, &curve.x_unit));
    for series in &curve.series {
        let _ = write!(header, " │ {:>24}", column_name(&series.name, &series.unit));
    }
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "─".repeat(header.chars().count()));

    let last = curve.len().saturating_sub(1);
    for (i, x) in curve.x.iter().enumerate() {
        if i % stride != 0 && i != last {
            continue;
        }
        let mut row = format!("{x:>14.precision$}");
        for series in &curve.series {
            let _ = write!(row, " │ {:>24.*}", precision, series.values[i]);
        }
        let _ = writeln!(out, "{row}");
    }
    out
}

fn column_name(name: &str, unit: &str) -> String {
    format!("{name} ({unit})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve_sampling::sample_curve;
    use crate::engine::evaluate;
    use crate::parameters::{resolve_parameters, Parameter, ParameterSet};
    use crate::scenario::{Mode, PlotKind, QuantityKind, ScenarioKind};

    fn car_result() -> EvaluationResult {
        let params = ParameterSet::new()
            .with(Parameter::Mass, 1000.0)
            .with(Parameter::Radius, 50.0)
            .with(Parameter::Velocity, 30.0)
            .with(Parameter::FrictionCoefficient, 0.5);
        evaluate(
            Mode::Horizontal,
            ScenarioKind::UnbankedWithFriction,
            QuantityKind::CentripetalForce,
            &params,
        )
        .unwrap()
    }

    #[test]
    fn test_format_result_two_decimals() {
        assert_eq!(
            format_result(&car_result(), 2),
            "Centripetal Force: 18000.00 N"
        );
        assert_eq!(format_result(&car_result(), 0), "Centripetal Force: 18000 N");
    }

    #[test]
    fn test_format_result_acceleration_unit() {
        let params = ParameterSet::new()
            .with(Parameter::Mass, 1.0)
            .with(Parameter::Radius, 5.0)
            .with(Parameter::Velocity, 5.0);
        let result = evaluate(
            Mode::Vertical,
            ScenarioKind::Top,
            QuantityKind::CentripetalAcceleration,
            &params,
        )
        .unwrap();
        assert_eq!(format_result(&result, 2), "Centripetal Acceleration: 5.00 m/s²");
    }

    #[test]
    fn test_result_table_contains_summary() {
        let table = result_table(&car_result(), 2);
        assert!(table.contains("Unbanked with Friction"));
        assert!(table.contains("F_c = m·v²/r"));
        assert!(table.contains("18000.00 N"));
    }

    #[test]
    fn test_result_table_borders_line_up() {
        let params = ParameterSet::new()
            .with(Parameter::Mass, 1000.0)
            .with(Parameter::Radius, 50.0)
            .with(Parameter::Velocity, 30.0)
            .with(Parameter::AngleDegrees, 30.0);
        let result = evaluate(
            Mode::Horizontal,
            ScenarioKind::BankedNoFriction,
            QuantityKind::NormalForce,
            &params,
        )
        .unwrap();
        let table = result_table(&result, 2);
        assert!(table.contains("Banked without Friction (μ = 0, θ ≠ 0)"));
        let widths: Vec<_> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == RESULT_WIDTH + 2), "{table}");
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&car_result()).unwrap();
        assert!(json.contains("\"quantity\": \"centripetal-force\""));
        assert!(!json.contains("\"curve\""));
        let specs =
            resolve_parameters(Mode::Vertical, ScenarioKind::Top, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&specs[..]).unwrap()).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_result_csv() {
        let csv = result_csv(&car_result(), 2);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "mode,scenario,quantity,value,unit");
        assert_eq!(
            lines[1],
            "horizontal,unbanked-with-friction,centripetal-force,18000.00,N"
        );
    }

    #[test]
    fn test_specs_csv_leaves_open_max_empty() {
        let specs =
            resolve_parameters(Mode::Horizontal, ScenarioKind::BankedNoFriction, None).unwrap();
        let csv = specs_csv(&specs);
        assert!(csv.contains("mass,kg,1000,0.1,\n"));
        assert!(csv.contains("angle_degrees,°,30,0,90\n"));
    }

    #[test]
    fn test_specs_table_lists_every_parameter() {
        let specs =
            resolve_parameters(Mode::Horizontal, ScenarioKind::BankedWithFriction, None).unwrap();
        let table = specs_table(&specs);
        for spec in &specs {
            assert!(table.contains(spec.parameter.name()));
        }
    }

    #[test]
    fn test_curve_csv_shape() {
        let params = ParameterSet::new()
            .with(Parameter::Mass, 1.0)
            .with(Parameter::Radius, 5.0)
            .with(Parameter::Velocity, 5.0);
        let curve = sample_curve(PlotKind::LoopForces, &params).unwrap();
        let csv = curve_csv(&curve, 3);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 101);
        assert_eq!(
            lines[0],
            "Angular Position (rad),Normal Force (N),Gravitational Force (N)"
        );
        assert_eq!(lines[1], "0.000,15.000,10.000");
    }

    #[test]
    fn test_curve_table_stride_keeps_last_row() {
        let params = ParameterSet::new()
            .with(Parameter::Mass, 1000.0)
            .with(Parameter::Radius, 50.0);
        let curve = sample_curve(PlotKind::ForceVsVelocity, &params).unwrap();
        let table = curve_table(&curve, 2, 10);
        // title, header, rule, rows 0,10,..,90 and 99
        assert_eq!(table.lines().count(), 3 + 10 + 1);
        assert!(table.contains("50000.00"));
    }
}
