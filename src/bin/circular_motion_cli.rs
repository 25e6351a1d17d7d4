use circular_motion::constants::G_ACCEL_MPS2;
use circular_motion::report::{
    curve_csv, curve_table, result_csv, result_table, specs_csv, specs_table, to_json,
};
use circular_motion::{
    evaluate, evaluate_with_curve, plot_parameters, resolve_parameters, sample_curve,
    CalculatorConfig, EvaluationResult, Mode, OutputFormat, Parameter, ParameterSet,
    ParameterSpec, PlotKind, QuantityKind, SampledCurve, ScenarioKind,
};
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "circular-motion")]
#[command(author = "Circular Motion Engine Team")]
#[command(version)]
#[command(about = "Circular motion calculator for banked curves and vertical loops", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Numeric inputs; anything left out takes the resolver's default
#[derive(Args, Debug)]
struct InputArgs {
    /// Mass (kg)
    #[arg(short = 'm', long)]
    mass: Option<f64>,

    /// Radius (m)
    #[arg(short = 'r', long)]
    radius: Option<f64>,

    /// Tangential velocity (m/s)
    #[arg(long)]
    velocity: Option<f64>,

    /// Banking angle (degrees)
    #[arg(short = 'a', long)]
    angle: Option<f64>,

    /// Coefficient of static friction
    #[arg(long)]
    friction: Option<f64>,

    /// Centripetal acceleration (m/s²)
    #[arg(long)]
    acceleration: Option<f64>,
}

impl InputArgs {
    fn to_parameter_set(&self) -> ParameterSet {
        [
            (Parameter::Mass, self.mass),
            (Parameter::Radius, self.radius),
            (Parameter::Velocity, self.velocity),
            (Parameter::AngleDegrees, self.angle),
            (Parameter::FrictionCoefficient, self.friction),
            (Parameter::Acceleration, self.acceleration),
        ]
        .into_iter()
        .filter_map(|(p, v)| v.map(|v| (p, v)))
        .collect()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the inputs a scenario needs, with defaults and bounds
    Params {
        /// Motion mode; inferred from the scenario if omitted
        #[arg(long)]
        mode: Option<Mode>,

        /// Scenario
        #[arg(short = 's', long)]
        scenario: ScenarioKind,

        /// Quantity to solve for
        #[arg(short = 'q', long)]
        quantity: Option<QuantityKind>,

        /// Output format
        #[arg(short = 'o', long)]
        output: Option<OutputFormat>,
    },

    /// Evaluate one quantity
    Evaluate {
        /// Motion mode; inferred from the scenario if omitted
        #[arg(long)]
        mode: Option<Mode>,

        /// Scenario
        #[arg(short = 's', long)]
        scenario: ScenarioKind,

        /// Quantity to solve for
        #[arg(short = 'q', long)]
        quantity: QuantityKind,

        #[command(flatten)]
        inputs: InputArgs,

        /// Attach a sampled curve
        #[arg(long)]
        plot: Option<PlotKind>,

        /// Output format
        #[arg(short = 'o', long)]
        output: Option<OutputFormat>,
    },

    /// Sample a curve
    Plot {
        /// Curve to sample
        #[arg(short = 'k', long)]
        kind: PlotKind,

        #[command(flatten)]
        inputs: InputArgs,

        /// Output format
        #[arg(short = 'o', long)]
        output: Option<OutputFormat>,
    },

    /// Display supported scenarios and formulas
    Info,
}

/// Inner width of the `info` banner
const INFO_WIDTH: usize = 44;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            CalculatorConfig::load(path)?
        }
        None => CalculatorConfig::default(),
    };

    match cli.command {
        Commands::Params {
            mode,
            scenario,
            quantity,
            output,
        } => {
            let mode = mode.unwrap_or_else(|| scenario.mode());
            let specs = resolve_parameters(mode, scenario, quantity)?;
            display_specs(&specs, output.unwrap_or(config.default_output))?;
        }

        Commands::Evaluate {
            mode,
            scenario,
            quantity,
            inputs,
            plot,
            output,
        } => {
            let mode = mode.unwrap_or_else(|| scenario.mode());
            let specs = resolve_parameters(mode, scenario, Some(quantity))?;

            let supplied = inputs.to_parameter_set();
            for (parameter, _) in supplied.iter() {
                if !specs.iter().any(|s| s.parameter == parameter) {
                    warn!(%parameter, %scenario, %quantity, "parameter is not used by this selection");
                }
            }
            supplied.check_bounds(&specs)?;
            let params = supplied.or_defaults(&specs);

            let result = match config.plot_for(plot)? {
                Some(plot) => evaluate_with_curve(mode, scenario, quantity, &params, plot)?,
                None => evaluate(mode, scenario, quantity, &params)?,
            };

            display_result(&result, output.unwrap_or(config.default_output), &config)?;
        }

        Commands::Plot {
            kind,
            inputs,
            output,
        } => {
            // Fails when the configuration disables plots
            config.plot_for(Some(kind))?;
            let specs = plot_defaults(kind)?;
            let supplied = inputs.to_parameter_set();
            for (parameter, _) in supplied.iter() {
                if !specs.iter().any(|s| s.parameter == parameter) {
                    warn!(%parameter, plot = %kind, "parameter is not used by this plot");
                }
            }
            supplied.check_bounds(&specs)?;
            let params = supplied.or_defaults(&specs);

            let curve = sample_curve(kind, &params)?;
            display_curve(&curve, output.unwrap_or(config.default_output), &config)?;
        }

        Commands::Info => {
            let rule = "═".repeat(INFO_WIDTH);
            println!("╔{rule}╗");
            println!("║{:^w$}║", "CIRCULAR MOTION CALCULATOR", w = INFO_WIDTH);
            println!("╠{rule}╣");
            println!("║ {:<w$} ║", format!("g = {G_ACCEL_MPS2} m/s² (fixed)"), w = INFO_WIDTH - 2);
            println!("╚{rule}╝");
            for mode in Mode::ALL {
                println!("\n{mode} mode");
                for scenario in mode.scenarios() {
                    println!("  {:<24} {}", scenario.name(), scenario.label());
                    for quantity in mode.quantities() {
                        println!(
                            "    {:<26} {}",
                            quantity.name(),
                            quantity.formula(*scenario)
                        );
                    }
                }
            }
            println!("\nPlots");
            for plot in [PlotKind::ForceVsVelocity, PlotKind::LoopForces] {
                println!("  {:<24} {}", plot.name(), plot.title());
            }
        }
    }

    Ok(())
}

/// Default inputs for a standalone plot: the car of the horizontal calculator
/// for force vs. velocity, the loop object for the loop forces.
fn plot_defaults(kind: PlotKind) -> Result<Vec<ParameterSpec>, Box<dyn Error>> {
    let (mode, scenario) = match kind {
        PlotKind::ForceVsVelocity => (Mode::Horizontal, ScenarioKind::UnbankedWithFriction),
        PlotKind::LoopForces => (Mode::Vertical, ScenarioKind::Bottom),
    };
    let wanted = plot_parameters(kind);
    Ok(resolve_parameters(mode, scenario, None)?
        .into_iter()
        .filter(|s| wanted.contains(&s.parameter))
        .collect())
}

fn display_specs(specs: &[ParameterSpec], format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Table => print!("{}", specs_table(specs)),
        OutputFormat::Json => println!("{}", to_json(specs)?),
        OutputFormat::Csv => print!("{}", specs_csv(specs)),
    }
    Ok(())
}

fn display_result(
    result: &EvaluationResult,
    format: OutputFormat,
    config: &CalculatorConfig,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Table => {
            print!("{}", result_table(result, config.precision));
            if let Some(curve) = &result.curve {
                println!();
                print!("{}", curve_table(curve, config.precision, config.table_stride));
            }
        }
        OutputFormat::Json => println!("{}", to_json(result)?),
        OutputFormat::Csv => {
            print!("{}", result_csv(result, config.precision));
            if let Some(curve) = &result.curve {
                println!();
                print!("{}", curve_csv(curve, config.precision));
            }
        }
    }
    Ok(())
}

fn display_curve(
    curve: &SampledCurve,
    format: OutputFormat,
    config: &CalculatorConfig,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Table => print!("{}", curve_table(curve, config.precision, config.table_stride)),
        OutputFormat::Json => println!("{}", to_json(curve)?),
        OutputFormat::Csv => print!("{}", curve_csv(curve, config.precision)),
    }
    Ok(())
}
