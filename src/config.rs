//! Presentation configuration loaded from YAML.
//!
//! Selects which optional features the front end exposes (plots) and how
//! results are rendered. The physics is not configurable: g stays at 10 m/s².

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use validator::Validate;

use crate::constants::DEFAULT_PRECISION;
use crate::error::{MotionError, MotionResult};
use crate::scenario::PlotKind;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(MotionError::unknown_name("output format", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

/// Calculator front-end configuration.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields, default)]
pub struct CalculatorConfig {
    /// Decimal places in rendered values.
    #[validate(range(max = 10))]
    pub precision: usize,

    /// Whether curves may be sampled and shown.
    pub plots_enabled: bool,

    /// Curve attached to every evaluation when none is requested explicitly.
    pub default_plot: Option<PlotKind>,

    /// Output format used when none is given on the command line.
    pub default_output: OutputFormat,

    /// Every n-th curve sample is printed in table output. A curve has 100
    /// samples, so larger strides would print only the endpoints.
    #[validate(range(min = 1, max = 100))]
    pub table_stride: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            plots_enabled: true,
            default_plot: None,
            default_output: OutputFormat::Table,
            table_stride: 10,
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> MotionResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> MotionResult<Self> {
        // serde_yaml reads an empty document as unit, not an empty map
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> MotionResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate_semantic(&self) -> MotionResult<()> {
        if self.default_plot.is_some() && !self.plots_enabled {
            return Err(MotionError::Config(
                "default_plot is set but plots_enabled is false".to_string(),
            ));
        }
        Ok(())
    }

    /// The plot to attach to an evaluation, if any.
    ///
    /// An explicit request wins over `default_plot`; asking for a plot while
    /// plots are disabled is an error.
    pub fn plot_for(&self, requested: Option<PlotKind>) -> MotionResult<Option<PlotKind>> {
        match requested {
            Some(plot) if !self.plots_enabled => Err(MotionError::Config(format!(
                "plot '{plot}' requested but plots are disabled"
            ))),
            Some(plot) => Ok(Some(plot)),
            None => Ok(self.default_plot),
        }
    }
}
