//! Selection enums: motion mode, scenario, requested quantity and plot kind.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MotionError, MotionResult};

/// Lowercase a user-supplied name and fold `_` and spaces into `-`.
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Plane of the circular motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Car on a flat or banked curve
    #[value(alias = "h")]
    Horizontal,
    /// Object travelling around a vertical loop
    #[value(alias = "v")]
    Vertical,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Horizontal, Mode::Vertical];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Horizontal => "horizontal",
            Mode::Vertical => "vertical",
        }
    }

    /// Scenarios that may be selected in this mode
    pub fn scenarios(&self) -> &'static [ScenarioKind] {
        match self {
            Mode::Horizontal => &[
                ScenarioKind::BankedNoFriction,
                ScenarioKind::BankedWithFriction,
                ScenarioKind::UnbankedWithFriction,
            ],
            Mode::Vertical => &[ScenarioKind::Top, ScenarioKind::Bottom],
        }
    }

    /// Quantities that may be requested in this mode, in menu order
    pub fn quantities(&self) -> &'static [QuantityKind] {
        match self {
            Mode::Horizontal => &[
                QuantityKind::CentripetalForce,
                QuantityKind::CentripetalAcceleration,
                QuantityKind::GravitationalForce,
                QuantityKind::NormalForce,
            ],
            Mode::Vertical => &[
                QuantityKind::CentripetalAcceleration,
                QuantityKind::TangentialVelocity,
                QuantityKind::LoopRadius,
                QuantityKind::CentripetalForce,
                QuantityKind::NormalForce,
                QuantityKind::GravitationalForce,
            ],
        }
    }
}

impl FromStr for Mode {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        match normalize(s).as_str() {
            "horizontal" | "h" => Ok(Mode::Horizontal),
            "vertical" | "v" => Ok(Mode::Vertical),
            _ => Err(MotionError::unknown_name("mode", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Physical situation being analysed.
///
/// The first three apply to horizontal motion, `Top` and `Bottom` are loop
/// positions for vertical motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    #[value(alias = "banked-without-friction", alias = "banked")]
    BankedNoFriction,
    BankedWithFriction,
    #[value(alias = "unbanked")]
    UnbankedWithFriction,
    #[value(alias = "top-of-the-loop")]
    Top,
    #[value(alias = "bottom-of-the-loop")]
    Bottom,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 5] = [
        ScenarioKind::BankedNoFriction,
        ScenarioKind::BankedWithFriction,
        ScenarioKind::UnbankedWithFriction,
        ScenarioKind::Top,
        ScenarioKind::Bottom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::BankedNoFriction => "banked-no-friction",
            ScenarioKind::BankedWithFriction => "banked-with-friction",
            ScenarioKind::UnbankedWithFriction => "unbanked-with-friction",
            ScenarioKind::Top => "top",
            ScenarioKind::Bottom => "bottom",
        }
    }

    /// Descriptive label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::BankedNoFriction => "Banked without Friction (μ = 0, θ ≠ 0)",
            ScenarioKind::BankedWithFriction => "Banked with Friction (μ ≠ 0, θ ≠ 0)",
            ScenarioKind::UnbankedWithFriction => "Unbanked with Friction (μ ≠ 0, θ = 0)",
            ScenarioKind::Top => "Top of the Loop",
            ScenarioKind::Bottom => "Bottom of the Loop",
        }
    }

    /// The mode this scenario belongs to
    pub fn mode(&self) -> Mode {
        match self {
            ScenarioKind::BankedNoFriction
            | ScenarioKind::BankedWithFriction
            | ScenarioKind::UnbankedWithFriction => Mode::Horizontal,
            ScenarioKind::Top | ScenarioKind::Bottom => Mode::Vertical,
        }
    }

    pub fn is_banked(&self) -> bool {
        matches!(
            self,
            ScenarioKind::BankedNoFriction | ScenarioKind::BankedWithFriction
        )
    }

    pub fn has_friction(&self) -> bool {
        matches!(
            self,
            ScenarioKind::BankedWithFriction | ScenarioKind::UnbankedWithFriction
        )
    }
}

impl FromStr for ScenarioKind {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        match normalize(s).as_str() {
            "banked-no-friction" | "banked-without-friction" | "banked" => {
                Ok(ScenarioKind::BankedNoFriction)
            }
            "banked-with-friction" => Ok(ScenarioKind::BankedWithFriction),
            "unbanked-with-friction" | "unbanked" => Ok(ScenarioKind::UnbankedWithFriction),
            "top" | "top-of-the-loop" => Ok(ScenarioKind::Top),
            "bottom" | "bottom-of-the-loop" => Ok(ScenarioKind::Bottom),
            _ => Err(MotionError::unknown_name("scenario", s)),
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Output quantity requested from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum QuantityKind {
    #[value(alias = "fc")]
    CentripetalForce,
    #[value(alias = "ac")]
    CentripetalAcceleration,
    #[value(alias = "weight", alias = "fg")]
    GravitationalForce,
    #[value(alias = "tension", alias = "fn")]
    NormalForce,
    TangentialVelocity,
    #[value(alias = "radius-of-the-loop")]
    LoopRadius,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 6] = [
        QuantityKind::CentripetalForce,
        QuantityKind::CentripetalAcceleration,
        QuantityKind::GravitationalForce,
        QuantityKind::NormalForce,
        QuantityKind::TangentialVelocity,
        QuantityKind::LoopRadius,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::CentripetalForce => "centripetal-force",
            QuantityKind::CentripetalAcceleration => "centripetal-acceleration",
            QuantityKind::GravitationalForce => "gravitational-force",
            QuantityKind::NormalForce => "normal-force",
            QuantityKind::TangentialVelocity => "tangential-velocity",
            QuantityKind::LoopRadius => "loop-radius",
        }
    }

    /// SI unit of the quantity
    pub fn unit(&self) -> &'static str {
        match self {
            QuantityKind::CentripetalForce
            | QuantityKind::GravitationalForce
            | QuantityKind::NormalForce => "N",
            QuantityKind::CentripetalAcceleration => "m/s²",
            QuantityKind::TangentialVelocity => "m/s",
            QuantityKind::LoopRadius => "m",
        }
    }

    /// Human-readable name. On a vertical loop the normal force doubles as
    /// the tension in a string, hence the different label.
    pub fn label(&self, mode: Mode) -> &'static str {
        match (self, mode) {
            (QuantityKind::CentripetalForce, _) => "Centripetal Force",
            (QuantityKind::CentripetalAcceleration, _) => "Centripetal Acceleration",
            (QuantityKind::GravitationalForce, _) => "Gravitational Force",
            (QuantityKind::NormalForce, Mode::Horizontal) => "Normal Force",
            (QuantityKind::NormalForce, Mode::Vertical) => "Normal/Tension Force",
            (QuantityKind::TangentialVelocity, _) => "Tangential Velocity",
            (QuantityKind::LoopRadius, _) => "Radius of the Loop",
        }
    }

    /// Formula used to compute this quantity under the given scenario
    pub fn formula(&self, scenario: ScenarioKind) -> &'static str {
        match self {
            QuantityKind::CentripetalForce => "F_c = m·v²/r",
            QuantityKind::CentripetalAcceleration => "a_c = v²/r",
            QuantityKind::GravitationalForce => "F_g = m·g",
            QuantityKind::NormalForce => match scenario {
                ScenarioKind::BankedNoFriction | ScenarioKind::BankedWithFriction => {
                    "F_N = m·g/cos(θ)"
                }
                ScenarioKind::UnbankedWithFriction => "F_N = m·g",
                ScenarioKind::Top => "F_N = m·(v²/r − g)",
                ScenarioKind::Bottom => "F_N = m·(v²/r + g)",
            },
            QuantityKind::TangentialVelocity => "v_T = √(a_c·r)",
            QuantityKind::LoopRadius => "r = v²/a_c",
        }
    }

    /// Whether this quantity takes centripetal acceleration as an input
    pub fn takes_acceleration(&self) -> bool {
        matches!(self, QuantityKind::TangentialVelocity | QuantityKind::LoopRadius)
    }
}

impl FromStr for QuantityKind {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        match normalize(s).as_str() {
            "centripetal-force" | "fc" => Ok(QuantityKind::CentripetalForce),
            "centripetal-acceleration" | "ac" => Ok(QuantityKind::CentripetalAcceleration),
            "gravitational-force" | "weight" | "fg" => Ok(QuantityKind::GravitationalForce),
            "normal-force" | "tension" | "normal-tension-force" | "fn" => {
                Ok(QuantityKind::NormalForce)
            }
            "tangential-velocity" | "velocity" => Ok(QuantityKind::TangentialVelocity),
            "loop-radius" | "radius" | "radius-of-the-loop" => Ok(QuantityKind::LoopRadius),
            _ => Err(MotionError::unknown_name("quantity", s)),
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Curves that can be sampled for plotting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlotKind {
    /// Centripetal force over a 0–50 m/s velocity sweep
    #[value(alias = "force-velocity")]
    ForceVsVelocity,
    /// Normal and gravitational force over one revolution of a vertical loop
    #[value(alias = "loop")]
    LoopForces,
}

impl PlotKind {
    pub fn name(&self) -> &'static str {
        match self {
            PlotKind::ForceVsVelocity => "force-vs-velocity",
            PlotKind::LoopForces => "loop-forces",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PlotKind::ForceVsVelocity => "Force vs. Velocity",
            PlotKind::LoopForces => "Forces Around the Vertical Loop",
        }
    }
}

impl FromStr for PlotKind {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        match normalize(s).as_str() {
            "force-vs-velocity" | "force-velocity" => Ok(PlotKind::ForceVsVelocity),
            "loop-forces" | "forces-around-the-vertical-loop" | "loop" => {
                Ok(PlotKind::LoopForces)
            }
            _ => Err(MotionError::unknown_name("plot", s)),
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
