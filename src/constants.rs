/// Physical and numerical constants used in circular motion calculations

/// Gravitational acceleration in m/s²
///
/// Fixed at 10 rather than 9.80665. Every reference result of the calculator is
/// computed with this value, so it must not be "corrected".
pub const G_ACCEL_MPS2: f64 = 10.0;

/// Number of evenly spaced samples in every plotted curve
pub const CURVE_SAMPLE_COUNT: usize = 100;

/// Upper end of the velocity sweep for the force vs. velocity plot (m/s)
pub const FORCE_VELOCITY_MAX_MPS: f64 = 50.0;

/// Upper end of the angular sweep around a vertical loop (radians)
pub const LOOP_ANGLE_MAX_RAD: f64 = 2.0 * std::f64::consts::PI;

/// General numerical tolerance for floating point comparisons
pub const NUMERICAL_TOLERANCE: f64 = 1e-9;

/// Default number of decimal places when rendering a result
pub const DEFAULT_PRECISION: usize = 2;
