//! Closed-form circular motion formulas.
//!
//! All quantities are SI. Each function checks its own guard (zero divisor,
//! right-angle bank, negative radicand). Overflow of extreme inputs is left
//! to the callers in the engine and the curve sampler.

use crate::constants::G_ACCEL_MPS2;
use crate::error::{MotionError, MotionResult};

fn nonzero_divisor(value: f64, divisor: &'static str) -> MotionResult<f64> {
    if value == 0.0 {
        Err(MotionError::DivisionByZero { divisor })
    } else {
        Ok(value)
    }
}

/// Centripetal acceleration a = v²/r
pub fn centripetal_acceleration(velocity: f64, radius: f64) -> MotionResult<f64> {
    let radius = nonzero_divisor(radius, "radius")?;
    Ok(velocity * velocity / radius)
}

/// Centripetal force F = m·v²/r
pub fn centripetal_force(mass: f64, velocity: f64, radius: f64) -> MotionResult<f64> {
    Ok(mass * centripetal_acceleration(velocity, radius)?)
}

/// Weight F = m·g
pub fn gravitational_force(mass: f64) -> f64 {
    mass * G_ACCEL_MPS2
}

/// Normal force on a banked curve, F = m·g / cos(θ)
///
/// The angle is in degrees. At exactly 90° the cosine vanishes and the
/// force is undefined.
pub fn banked_normal_force(mass: f64, angle_degrees: f64) -> MotionResult<f64> {
    if angle_degrees == 90.0 {
        return Err(MotionError::UndefinedAtRightAngle { angle_degrees });
    }
    let cos_theta = angle_degrees.to_radians().cos();
    if cos_theta == 0.0 {
        return Err(MotionError::UndefinedAtRightAngle { angle_degrees });
    }
    Ok(gravitational_force(mass) / cos_theta)
}

/// Tangential velocity v = √(a·r)
pub fn tangential_velocity(acceleration: f64, radius: f64) -> MotionResult<f64> {
    let radicand = acceleration * radius;
    if radicand < 0.0 {
        return Err(MotionError::NegativeRadicand { value: radicand });
    }
    Ok(radicand.sqrt())
}

/// Loop radius r = v²/a
pub fn loop_radius(velocity: f64, acceleration: f64) -> MotionResult<f64> {
    let acceleration = nonzero_divisor(acceleration, "acceleration")?;
    Ok(velocity * velocity / acceleration)
}

/// Normal (or tension) force at the bottom of a vertical loop, F = m·(v²/r + g)
pub fn loop_bottom_normal_force(mass: f64, velocity: f64, radius: f64) -> MotionResult<f64> {
    Ok(mass * (centripetal_acceleration(velocity, radius)? + G_ACCEL_MPS2))
}

/// Normal (or tension) force at the top of a vertical loop, F = m·(v²/r − g)
///
/// Negative when v²/r < g: the track would have to pull the object inward.
/// The sign is returned as is.
pub fn loop_top_normal_force(mass: f64, velocity: f64, radius: f64) -> MotionResult<f64> {
    Ok(mass * (centripetal_acceleration(velocity, radius)? - G_ACCEL_MPS2))
}

/// Normal force at an angular position around a vertical loop,
/// F = m·(v²/r + g·cos(φ)), with φ = 0 at the bottom.
pub fn loop_normal_force_at(
    mass: f64,
    velocity: f64,
    radius: f64,
    position_rad: f64,
) -> MotionResult<f64> {
    Ok(mass * (centripetal_acceleration(velocity, radius)? + G_ACCEL_MPS2 * position_rad.cos()))
}
