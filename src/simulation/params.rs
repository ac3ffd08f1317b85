//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `dt`,
//! - number of steps to run,
//! - gravitational constant `g`

use crate::simulation::error::SimError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size [s]
    pub steps: usize, // number of steps
    pub g: f64, // gravitational constant
}

impl Parameters {
    /// Validate and build run parameters. `dt` and `g` must be positive
    /// and finite, `steps` must be at least 1.
    pub fn new(dt: f64, steps: usize, g: f64) -> Result<Self, SimError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::invalid(format!("dt must be positive, got {dt}")));
        }
        if steps == 0 {
            return Err(SimError::invalid("steps must be at least 1"));
        }
        if !g.is_finite() || g <= 0.0 {
            return Err(SimError::invalid(format!(
                "gravitational constant must be positive, got {g}"
            )));
        }
        Ok(Self { dt, steps, g })
    }
}
