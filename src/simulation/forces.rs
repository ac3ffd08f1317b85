//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and direct pairwise Newtonian gravity.
//! Gravity is evaluated as an independent per-body sum over all other
//! bodies, so the sweep can run in parallel without changing the result.

use crate::simulation::error::SimError;
use crate::simulation::states::{NVec3, System};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Newtonian gravitational constant in SI units [m^3 kg^-1 s^-2]
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at `step` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(
        &self,
        step: usize,
        sys: &System,
        out: &mut [NVec3],
    ) -> Result<(), SimError> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(step, sys, out)?;
        }
        Ok(())
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body.
/// `step` is the current step index, carried for error reporting.
pub trait Acceleration {
    fn acceleration(&self, step: usize, sys: &System, out: &mut [NVec3]) -> Result<(), SimError>;
}

/// Direct N^2 Newtonian gravity
/// An exactly-zero separation between two bodies is a fatal
/// [`SimError::SingularConfiguration`] rather than a silent infinity
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Total gravitational acceleration on body `i` from all other bodies:
    /// a_i = G * sum_{j != i} m_j * (x_j - x_i) / |x_j - x_i|^3
    ///
    /// The sum runs over `j` in ascending order into a private accumulator,
    /// so the result is bit-identical however bodies are scheduled.
    fn accel_on_body(&self, step: usize, i: usize, sys: &System) -> Result<NVec3, SimError> {
        let xi = sys.bodies[i].x;
        let mut acc = NVec3::zeros();

        for (j, bj) in sys.bodies.iter().enumerate() {
            if j == i {
                continue;
            }

            // Displacement from body i to body j; the pull on i is along +r
            let r = bj.x - xi;
            let r2 = r.dot(&r);

            if r2 == 0.0 {
                return Err(SimError::singular(step, i, j));
            }

            // 1 / |r| and 1 / |r|^3
            let inv_r = r2.sqrt().recip();
            let inv_r3 = inv_r * inv_r * inv_r;

            // a_i += G * m_j * r / |r|^3
            let coef = self.g * bj.m * inv_r3;
            acc += coef * r;
        }

        Ok(acc)
    }

    #[cfg(feature = "parallel")]
    fn acceleration_parallel(
        &self,
        step: usize,
        sys: &System,
        out: &mut [NVec3],
    ) -> Result<(), SimError> {
        // One task per body; each reads the shared snapshot and produces
        // its own sum, then the results land in distinct output slots
        let accs = (0..sys.bodies.len())
            .into_par_iter()
            .map(|i| self.accel_on_body(step, i, sys))
            .collect::<Result<Vec<NVec3>, SimError>>()?;

        for (slot, a) in out.iter_mut().zip(accs) {
            *slot += a;
        }
        Ok(())
    }

    #[cfg(not(feature = "parallel"))]
    fn acceleration_sequential(
        &self,
        step: usize,
        sys: &System,
        out: &mut [NVec3],
    ) -> Result<(), SimError> {
        for (i, slot) in out.iter_mut().enumerate() {
            *slot += self.accel_on_body(step, i, sys)?;
        }
        Ok(())
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, step: usize, sys: &System, out: &mut [NVec3]) -> Result<(), SimError> {
        #[cfg(feature = "parallel")]
        {
            self.acceleration_parallel(step, sys, out)
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.acceleration_sequential(step, sys, out)
        }
    }
}
