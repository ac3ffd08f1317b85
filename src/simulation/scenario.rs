//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! All construction input is validated here or in the runtime constructors;
//! a scenario that builds successfully can always start a run.

use tracing::debug;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity, GRAVITATIONAL_CONSTANT};
use crate::simulation::integrator::run_simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};
use crate::simulation::trajectory::Trajectory;

/// A fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the parameters, the current system state, and the set of
/// active force laws (accelerations)
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

/// Map one `BodyConfig` to a runtime `Body`, checking that position and
/// velocity have exactly three components
fn build_body(index: usize, bc: &BodyConfig) -> Result<Body, SimError> {
    if bc.x.len() != 3 {
        return Err(SimError::invalid(format!(
            "body {}: position has {} components, expected 3",
            index,
            bc.x.len()
        )));
    }
    if bc.v.len() != 3 {
        return Err(SimError::invalid(format!(
            "body {}: velocity has {} components, expected 3",
            index,
            bc.v.len()
        )));
    }
    Ok(Body {
        x: NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
        v: NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
        m: bc.m,
    })
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc))
            .collect::<Result<Vec<Body>, SimError>>()?;

        // Initial system state: bodies at t = 0
        let system = System::new(bodies)?;

        // Parameters (runtime) from ParametersConfig; G falls back to the
        // SI constant when the scenario does not override it
        let p_cfg = cfg.parameters;
        let parameters = Parameters::new(
            p_cfg.dt,
            p_cfg.steps,
            p_cfg.g.unwrap_or(GRAVITATIONAL_CONSTANT),
        )?;

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        debug!(
            "scenario built: {} bodies, {} steps, dt = {}",
            system.len(),
            parameters.steps,
            parameters.dt
        );

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }

    /// Drive the integrator over the owned state and hand back the
    /// recorded trajectory; the final state stays in `self.system`
    pub fn run(&mut self) -> Result<Trajectory, SimError> {
        run_simulation(&mut self.system, &self.forces, &self.parameters)
    }
}
