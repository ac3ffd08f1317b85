//! Fixed-step time integration for the N-body system
//!
//! Provides the semi-implicit Euler (Euler–Cromer) stepper and the
//! fixed-length run loop that records each pre-update snapshot into a
//! [`Trajectory`], driven by `AccelSet` and `Parameters`.

use tracing::debug;

use super::error::SimError;
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec3, System};
use super::trajectory::Trajectory;

/// Advance the system by one step of size `params.dt`.
///
/// Ordering is the numerical contract:
/// 1. accelerations are computed once from the current positions, the same
///    snapshot for every body,
/// 2. kick: `v_i += a_i * dt`,
/// 3. drift: `x_i += v_i * dt` with the just-updated velocity,
/// 4. `sys.t += dt`.
///
/// `step` is the current step index, carried into singularity errors.
pub fn euler_cromer_step(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
    step: usize,
) -> Result<(), SimError> {
    let n = sys.bodies.len();
    let dt = params.dt;

    // a_n from x_n
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(step, &*sys, &mut acc)?;

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += dt * *a;
    }

    // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // advance time: t_n+1 = t_n + dt
    sys.t += dt;

    Ok(())
}

/// Run the fixed-length simulation loop: `params.steps` sequential steps,
/// recording every body's position *before* each update.
///
/// Returns the fully populated trajectory; the final post-run state is
/// left in `sys`. Step `t+1` depends on the committed state of step `t`,
/// so there is no early termination and no reordering across steps.
pub fn run_simulation(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
) -> Result<Trajectory, SimError> {
    debug!(
        "starting run: {} bodies, {} steps, dt = {}",
        sys.len(),
        params.steps,
        params.dt
    );

    let mut trajectory = Trajectory::with_capacity(sys.len(), params.steps);

    for step in 0..params.steps {
        trajectory.record(sys);
        euler_cromer_step(sys, forces, params, step)?;
    }

    debug!("run complete at t = {}", sys.t);

    Ok(trajectory)
}
