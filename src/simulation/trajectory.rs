//! Recorded position history for a simulation run
//!
//! `Trajectory` is the hand-off artifact for external consumers (renderers,
//! exporters): a dense record of every body's position at every step.
//! Storage is a flat step-major buffer allocated at full capacity before
//! the run starts; the integrator appends one snapshot per step and the
//! structure is read-only afterward.

use crate::simulation::states::{NVec3, System};

#[derive(Debug, Clone)]
pub struct Trajectory {
    n_bodies: usize,
    capacity_steps: usize,
    positions: Vec<NVec3>, // step-major: index = step * n_bodies + body
}

impl Trajectory {
    /// Allocate an empty trajectory with room for `steps` snapshots of
    /// `n_bodies` positions
    pub fn with_capacity(n_bodies: usize, steps: usize) -> Self {
        Self {
            n_bodies,
            capacity_steps: steps,
            positions: Vec::with_capacity(n_bodies * steps),
        }
    }

    /// Append a snapshot of the current positions, in body-index order
    pub fn record(&mut self, sys: &System) {
        debug_assert_eq!(sys.len(), self.n_bodies);
        self.positions.extend(sys.positions());
    }

    pub fn n_bodies(&self) -> usize {
        self.n_bodies
    }

    /// Number of snapshots recorded so far
    pub fn recorded_steps(&self) -> usize {
        self.positions.len() / self.n_bodies
    }

    /// Whether the buffer holds every configured snapshot
    pub fn is_complete(&self) -> bool {
        self.recorded_steps() == self.capacity_steps
    }

    /// Position of `body` at `step`
    ///
    /// Panics if either index is out of range
    pub fn position(&self, body: usize, step: usize) -> NVec3 {
        assert!(body < self.n_bodies && step < self.recorded_steps());
        self.positions[step * self.n_bodies + body]
    }

    /// All recorded positions of `body`, in step order
    pub fn body_track(&self, body: usize) -> impl Iterator<Item = NVec3> + '_ {
        assert!(body < self.n_bodies);
        self.positions
            .iter()
            .skip(body)
            .step_by(self.n_bodies)
            .copied()
    }
}
