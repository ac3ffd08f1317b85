//! Core state types for the N-body simulation.
//!
//! Defines the `Body` and `System` structs using `NVec3`.
//! The system holds the list of bodies and the current simulation time `t`.
//! Masses are fixed at construction; positions and velocities are only
//! mutated by the integrator during a run.

use nalgebra::Vector3;

use crate::simulation::error::SimError;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position [m]
    pub v: NVec3, // velocity [m/s]
    pub m: f64, // mass [kg]
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

impl System {
    /// Build a system at `t = 0`.
    /// Rejects states the engine cannot run: fewer than two bodies,
    /// or any non-positive / non-finite mass.
    pub fn new(bodies: Vec<Body>) -> Result<Self, SimError> {
        if bodies.len() < 2 {
            return Err(SimError::invalid(format!(
                "need at least 2 bodies, got {}",
                bodies.len()
            )));
        }
        for (i, b) in bodies.iter().enumerate() {
            if !b.m.is_finite() || b.m <= 0.0 {
                return Err(SimError::invalid(format!(
                    "body {} has invalid mass {}",
                    i, b.m
                )));
            }
        }
        Ok(Self { bodies, t: 0.0 })
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Current positions in body-index order
    pub fn positions(&self) -> impl Iterator<Item = NVec3> + '_ {
        self.bodies.iter().map(|b| b.x)
    }

    /// Current velocities in body-index order
    pub fn velocities(&self) -> impl Iterator<Item = NVec3> + '_ {
        self.bodies.iter().map(|b| b.v)
    }
}
