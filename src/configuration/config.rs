//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 2500.0              # fixed step size [s]
//!   steps: 50000            # number of integration steps
//!   g: 6.67430e-11          # optional, defaults to the SI constant
//!
//! bodies:
//!   - x: [ 1.0e10, 0.0, 0.0 ]
//!     v: [ 10.0, 1000.0, -150.0 ]
//!     m: 1.0e27
//!   - x: [ -1.0e10, 0.0, 0.0 ]
//!     v: [ -20.0, -1500.0, 100.0 ]
//!     m: 1.5e27
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation, validating shapes and value domains on the way.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,           // time step size [s]
    pub steps: usize,      // number of integration steps
    pub g: Option<f64>,    // gravitational constant, SI value when omitted
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector, three components [m]
    pub v: Vec<f64>, // Initial velocity vector, three components [m/s]
    pub m: f64,      // Mass of the body [kg]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}
