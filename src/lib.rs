pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::error::SimError;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, GRAVITATIONAL_CONSTANT};
pub use simulation::integrator::{euler_cromer_step, run_simulation};
pub use simulation::params::Parameters;
pub use simulation::trajectory::Trajectory;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
