use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_cromer_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build a deterministic System of size `n`, no rand needed
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        bodies.push(Body {
            x,
            v: NVec3::zeros(),
            m: 1.0,
        });
    }

    System { bodies, t: 0.0 }
}

fn make_params() -> Parameters {
    Parameters {
        dt: 0.001,
        steps: 1,
        g: 0.1,
    }
}

/// Time a single direct gravity evaluation for a range of system sizes
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let params = make_params();
        let sys = make_system(n);

        let gravity = NewtonianGravity { g: params.g };

        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.acceleration(0, &sys, &mut out).expect("bench bodies are distinct");

        let t0 = Instant::now();
        gravity.acceleration(0, &sys, &mut out).expect("bench bodies are distinct");
        let dt_eval = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity eval = {dt_eval:8.6} s");
    }
}

/// Time the full Euler–Cromer step for a range of system sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (200..=12800).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to avoid minutes of runtime
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys = make_system(n);
        let params = make_params();
        let forces = AccelSet::new().with(NewtonianGravity { g: params.g });

        // Warm-up one step
        euler_cromer_step(&mut sys, &forces, &params, 0).expect("bench bodies are distinct");

        let t0 = Instant::now();
        for step in 0..steps {
            euler_cromer_step(&mut sys, &forces, &params, step).expect("bench bodies are distinct");
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms_step = elapsed / steps as f64;

        println!("{n},{ms_step:.6}");
    }
}
