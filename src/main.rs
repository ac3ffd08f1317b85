use gravsim::{Scenario, ScenarioConfig};
use gravsim::{bench_gravity, bench_step_curve};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Run the throughput benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    info!(
        "running {} bodies for {} steps, dt = {} s",
        scenario.system.len(),
        scenario.parameters.steps,
        scenario.parameters.dt
    );

    let t0 = Instant::now();
    let trajectory = scenario.run()?;
    let elapsed = t0.elapsed().as_secs_f64();

    info!("finished in {elapsed:.3} s");

    println!(
        "recorded {} steps x {} bodies, final t = {:.6e} s",
        trajectory.recorded_steps(),
        trajectory.n_bodies(),
        scenario.system.t
    );
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        println!(
            "body {i}: x = [{:.6e}, {:.6e}, {:.6e}] m, v = [{:.6e}, {:.6e}, {:.6e}] m/s",
            b.x.x, b.x.y, b.x.z, b.v.x, b.v.y, b.v.z
        );
    }

    Ok(())
}
