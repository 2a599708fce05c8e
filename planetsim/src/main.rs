use planetsim::{ScenarioConfig, Scenario};
use planetsim::{run_2d, bench_step};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless the path exists as given
    #[arg(short, long, default_value = "default.yaml")]
    file_name: String,

    /// Time the stepper instead of opening a window
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    run_2d(scenario);

    Ok(())
}
