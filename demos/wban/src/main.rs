//! wban: energy-aware routing in a wireless body area network.
//!
//! Runs one scenario under three link cost models and compares them:
//!
//! - `energy-aware`: distance over the weaker endpoint's remaining energy,
//!   recomputed before every transmission;
//! - `aco` / `ga`: fixed pseudo-random link distances in `[10, 50]` and
//!   `[15, 45]`.
//!
//! Usage: `wban [scenario.json]`.  Without a scenario file, ten nodes are
//! scattered over a 10×10 field around a base station at its centre.
//! Per-model CSV output lands in `output/wban/<model>/`.

mod scenario;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use log::{LevelFilter, info, warn};
use simple_logger::SimpleLogger;

use wsn_core::SimConfig;
use wsn_output::{CsvWriter, SimOutputObserver};
use wsn_routing::{CostModel, EnergyAwareCost, UniformDistanceCost};
use wsn_sim::{SimBuilder, SimReport};

use scenario::Scenario;

// ── Constants ─────────────────────────────────────────────────────────────────

const NODE_COUNT: usize = 10;
const ROUNDS:     u64   = 20;
const SEED:       u64   = 42;
const OUTPUT_DIR: &str  = "output/wban";

// ── Running one model ─────────────────────────────────────────────────────────

fn run_model<C: CostModel + 'static>(
    name:     &str,
    cost:     C,
    scenario: &Scenario,
    out_root: &Path,
) -> Result<SimReport> {
    let dir = out_root.join(name);
    std::fs::create_dir_all(&dir)?;

    let mut sim = SimBuilder::from_inputs(
        scenario.config.clone(),
        scenario.positions(),
        scenario.energies(),
        scenario.base_station,
    )?
    .cost_model(cost)
    .build()?;

    let mut obs = SimOutputObserver::new(CsvWriter::new(&dir)?);
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        warn!("{name}: output error: {e}");
    }
    info!(
        "{name}: {} rounds in {:.3} s, output in {}",
        sim.round.0,
        t0.elapsed().as_secs_f64(),
        dir.display()
    );

    Ok(sim.into_report())
}

// ── Tables ────────────────────────────────────────────────────────────────────

fn print_consumption(models: &[(&str, SimReport)]) {
    println!("Energy consumed per round");
    print!("{:<7}", "Round");
    for (name, _) in models {
        print!(" {name:>14}");
    }
    println!();
    println!("{}", "-".repeat(7 + 15 * models.len()));

    let rounds = models.iter().map(|(_, r)| r.summaries.len()).max().unwrap_or(0);
    for round in 0..rounds {
        print!("{:<7}", round + 1);
        for (_, report) in models {
            let consumed = report.summaries.get(round).map_or(0.0, |s| s.energy_consumed);
            print!(" {consumed:>14.2}");
        }
        println!();
    }

    print!("{:<7}", "Total");
    for (_, report) in models {
        print!(" {:>14.2}", report.total_energy_consumed());
    }
    println!();
    println!();
}

fn print_batteries(models: &[(&str, SimReport)], node_count: usize) {
    println!("Final battery");
    print!("{:<7}", "Node");
    for (name, _) in models {
        print!(" {name:>14}");
    }
    println!();
    println!("{}", "-".repeat(7 + 15 * models.len()));

    for i in 0..node_count {
        print!("{i:<7}");
        for (_, report) in models {
            match report.final_status.get(i) {
                Some(s) if s.alive => print!(" {:>14.2}", s.energy),
                Some(_)            => print!(" {:>14}", "dead"),
                None               => print!(" {:>14}", "-"),
            }
        }
        println!();
    }

    print!("{:<7}", "Alive");
    for (_, report) in models {
        print!(" {:>14}", format!("{}/{node_count}", report.alive_count()));
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;

    let scenario = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("loading scenario from {}", path.display());
            Scenario::load(&path)?
        }
        None => {
            let config = SimConfig { rounds: ROUNDS, seed: SEED, ..SimConfig::default() };
            Scenario::random(NODE_COUNT, config)
        }
    };

    println!("=== wban: energy-aware sensor routing ===");
    println!(
        "Nodes: {}  |  Rounds: {}  |  Seed: {}  |  Base station: {}",
        scenario.nodes.len(),
        scenario.config.rounds,
        scenario.config.seed,
        scenario.base_station
    );
    println!();

    let out_root = Path::new(OUTPUT_DIR);
    let seed = scenario.config.seed;
    let models = [
        ("energy-aware", run_model("energy-aware", EnergyAwareCost, &scenario, out_root)?),
        ("aco", run_model("aco", UniformDistanceCost::aco(seed), &scenario, out_root)?),
        ("ga", run_model("ga", UniformDistanceCost::ga(seed), &scenario, out_root)?),
    ];
    println!();

    print_consumption(&models);
    print_batteries(&models, scenario.nodes.len());

    Ok(())
}
