//! Scenario input: node layout, base station and run configuration.
//!
//! A scenario file is JSON:
//!
//! ```json
//! {
//!   "config": { "rounds": 30, "seed": 7, "death_threshold": 5.0 },
//!   "base_station": { "x": 5.0, "y": 5.0 },
//!   "nodes": [
//!     { "position": { "x": 1.0, "y": 2.0 }, "energy": 12.0 },
//!     { "position": { "x": 8.5, "y": 3.0 }, "energy": 18.0 }
//!   ]
//! }
//! ```
//!
//! Omitted `config` fields take their defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wsn_core::{Interval, Point, SimConfig, SimRng};

/// Initial energies of generated nodes.
const ENERGY_RANGE: Interval = Interval::new(5.0, 20.0);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeSpec {
    pub position: Point,
    pub energy:   f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config:       SimConfig,
    pub base_station: Point,
    pub nodes:        Vec<NodeSpec>,
}

impl Scenario {
    /// `count` nodes placed uniformly inside `config.bounds` with energies
    /// in `[5, 20]`, base station at the centre of the field.
    pub fn random(count: usize, config: SimConfig) -> Self {
        let mut rng = SimRng::new(config.seed).child(count as u64);
        let b = config.bounds;
        let xs = Interval::new(b.min.x, b.max.x);
        let ys = Interval::new(b.min.y, b.max.y);

        let nodes = (0..count)
            .map(|_| NodeSpec {
                position: Point::new(xs.sample_sim(&mut rng), ys.sample_sim(&mut rng)),
                energy:   ENERGY_RANGE.sample_sim(&mut rng),
            })
            .collect();
        let base_station = Point::new((b.min.x + b.max.x) / 2.0, (b.min.y + b.max.y) / 2.0);

        Self { config, base_station, nodes }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn positions(&self) -> Vec<Point> {
        self.nodes.iter().map(|n| n.position).collect()
    }

    pub fn energies(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.energy).collect()
    }
}
