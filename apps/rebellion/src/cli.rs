//! Command-line arguments and how they override a loaded configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use rb_core::{LegitimacyMode, PopulationSize, RebellionConfig};

/// Output backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Sqlite,
    Parquet,
}

#[derive(Parser, Debug)]
#[command(
    name = "rebellion",
    version,
    about = "Run the civil-violence simulation on a toroidal grid"
)]
pub struct Cli {
    /// JSON file with a (possibly partial) run configuration.  Flags below
    /// override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory that receives the output files.
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Output backend.  `sqlite` and `parquet` need the matching Cargo feature.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Number of independent runs with seeds seed, seed+1, ...
    #[arg(long, default_value_t = 1)]
    pub replicates: usize,

    /// Side length of the grid.
    #[arg(long)]
    pub dimension: Option<u32>,

    /// Fraction of patches initially holding a cop, in (0, 1].
    #[arg(long, conflicts_with = "cops")]
    pub cop_density: Option<f64>,

    /// Absolute number of cops.
    #[arg(long)]
    pub cops: Option<u32>,

    /// Fraction of patches initially holding an agent, in (0, 1].
    #[arg(long, conflicts_with = "agents")]
    pub agent_density: Option<f64>,

    /// Absolute number of agents.
    #[arg(long)]
    pub agents: Option<u32>,

    #[arg(long)]
    pub vision: Option<u32>,

    #[arg(long)]
    pub max_jail_term: Option<u32>,

    /// Whether agents move (cops always do).
    #[arg(long)]
    pub movement: Option<bool>,

    #[arg(long)]
    pub government_legitimacy: Option<f64>,

    /// Weight legitimacy by the share of jailed agents in vision.
    #[arg(long)]
    pub individual_legitimacy: Option<bool>,

    #[arg(long)]
    pub threshold: Option<f64>,

    /// Risk-sensitivity constant of the arrest probability.
    #[arg(long)]
    pub k: Option<f64>,

    /// Ticks to run after the initial state.
    #[arg(long)]
    pub ticks: Option<u64>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Write an entity snapshot every N ticks (0 = never).
    #[arg(long)]
    pub snapshot_interval: Option<u64>,
}

impl Cli {
    /// The config file (or the defaults) with every given flag applied.
    pub fn resolve_config(&self) -> Result<RebellionConfig> {
        let base = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open config {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("cannot parse config {}", path.display()))?
            }
            None => RebellionConfig::default(),
        };
        Ok(self.apply_overrides(base))
    }

    pub fn apply_overrides(&self, mut config: RebellionConfig) -> RebellionConfig {
        if let Some(v) = self.dimension {
            config.dimension = v;
        }
        if let Some(d) = self.cop_density {
            config.cops = PopulationSize::Density(d);
        }
        if let Some(n) = self.cops {
            config.cops = PopulationSize::Count(n);
        }
        if let Some(d) = self.agent_density {
            config.agents = PopulationSize::Density(d);
        }
        if let Some(n) = self.agents {
            config.agents = PopulationSize::Count(n);
        }
        if let Some(v) = self.vision {
            config.vision = v;
        }
        if let Some(v) = self.max_jail_term {
            config.max_jail_term = v;
        }
        if let Some(v) = self.movement {
            config.movement = v;
        }
        if let Some(v) = self.government_legitimacy {
            config.government_legitimacy = v;
        }
        if let Some(weighted) = self.individual_legitimacy {
            config.legitimacy_mode = if weighted {
                LegitimacyMode::NeighborhoodWeighted
            } else {
                LegitimacyMode::Fixed
            };
        }
        if let Some(v) = self.threshold {
            config.threshold = v;
        }
        if let Some(v) = self.k {
            config.k = v;
        }
        if let Some(v) = self.ticks {
            config.total_ticks = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(v) = self.snapshot_interval {
            config.output_interval_ticks = v;
        }
        config
    }
}
