//! rebellion: command-line runner for the civil-violence simulation.
//!
//! Loads a configuration (JSON file and/or flags), runs one simulation or a
//! batch of seeded replicates, and writes parameters, per-tick summaries and
//! optional entity snapshots with the chosen output backend.
//!
//! ```text
//! rebellion --dimension 40 --ticks 200 --government-legitimacy 0.8
//! rebellion --config run.json --replicates 10 --output results/
//! RUST_LOG=rb_sim=debug rebellion --ticks 20
//! ```

mod cli;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};

use rb_behavior::RebellionRules;
use rb_core::{RebellionConfig, SimRng};
use rb_output::{CsvWriter, OutputWriter, SimOutputObserver, export_history};
use rb_sim::{SimBuilder, run_replicates};

use cli::{Cli, Format};


fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = cli.resolve_config()?;
    config.validate().context("invalid configuration")?;
    fs::create_dir_all(&cli.output)
        .with_context(|| format!("cannot create {}", cli.output.display()))?;

    let start = Instant::now();
    if cli.replicates > 1 {
        replicates(&config, cli.replicates, cli.format, &cli.output)?;
    } else {
        single_run(&config, cli.format, &cli.output)?;
    }
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// ── Runs ──────────────────────────────────────────────────────────────────────

/// One run with live output through [`SimOutputObserver`].
pub fn single_run(config: &RebellionConfig, format: Format, dir: &Path) -> Result<()> {
    match format {
        Format::Csv => run_with(config, CsvWriter::new(dir)?),
        #[cfg(feature = "sqlite")]
        Format::Sqlite => run_with(config, rb_output::SqliteWriter::new(dir)?),
        #[cfg(feature = "parquet")]
        Format::Parquet => run_with(config, rb_output::ParquetWriter::new(dir)?),
        #[allow(unreachable_patterns)]
        other => bail!("this binary was built without the `{other:?}` output feature"),
    }
}

fn run_with<W: OutputWriter>(config: &RebellionConfig, writer: W) -> Result<()> {
    let rules = RebellionRules::from_config(config);
    let mut sim = SimBuilder::new(config.clone(), rules).build()?;
    let mut observer = SimOutputObserver::new(writer, config);
    sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing output");
    }

    let last = sim.summary();
    println!(
        "tick {}: {} quiet, {} jailed, {} rebelling",
        last.tick.0, last.quiet, last.jailed, last.rebelling
    );
    Ok(())
}

/// `count` independent runs, one output directory per seed.
pub fn replicates(config: &RebellionConfig, count: usize, format: Format, dir: &Path) -> Result<()> {
    let rules = RebellionRules::from_config(config);
    let seeds = SimRng::replicate_seeds(config.seed, count);
    let results = run_replicates(config, &rules, &seeds)?;

    for replicate in &results {
        let run_dir = dir.join(format!("seed-{}", replicate.seed));
        fs::create_dir_all(&run_dir)
            .with_context(|| format!("cannot create {}", run_dir.display()))?;
        let run_config = RebellionConfig { seed: replicate.seed, ..config.clone() };
        export(&run_config, &replicate.history, format, &run_dir)
            .with_context(|| format!("writing replicate {}", replicate.seed))?;

        match replicate.history.last() {
            Some(last) => println!(
                "seed {}: {} quiet, {} jailed, {} rebelling",
                replicate.seed, last.quiet, last.jailed, last.rebelling
            ),
            None => warn!(seed = replicate.seed, "replicate produced no summaries"),
        }
    }
    Ok(())
}

fn export(
    config:  &RebellionConfig,
    history: &[rb_sim::TickSummary],
    format:  Format,
    dir:     &Path,
) -> Result<()> {
    match format {
        Format::Csv => export_history(&mut CsvWriter::new(dir)?, config, history)?,
        #[cfg(feature = "sqlite")]
        Format::Sqlite => export_history(&mut rb_output::SqliteWriter::new(dir)?, config, history)?,
        #[cfg(feature = "parquet")]
        Format::Parquet => export_history(&mut rb_output::ParquetWriter::new(dir)?, config, history)?,
        #[allow(unreachable_patterns)]
        other => bail!("this binary was built without the `{other:?}` output feature"),
    }
    Ok(())
}
