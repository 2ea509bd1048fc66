use anyhow::{Context, Result};
use antpath_core::config::SimConfig;
use antpath_core::field::Field;
use antpath_lib::app::Simulation;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Reconstructs a field from a scan log and searches it with an ant colony.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scan log, one scan per line
    data: PathBuf,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Upper bound on the agent population
    #[arg(long)]
    max_agents: Option<usize>,

    /// Agents present at the first cycle
    #[arg(long)]
    start_agents: Option<usize>,

    /// Number of cycles to run
    #[arg(short = 'n', long)]
    cycles: Option<u64>,

    /// Recently visited cells each agent avoids
    #[arg(long)]
    memory: Option<usize>,

    /// Record a snapshot every N cycles
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Field cache, reused while newer than the scan log
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Write the shortest route as x,y lines
    #[arg(long)]
    route_out: Option<PathBuf>,

    /// Write the final ASCII map
    #[arg(long)]
    map_out: Option<PathBuf>,

    /// Write progress snapshots as JSON
    #[arg(long)]
    snapshots_out: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut SimConfig) {
        if let Some(width) = self.width {
            config.field.width = width;
        }
        if let Some(height) = self.height {
            config.field.height = height;
        }
        if let Some(max) = self.max_agents {
            config.agents.max_agents = max;
        }
        if let Some(start) = self.start_agents {
            config.agents.starting_agents = start;
        }
        if let Some(cycles) = self.cycles {
            config.run.cycles = cycles;
        }
        if let Some(memory) = self.memory {
            config.agents.memory_length = memory;
        }
        if self.snapshot_interval.is_some() {
            config.run.snapshot_interval = self.snapshot_interval;
        }
        if self.seed.is_some() {
            config.agents.seed = self.seed;
        }
    }
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<SimConfig>(&content)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn load_field(args: &Args, config: &SimConfig) -> antpath_io::Result<Field> {
    let (width, height) = (config.field.width, config.field.height);
    let delimiters = &config.field.delimiters;
    match &args.cache {
        Some(cache) => {
            antpath_io::load_field_cached(&args.data, cache, width, height, delimiters)
        }
        None => antpath_io::load_field(&args.data, width, height, delimiters),
    }
}

fn write_outputs(args: &Args, sim: &Simulation) -> Result<()> {
    let field = sim.field();
    if let Some(path) = &args.route_out {
        antpath_io::write_route_csv(field.shortest_route(), field.cell_size(), path)?;
        tracing::info!(path = %path.display(), "Route written");
    }
    if let Some(path) = &args.map_out {
        write_text(path, &sim.render())?;
        tracing::info!(path = %path.display(), "Map written");
    }
    if let Some(path) = &args.snapshots_out {
        antpath_io::write_snapshots(sim.snapshots(), path)?;
        tracing::info!(path = %path.display(), snapshots = sim.snapshots().len(), "Snapshots written");
    }
    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    antpath_core::init_logging();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(1);
        }
    };

    let field = match load_field(&args, &config) {
        Ok(field) => field,
        Err(e) => {
            eprintln!("Could not build field from {}: {e}", args.data.display());
            return ExitCode::from(2);
        }
    };

    let mut sim = match Simulation::new(field, config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(1);
        }
    };
    let summary = sim.run();

    if let Err(e) = write_outputs(&args, &sim) {
        eprintln!("Output error: {e:#}");
        return ExitCode::from(1);
    }

    println!(
        "{} cycles, {} agents, {} successes, shortest route {} cells ({:.2?})",
        summary.cycles, summary.agents, summary.successes, summary.route_length, summary.elapsed
    );
    ExitCode::SUCCESS
}
