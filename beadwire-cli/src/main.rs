use beadwire_core::{Simulation, SimulationConfig, TraceWriter};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "beadwire")]
#[command(about = "Beads on a circular wire - writes a per-frame CSV trace", long_about = None)]
struct Cli {
    /// Trace destination (stdout when omitted)
    output: Option<PathBuf>,

    /// Seed for the bead radii (taken from the clock when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(long)]
    frames: Option<u32>,

    /// Number of beads on the wire
    #[arg(long)]
    beads: Option<usize>,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("beadwire=info,beadwire_core=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SimulationConfig::default();
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if let Some(beads) = cli.beads {
        config.bead_count = beads;
    }

    let seed = match cli.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };
    tracing::info!(seed, "laying out beads");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = Simulation::from_config(config, &mut rng)?;

    // Open the destination before simulating so a bad path fails fast
    let out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("cannot open {}: {}", path.display(), e))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut writer = TraceWriter::new(out);
    sim.run(&mut writer)?;
    writer.finish()?;

    Ok(())
}
