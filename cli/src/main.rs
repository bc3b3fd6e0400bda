mod replay;
mod trace;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::Parser;
use touch_gesture::GestureConfig;
use tracing_subscriber::EnvFilter;

use crate::replay::{ReplayError, Replayer};

#[derive(Parser, Debug)]
#[command(name = "touch-replay", about = "Replay a JSON-lines touch trace through the gesture engine")]
struct Cli {
    #[arg(long, default_value = "-", help = "Trace file path, or - for stdin")]
    input: String,

    #[arg(long, help = "Zoom threshold as a fraction of finger distance (default 0.1, or TOUCH_SCALE_THRESHOLD)")]
    scale_threshold: Option<f64>,

    #[arg(long, help = "Pan threshold in surface units (default 5, or TOUCH_PAN_THRESHOLD)")]
    pan_threshold: Option<f64>,

    #[arg(long, default_value_t = false, help = "Pretty-print each notification")]
    pretty: bool,

    #[arg(short, long, default_value_t = false, help = "Log engine lifecycle at debug level")]
    verbose: bool,
}

fn main() -> Result<(), ReplayError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .init();

    let mut config = GestureConfig::from_env();
    if let Some(scale) = cli.scale_threshold {
        config.scale_threshold = scale;
    }
    if let Some(pan) = cli.pan_threshold {
        config.pan_threshold = pan;
    }

    let reader: Box<dyn BufRead> = if cli.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&cli.input).map_err(|source| ReplayError::Open { path: cli.input.clone(), source })?;
        Box::new(BufReader::new(file))
    };

    let mut replayer = Replayer::new(config, cli.pretty)?;
    let summary = replayer.run(reader, io::stdout().lock())?;

    eprintln!(
        "replay complete: events={} notifications={} skipped={}",
        summary.events, summary.notifications, summary.skipped
    );
    Ok(())
}
