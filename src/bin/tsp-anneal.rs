use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tsp_anneal::distance::DistanceMatrix;
use tsp_anneal::report::Report;
use tsp_anneal::sa::{AnnealingConfig, AnnealingOptimizer, ResultPolicy};
use tsp_anneal::tour::LabelStyle;

#[derive(Clone, Copy, ValueEnum)]
enum Labels {
    Letters,
    Indices,
}

impl From<Labels> for LabelStyle {
    fn from(labels: Labels) -> Self {
        match labels {
            Labels::Letters => LabelStyle::Letters,
            Labels::Indices => LabelStyle::Indices,
        }
    }
}

/// Approximate a shortest round trip through a distance matrix.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Distance matrix file, one whitespace-separated row per location
    matrix: PathBuf,

    /// Starting temperature
    #[arg(long, default_value_t = 10_000.0)]
    initial_temperature: f64,

    /// Per-pass temperature multiplier, in (0, 1)
    #[arg(long, default_value_t = 0.9999)]
    cooling_rate: f64,

    /// Stop once the temperature falls to this value
    #[arg(long, default_value_t = 0.00001)]
    stopping_temperature: f64,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// How locations are named in the route
    #[arg(long, value_enum, default_value_t = Labels::Letters)]
    labels: Labels,

    /// Unit of cost, singular
    #[arg(long, default_value = "mile")]
    unit: String,

    /// Report the cheapest tour seen instead of the last one accepted
    #[arg(long, default_value_t = false)]
    track_best: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> tsp_anneal::Result<()> {
    let matrix = DistanceMatrix::from_path(&args.matrix)?;
    info!(
        "Loaded {} locations from {}",
        matrix.size(),
        args.matrix.display()
    );

    let policy = if args.track_best {
        ResultPolicy::BestSeen
    } else {
        ResultPolicy::LastAccepted
    };
    let mut config = AnnealingConfig::default()
        .with_initial_temperature(args.initial_temperature)
        .with_cooling_rate(args.cooling_rate)
        .with_stopping_temperature(args.stopping_temperature)
        .with_result_policy(policy);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut optimizer = AnnealingOptimizer::new(config)?;
    optimizer.load(matrix);
    let result = optimizer.run()?;

    let report = Report::new(&result, optimizer.config())
        .with_labels(args.labels.into())
        .with_unit(&args.unit);
    println!("{report}");
    Ok(())
}

/// `error: <top>` followed by one `  caused by: <source>` line per cause.
fn error_chain(e: &dyn Error) -> String {
    let mut text = format!("error: {e}");
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    text
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            // Printed regardless of the log filter.
            eprintln!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
