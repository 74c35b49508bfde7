use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use goodreads_faker::{GenerateOptions, GenerationError, GoodreadsGenerator, logging};

/// A fake data generator for Goodreads reviews.
#[derive(Parser, Debug)]
#[command(name = "goodreads-faker", version, about)]
struct Cli {
    /// Number of records to generate.
    #[arg(short = 'n', long = "num_records")]
    num_records: i64,
    /// Output directory for the generated tables.
    #[arg(long)]
    base_dir: Option<PathBuf>,
    /// Fixed RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Directory for the info.log file sink.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        error!(error = %err, "generation failed");
        eprintln!("error: {err}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), GenerationError> {
    logging::init_logging(&cli.log_dir)?;

    let mut options = GenerateOptions::default();
    if let Some(base_dir) = cli.base_dir {
        options.base_dir = base_dir;
    }
    options.seed = cli.seed;

    let mut generator = GoodreadsGenerator::new(options)?;
    generator.generate(cli.num_records)?;

    Ok(())
}
