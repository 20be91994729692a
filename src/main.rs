// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use qr_database::config::{OutputFormat, QrdbConfig};
use qr_database::core::error::Result;
use qr_database::core::reporter::Reporter;
use qr_database::core::{StaticRandom, WitnessDatabase};

/// Build a quadratic-residue witness database over a random prime modulus
#[derive(Parser, Debug)]
#[command(name = "qrdb", version)]
struct Cli {
    /// Bit length of the prime modulus
    #[arg(short, long)]
    bits: Option<u32>,

    /// Total witness-set size n (n-1 QRs plus one QNR)
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Seed for the random source (defaults to the clock)
    #[arg(short, long, env = "QRDB_SEED")]
    seed: Option<u64>,

    /// Configuration file (defaults to qrdb.toml / qrdb.yaml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<QrdbConfig> {
    let mut config = match &cli.config {
        Some(path) => QrdbConfig::load_from_file(path)?,
        None => QrdbConfig::load()?,
    };

    if let Some(bits) = cli.bits {
        config.bit_length = bits;
    }
    if let Some(size) = cli.size {
        config.database_size = size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }
    Ok(config)
}

fn run(config: &QrdbConfig) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StaticRandom::from_seed(seed),
        None => StaticRandom::from_time(),
    };
    info!(
        "Building database: {} bits, n = {}, seed = {}",
        config.bit_length,
        config.database_size,
        rng.seed()
    );

    let db = WitnessDatabase::build(config, &mut rng)?;

    let stdout = std::io::stdout();
    Reporter::write(&mut stdout.lock(), &db, config.output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = load_config(&cli);

    // Initialize the logger
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let env = Env::default()
        .filter_or("QRDB_LOG", level)
        .write_style_or("QRDB_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    match config.and_then(|config| run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
