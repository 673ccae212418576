//! Hushh CLI: deploys the contracts and replays transaction scripts.

mod script;

use std::path::PathBuf;

use clap::Parser;
use hushh_ledger::{Ledger, LedgerConfig};
use hushh_types::{Address, SystemClock};
use hushh_utils::LogFormat;
use serde_json::json;

#[derive(Parser)]
#[command(name = "hushh", about = "Hushh contract harness")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "HUSHH_CONFIG")]
    config: Option<PathBuf>,

    /// Deploying account: a `0x` address or a dev account label such as "owner".
    #[arg(long, env = "HUSHH_DEPLOYER")]
    deployer: Option<String>,

    /// Earliest timestamp (Unix seconds) any transaction may carry.
    #[arg(long, env = "HUSHH_GENESIS_TIME")]
    genesis_time: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "HUSHH_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "HUSHH_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Deploy the contracts and print who owns them.
    Deploy,
    /// Deploy, then apply every transaction in a JSON script.
    Run {
        /// JSON array of `{ "caller": ..., "call": ... }` objects.
        script: PathBuf,

        /// Stop at the first rejected transaction.
        #[arg(long)]
        fail_fast: bool,
    },
    /// Print the score band table used by the proof registry.
    Bands,
}

fn parse_account(s: &str) -> anyhow::Result<Address> {
    if s.starts_with(Address::PREFIX) {
        Ok(s.parse()?)
    } else {
        Ok(Address::derive(s))
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<LedgerConfig> {
    let mut config = match &cli.config {
        Some(path) => LedgerConfig::from_toml_file(path)?,
        None => LedgerConfig::default(),
    };
    if let Some(deployer) = &cli.deployer {
        config.deployer = parse_account(deployer)?;
    }
    if let Some(genesis_time) = cli.genesis_time {
        config.genesis_time = Some(genesis_time);
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    hushh_utils::init_logging(config.log_format, &config.log_level)?;

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Deploy => {
            let ledger = Ledger::deploy(config, Box::new(SystemClock));
            for deployment in ledger.deployments() {
                println!("{}", serde_json::to_string(&deployment)?);
            }
        }
        Command::Run { script, fail_fast } => {
            let txs = script::load(&script)?;
            tracing::info!(transactions = txs.len(), "replaying {}", script.display());

            let mut ledger = Ledger::deploy(config, Box::new(SystemClock));
            let mut rejected = 0usize;
            for (index, tx) in txs.into_iter().enumerate() {
                match ledger.apply(tx) {
                    Ok(receipt) => println!("{}", serde_json::to_string(&receipt)?),
                    Err(e) => {
                        rejected += 1;
                        println!("{}", json!({ "index": index, "error": e.to_string() }));
                        if fail_fast {
                            anyhow::bail!("transaction #{index} rejected: {e}");
                        }
                    }
                }
            }
            tracing::info!(
                applied = ledger.sequence(),
                rejected,
                total_proofs = ledger.proofs().total_proofs(),
                total_identities = ledger.identity().total_identities(),
                total_supply = %ledger.coin().total_supply(),
                "script finished"
            );
        }
        Command::Bands => {
            for band in hushh_proofs::BANDS.iter().rev() {
                println!("{:>4}-{:<4}  {}", band.lower, band.upper, band.statement());
            }
        }
    }

    Ok(())
}
