use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use raydium_lp_decoder::config::{PROGRAM_ID_ENV, RPC_URL_ENV, STORE_PATH_ENV};
use raydium_lp_decoder::{
    JsonlPoolStore, PoolScanner, PoolStore, RecordId, RpcChainSource, ScannerConfig,
    TransactionMessage,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Decode Raydium pool initializations", long_about = None)]
struct Cli {
    /// JSON config file; env vars and flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// RPC endpoint URL
    #[arg(long, global = true, env = RPC_URL_ENV)]
    rpc_url: Option<String>,
    /// AMM program whose initialize2 instruction is decoded
    #[arg(long, global = true, env = PROGRAM_ID_ENV)]
    program_id: Option<String>,
    /// JSON-lines file receiving persisted records
    #[arg(long, global = true, env = STORE_PATH_ENV)]
    store: Option<PathBuf>,
    /// Log filter, e.g. `info` or `raydium_lp_decoder=debug`
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, decode and persist pool initializations
    Scan {
        /// Transaction signatures to process
        #[arg(long = "signature", required = true, num_args = 1..)]
        signatures: Vec<String>,
    },
    /// Fetch and decode a transaction without persisting
    Decode {
        #[arg(long)]
        signature: String,
    },
    /// Decode a transaction message stored as JSON, fetching market and mint data via RPC
    DecodeFile {
        #[arg(long)]
        file: PathBuf,
    },
    /// Print a persisted record
    Show {
        #[arg(long)]
        id: u64,
    },
}

impl Cli {
    fn scanner_config(&self) -> Result<ScannerConfig> {
        let mut config = match &self.config {
            Some(path) => ScannerConfig::from_file(path)?,
            None => ScannerConfig::default(),
        }
        .with_env_overrides();

        if let Some(rpc_url) = &self.rpc_url {
            config.rpc_url = rpc_url.clone();
        }
        if let Some(program_id) = &self.program_id {
            config.amm_program_id = program_id.clone();
        }
        if let Some(store) = &self.store {
            config.store_path = store.clone();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let config = cli.scanner_config()?;
    let store = JsonlPoolStore::open(&config.store_path)
        .await
        .with_context(|| format!("failed to open store {:?}", config.store_path))?;
    let scanner = PoolScanner::new(RpcChainSource::from_config(&config), store, &config);

    match cli.command {
        Commands::Scan { signatures } => {
            let mut failures = 0usize;
            for signature in &signatures {
                match scanner.process_signature(signature).await {
                    Ok(stored) => println!("{}", serde_json::to_string(&stored)?),
                    Err(err) => {
                        failures += 1;
                        tracing::warn!("⚠️  no record for {}: {}", signature, err);
                    }
                }
            }
            if failures == signatures.len() {
                bail!("no pool records produced for {} signature(s)", failures);
            }
        }
        Commands::Decode { signature } => {
            let record = scanner
                .decode_signature(&signature)
                .await
                .with_context(|| format!("failed to decode {signature}"))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::DecodeFile { file } => {
            let data = std::fs::read(&file).with_context(|| format!("failed to read {:?}", file))?;
            let message: TransactionMessage = serde_json::from_slice(&data)
                .with_context(|| format!("failed to parse JSON in {:?}", file))?;
            let record = scanner.decode_message(&message).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Show { id } => {
            let record = scanner
                .store()
                .find(RecordId(id))
                .await?
                .with_context(|| format!("no record #{id} in {:?}", config.store_path))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
