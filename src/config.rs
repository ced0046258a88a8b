use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::constants::dex_programs;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

pub const RPC_URL_ENV: &str = "SOLANA_RPC_URL";
pub const PROGRAM_ID_ENV: &str = "RAYDIUM_AMM_PROGRAM_ID";
pub const STORE_PATH_ENV: &str = "LP_STORE_PATH";

/// Commitment level requested from the RPC node.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

/// Scanner configuration: file values, then environment, then CLI flags.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScannerConfig {
    #[serde(default = "ScannerConfig::default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "ScannerConfig::default_amm_program_id")]
    pub amm_program_id: String,
    #[serde(default)]
    pub commitment: Commitment,
    #[serde(default = "ScannerConfig::default_store_path")]
    pub store_path: PathBuf,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            rpc_url: Self::default_rpc_url(),
            amm_program_id: Self::default_amm_program_id(),
            commitment: Commitment::default(),
            store_path: Self::default_store_path(),
        }
    }
}

impl ScannerConfig {
    fn default_rpc_url() -> String {
        DEFAULT_RPC_URL.to_string()
    }

    fn default_amm_program_id() -> String {
        dex_programs::RAYDIUM.to_string()
    }

    fn default_store_path() -> PathBuf {
        PathBuf::from("raydium_lp_pools.jsonl")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `SOLANA_RPC_URL`, `RAYDIUM_AMM_PROGRAM_ID` and `LP_STORE_PATH`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(rpc_url) = lookup(RPC_URL_ENV) {
            self.rpc_url = rpc_url;
        }
        if let Some(program_id) = lookup(PROGRAM_ID_ENV) {
            self.amm_program_id = program_id;
        }
        if let Some(store_path) = lookup(STORE_PATH_ENV) {
            self.store_path = PathBuf::from(store_path);
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
