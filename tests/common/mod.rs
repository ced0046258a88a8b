#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use raydium_lp_decoder::protocols::raydium::constants::RAYDIUM_AMM_PROGRAM_ID;
use raydium_lp_decoder::{ChainSource, RawInstruction, SourceError, TransactionMessage};

pub const COMPUTE_BUDGET: &str = "ComputeBudget111111111111111111111111111111";
pub const MARKET_ID: &str = "market_id";

/// In-memory chain keyed by signature / address / mint.
#[derive(Default)]
pub struct FixtureSource {
    pub transactions: HashMap<String, TransactionMessage>,
    pub accounts: HashMap<String, Vec<u8>>,
    pub decimals: HashMap<String, u8>,
    pub decimal_lookups: AtomicUsize,
}

impl FixtureSource {
    pub fn with_transaction(mut self, message: TransactionMessage) -> Self {
        self.transactions.insert(message.signature.clone(), message);
        self
    }

    pub fn with_account(mut self, address: &str, data: Vec<u8>) -> Self {
        self.accounts.insert(address.to_string(), data);
        self
    }

    pub fn with_decimals(mut self, mint: &str, decimals: u8) -> Self {
        self.decimals.insert(mint.to_string(), decimals);
        self
    }

    pub fn decimal_lookups(&self) -> usize {
        self.decimal_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainSource for FixtureSource {
    async fn fetch_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<TransactionMessage>, SourceError> {
        Ok(self.transactions.get(signature).cloned())
    }

    async fn fetch_account(&self, address: &str) -> Result<Option<Vec<u8>>, SourceError> {
        Ok(self.accounts.get(address).cloned())
    }

    async fn fetch_mint_decimals(&self, mint: &str) -> Result<u8, SourceError> {
        self.decimal_lookups.fetch_add(1, Ordering::SeqCst);
        self.decimals
            .get(mint)
            .copied()
            .ok_or_else(|| SourceError::InvalidAddress(mint.to_string()))
    }
}

/// Accounts in `initialize2` order; positions 8 and 9 hold the mints.
pub fn pool_accounts(base_mint: &str, quote_mint: &str) -> Vec<String> {
    [
        "token_program",
        "associated_token_program",
        "system_program",
        "rent_sysvar",
        "amm_id",
        "amm_authority",
        "amm_open_orders",
        "lp_mint",
        base_mint,
        quote_mint,
        "base_vault",
        "quote_vault",
        "amm_config",
        "target_orders",
        "fee_destination",
        "market_program",
        MARKET_ID,
        "user_wallet",
        "market_base_vault",
        "market_quote_vault",
        "market_authority",
    ]
    .iter()
    .map(|key| key.to_string())
    .collect()
}

pub fn init2_data(pc_amount: u64, coin_amount: u64) -> Vec<u8> {
    let mut data = vec![0u8; 26];
    data[0] = 1;
    data[1] = 254;
    data[2..10].copy_from_slice(&1_700_000_000u64.to_le_bytes());
    data[10..18].copy_from_slice(&pc_amount.to_le_bytes());
    data[18..26].copy_from_slice(&coin_amount.to_le_bytes());
    data
}

/// Market account with event queue, bids and asks filled with 1s, 2s and 3s.
pub fn market_data(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    for (offset, fill) in [(245usize, 1u8), (277, 2), (309, 3)] {
        let end = (offset + 32).min(len);
        if offset < end {
            data[offset..end].fill(fill);
        }
    }
    data
}

pub fn key_of(fill: u8) -> String {
    bs58::encode([fill; 32]).into_string()
}

/// Message with a payer, a compute-budget instruction and one
/// `initialize2` whose account indexes are shifted past the payer.
pub fn init_message(signature: &str, accounts: Vec<String>, data: Vec<u8>) -> TransactionMessage {
    let role_count = accounts.len();
    let mut account_keys = vec!["payer".to_string()];
    account_keys.extend(accounts);
    account_keys.push(COMPUTE_BUDGET.to_string());
    account_keys.push(RAYDIUM_AMM_PROGRAM_ID.to_string());

    TransactionMessage {
        signature: signature.to_string(),
        slot: 250_000_000,
        account_keys,
        instructions: vec![
            RawInstruction {
                program_id: COMPUTE_BUDGET.to_string(),
                accounts: Vec::new(),
                data: vec![2, 0x40, 0x0d, 0x03, 0x00],
            },
            RawInstruction {
                program_id: RAYDIUM_AMM_PROGRAM_ID.to_string(),
                accounts: (1..=role_count).collect(),
                data,
            },
        ],
    }
}
