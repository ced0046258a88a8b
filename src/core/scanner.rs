use std::time::Instant;

use crate::config::ScannerConfig;
use crate::core::error::ScanError;
use crate::protocols::raydium::constants::{
    MARKET_VERSION, POOL_FEE, POOL_VERSION, RAYDIUM_PROGRAM_NAME,
};
use crate::protocols::raydium::{
    compute_metrics, decode_init_payload, decode_market_sides, normalize_pair,
    resolve_account_roles, resolve_decimals, NormalizedPair,
};
use crate::source::ChainSource;
use crate::store::PoolStore;
use crate::types::{PoolRecord, RawInstruction, StoredPool, TransactionMessage};

/// First instruction addressed to `program_id`. Later matches are never
/// looked at.
pub fn find_pool_instruction<'a>(
    message: &'a TransactionMessage,
    program_id: &str,
) -> Option<&'a RawInstruction> {
    message
        .instructions
        .iter()
        .find(|ix| ix.program_id == program_id)
}

/// Pure part of the pipeline: locate, decode, resolve roles, normalize.
pub fn decode_pool_layout(
    message: &TransactionMessage,
    program_id: &str,
) -> Result<NormalizedPair, ScanError> {
    let instruction = find_pool_instruction(message, program_id).ok_or_else(|| {
        ScanError::NoMatchingInstruction {
            signature: message.signature.clone(),
            program_id: program_id.to_string(),
        }
    })?;

    let amounts = decode_init_payload(&instruction.data)?;
    let (roles, layout) = resolve_account_roles(&message.account_keys, &instruction.accounts)?;
    tracing::debug!(
        "🔎 initialize2 matched: signature={}, amm={}, layout={:?}",
        message.signature,
        roles.amm_id,
        layout
    );

    Ok(normalize_pair(roles, amounts))
}

/// Turns `initialize2` transactions into persisted `PoolRecord`s.
///
/// Holds no state between calls besides its collaborators, so one scanner
/// may serve concurrent signatures.
pub struct PoolScanner<S, P> {
    source: S,
    store: P,
    program_id: String,
}

impl<S, P> PoolScanner<S, P>
where
    S: ChainSource,
    P: PoolStore,
{
    pub fn new(source: S, store: P, config: &ScannerConfig) -> Self {
        Self {
            source,
            store,
            program_id: config.amm_program_id.clone(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Fetch, decode and persist. Any error means no record was stored.
    pub async fn process_signature(&self, signature: &str) -> Result<StoredPool, ScanError> {
        let record = self.decode_signature(signature).await?;

        let t0 = Instant::now();
        let id = self.store.persist(&record).await?;
        tracing::info!(
            "💾 persisted pool {} as #{} in {:.3}ms",
            record.accounts.amm_id,
            id,
            t0.elapsed().as_secs_f64() * 1000.0
        );

        Ok(StoredPool { id, record })
    }

    /// Fetch and decode without persisting.
    pub async fn decode_signature(&self, signature: &str) -> Result<PoolRecord, ScanError> {
        let t0 = Instant::now();
        let message = self
            .source
            .fetch_transaction(signature)
            .await?
            .ok_or_else(|| ScanError::TransactionNotFound {
                signature: signature.to_string(),
            })?;
        tracing::info!(
            "⏱️  fetch_transaction={:.3}ms, signature={}, instructions={}",
            t0.elapsed().as_secs_f64() * 1000.0,
            signature,
            message.instructions.len()
        );

        self.decode_message(&message).await
    }

    /// Runs the pipeline over an already fetched message.
    pub async fn decode_message(
        &self,
        message: &TransactionMessage,
    ) -> Result<PoolRecord, ScanError> {
        let method_start = Instant::now();
        tracing::info!(
            "📝 {} pool scan START: signature={}",
            RAYDIUM_PROGRAM_NAME,
            message.signature
        );

        let t0 = Instant::now();
        let NormalizedPair {
            roles,
            amounts,
            flipped,
        } = decode_pool_layout(message, &self.program_id)?;
        tracing::info!(
            "⏱️  [1/4] decode_pool_layout={:.3}ms, flipped={}",
            t0.elapsed().as_secs_f64() * 1000.0,
            flipped
        );

        let t1 = Instant::now();
        let market_data = self
            .source
            .fetch_account(&roles.market_id)
            .await?
            .ok_or_else(|| ScanError::MarketAccountNotFound {
                market: roles.market_id.clone(),
            })?;
        let market = decode_market_sides(&roles.market_id, &market_data)?;
        tracing::info!(
            "⏱️  [2/4] market_sides={:.3}ms, market={}, len={}",
            t1.elapsed().as_secs_f64() * 1000.0,
            roles.market_id,
            market_data.len()
        );

        let t2 = Instant::now();
        let decimals = resolve_decimals(&self.source, &roles.base_mint, &roles.quote_mint).await?;
        tracing::info!(
            "⏱️  [3/4] resolve_decimals={:.3}ms, base={}, quote={}",
            t2.elapsed().as_secs_f64() * 1000.0,
            decimals.base_decimals,
            decimals.quote_decimals
        );

        let t3 = Instant::now();
        let metrics = compute_metrics(&amounts, &decimals, &roles.quote_mint)?;
        tracing::info!(
            "⏱️  [4/4] compute_metrics={:.3}ms, K={}, V={}",
            t3.elapsed().as_secs_f64() * 1000.0,
            metrics.k,
            metrics.v
        );

        let record = PoolRecord {
            signature: message.signature.clone(),
            program_id: self.program_id.clone(),
            accounts: roles,
            market,
            init_pc_amount: amounts.quote_amount_raw.to_string(),
            init_coin_amount: amounts.base_amount_raw.to_string(),
            decimals,
            k: metrics.k.to_string(),
            v: metrics.v.to_string(),
            fee: POOL_FEE.to_string(),
            version: POOL_VERSION.to_string(),
            market_version: MARKET_VERSION.to_string(),
            is_wsol_swap: metrics.is_wsol_swap,
            wrapped_sol_amount: metrics.wrapped_sol_amount.map(|amount| amount.to_string()),
        };

        tracing::info!(
            "✅ {} pool scan END: total={:.3}ms, amm={}, base={}, quote={}",
            RAYDIUM_PROGRAM_NAME,
            method_start.elapsed().as_secs_f64() * 1000.0,
            record.accounts.amm_id,
            record.accounts.base_mint,
            record.accounts.quote_mint
        );

        Ok(record)
    }
}
