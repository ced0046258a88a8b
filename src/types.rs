use std::fmt;

use serde::{Deserialize, Serialize};

/// Compiled instruction after ingestion: resolved program, account indexes
/// into the owning message's key list, and the decoded payload bytes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawInstruction {
    pub program_id: String,
    #[serde(default)]
    pub accounts: Vec<usize>,
    #[serde(default, with = "crate::core::utils::base64_data")]
    pub data: Vec<u8>,
}

/// Normalized transaction message consumed by the scanner.
///
/// `account_keys` holds static keys followed by lookup-table addresses
/// (writable, then readonly), so every index in `RawInstruction::accounts`
/// refers into this one flat list.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMessage {
    pub signature: String,
    #[serde(default)]
    pub slot: u64,
    pub account_keys: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<RawInstruction>,
}

/// Raw, undecimaled amounts carried by `initialize2`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecodedInitPayload {
    pub quote_amount_raw: u64,
    pub base_amount_raw: u64,
}

/// Which of the two known `initialize2` account orderings was seen.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountLayout {
    #[default]
    Standard,
    /// Clock sysvar sits in the authority slot; authority and open orders
    /// are shifted one position right.
    ClockShifted,
}

/// Named pool roles resolved from the instruction's account indexes.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRoleMap {
    pub amm_id: String,
    pub lp_mint: String,
    #[serde(rename = "ammAuthority")]
    pub authority: String,
    #[serde(rename = "ammOpenOrders")]
    pub open_orders: String,
    pub base_mint: String,
    pub quote_mint: String,
    pub base_vault: String,
    pub quote_vault: String,
    pub target_orders: String,
    pub market_program_id: String,
    pub market_id: String,
    pub market_base_vault: String,
    pub market_quote_vault: String,
    pub market_authority: String,
}

/// Order-book side accounts decoded from the market account.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketSideAccounts {
    #[serde(rename = "marketEventQueue")]
    pub event_queue: String,
    #[serde(rename = "marketBids")]
    pub bids: String,
    #[serde(rename = "marketAsks")]
    pub asks: String,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Decimals {
    pub base_decimals: u8,
    pub quote_decimals: u8,
}

/// Derived pool figures.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolMetrics {
    /// Decimal-adjusted constant product, truncated toward zero.
    pub k: u128,
    /// Launch price, quote per base, in UI units.
    pub v: f64,
    pub is_wsol_swap: bool,
    pub wrapped_sol_amount: Option<u64>,
}

/// Terminal record describing a freshly initialized pool.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolRecord {
    pub signature: String,
    pub program_id: String,
    #[serde(flatten)]
    pub accounts: AccountRoleMap,
    #[serde(flatten)]
    pub market: MarketSideAccounts,
    pub init_pc_amount: String,
    pub init_coin_amount: String,
    #[serde(flatten)]
    pub decimals: Decimals,
    #[serde(rename = "K")]
    pub k: String,
    #[serde(rename = "V")]
    pub v: String,
    pub fee: String,
    pub version: String,
    pub market_version: String,
    #[serde(rename = "isWSOLSwap")]
    pub is_wsol_swap: bool,
    #[serde(
        rename = "wrappedSOLAmount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wrapped_sol_amount: Option<String>,
}

/// Identity assigned by a `PoolStore`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted record together with the identity the store gave it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredPool {
    #[serde(rename = "tokenId")]
    pub id: RecordId,
    #[serde(flatten)]
    pub record: PoolRecord,
}
