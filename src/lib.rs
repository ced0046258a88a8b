//! Decodes Raydium AMM `initialize2` transactions into normalized pool records.

pub mod config;
pub mod core;
pub mod protocols;
pub mod rpc;
pub mod source;
pub mod store;
pub mod types;

pub use crate::config::{Commitment, ScannerConfig};
pub use crate::core::error::{ScanError, SourceError, StoreError};
pub use crate::core::scanner::{decode_pool_layout, find_pool_instruction, PoolScanner};
pub use crate::rpc::RpcChainSource;
pub use crate::source::ChainSource;
pub use crate::store::{JsonlPoolStore, MemoryPoolStore, PoolStore};
pub use crate::types::{
    AccountLayout, AccountRoleMap, Decimals, DecodedInitPayload, MarketSideAccounts, PoolMetrics,
    PoolRecord, RawInstruction, RecordId, StoredPool, TransactionMessage,
};
