use solana_client::client_error::ClientError;
use thiserror::Error;

use super::binary_reader::BinaryReaderError;

/// Terminal outcomes of scanning one transaction for a pool initialization.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("transaction {signature} not found")]
    TransactionNotFound { signature: String },
    #[error("no instruction for program {program_id} in transaction {signature}")]
    NoMatchingInstruction {
        signature: String,
        program_id: String,
    },
    #[error("malformed initialize2 payload: {len} bytes, need at least {min}")]
    MalformedPayload { len: usize, min: usize },
    #[error("account slot {position} unresolved (index list len {indexes_len}, account list len {accounts_len})")]
    AccountIndexOutOfRange {
        position: usize,
        indexes_len: usize,
        accounts_len: usize,
    },
    #[error("market account {market} not found")]
    MarketAccountNotFound { market: String },
    #[error("market account {market} too short: {len} bytes, need at least {min}")]
    MarketAccountTooShort {
        market: String,
        len: usize,
        min: usize,
    },
    #[error("decimals lookup failed for mint {mint}: {source}")]
    DecimalsLookupFailed {
        mint: String,
        #[source]
        source: SourceError,
    },
    #[error("launch price undefined: base reserve is zero")]
    PriceUndefined,
    #[error("binary reader error: {0}")]
    BinaryReader(#[from] BinaryReaderError),
    #[error("chain source error: {0}")]
    Source(#[from] SourceError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ScanError {
    pub fn malformed_payload(len: usize, min: usize) -> Self {
        Self::MalformedPayload { len, min }
    }
}

/// Failures of the network collaborator, kept apart from "absent" results.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("rpc {method} failed: {source}")]
    Rpc {
        method: &'static str,
        #[source]
        source: Box<ClientError>,
    },
    #[error("unexpected rpc payload: {0}")]
    UnexpectedPayload(String),
}

impl SourceError {
    pub fn rpc(method: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |err| Self::Rpc {
            method,
            source: Box::new(err),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedPayload(message.into())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to (de)serialize record: {0}")]
    Json(#[from] serde_json::Error),
}
