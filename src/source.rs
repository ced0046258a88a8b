//! Capabilities the scanner needs from the chain.

use async_trait::async_trait;

use crate::core::error::SourceError;
use crate::types::TransactionMessage;

/// Read access to transactions, accounts and mint metadata.
///
/// `Ok(None)` means the item does not exist; transport failures are `Err`.
/// Timeouts and cancellation are the implementor's concern.
#[async_trait]
pub trait ChainSource: Send + Sync {
    async fn fetch_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<TransactionMessage>, SourceError>;

    async fn fetch_account(&self, address: &str) -> Result<Option<Vec<u8>>, SourceError>;

    async fn fetch_mint_decimals(&self, mint: &str) -> Result<u8, SourceError>;
}
