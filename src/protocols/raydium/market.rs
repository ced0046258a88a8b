use crate::core::binary_reader::BinaryReader;
use crate::core::error::ScanError;
use crate::types::MarketSideAccounts;

use super::constants::market::{ASKS_OFFSET, BIDS_OFFSET, EVENT_QUEUE_OFFSET, MIN_DATA_LEN};

/// Decodes event queue, bids and asks from raw market account data.
pub fn decode_market_sides(market: &str, data: &[u8]) -> Result<MarketSideAccounts, ScanError> {
    if data.len() < MIN_DATA_LEN {
        return Err(ScanError::MarketAccountTooShort {
            market: market.to_string(),
            len: data.len(),
            min: MIN_DATA_LEN,
        });
    }

    Ok(MarketSideAccounts {
        event_queue: BinaryReader::at(data, EVENT_QUEUE_OFFSET)?.read_pubkey()?,
        bids: BinaryReader::at(data, BIDS_OFFSET)?.read_pubkey()?,
        asks: BinaryReader::at(data, ASKS_OFFSET)?.read_pubkey()?,
    })
}
