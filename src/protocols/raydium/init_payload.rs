use crate::core::binary_reader::BinaryReader;
use crate::core::error::ScanError;
use crate::types::DecodedInitPayload;

use super::constants::initialize2::{
    INIT_COIN_AMOUNT_OFFSET, INIT_PC_AMOUNT_OFFSET, MIN_DATA_LEN,
};

/// Reads the pc (quote) and coin (base) amounts out of an `initialize2`
/// payload.
pub fn decode_init_payload(data: &[u8]) -> Result<DecodedInitPayload, ScanError> {
    if data.len() < MIN_DATA_LEN {
        return Err(ScanError::malformed_payload(data.len(), MIN_DATA_LEN));
    }

    let quote_amount_raw = BinaryReader::at(data, INIT_PC_AMOUNT_OFFSET)?.read_u64()?;
    let base_amount_raw = BinaryReader::at(data, INIT_COIN_AMOUNT_OFFSET)?.read_u64()?;

    Ok(DecodedInitPayload {
        quote_amount_raw,
        base_amount_raw,
    })
}
