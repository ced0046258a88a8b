use std::mem;

use crate::types::{AccountRoleMap, DecodedInitPayload};

use super::constants::WSOL_MINT;

/// Pool accounts and amounts after base/quote canonicalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedPair {
    pub roles: AccountRoleMap,
    pub amounts: DecodedInitPayload,
    /// True when wrapped SOL was on the coin side and the pair was flipped.
    pub flipped: bool,
}

/// Moves wrapped SOL to the quote side. Mint, vault and amount of each side
/// always swap together.
pub fn normalize_pair(mut roles: AccountRoleMap, mut amounts: DecodedInitPayload) -> NormalizedPair {
    let flipped = roles.base_mint == WSOL_MINT;
    if flipped {
        mem::swap(&mut roles.base_mint, &mut roles.quote_mint);
        mem::swap(&mut roles.base_vault, &mut roles.quote_vault);
        mem::swap(&mut amounts.base_amount_raw, &mut amounts.quote_amount_raw);
    }

    NormalizedPair {
        roles,
        amounts,
        flipped,
    }
}
