use crate::core::error::ScanError;
use crate::core::utils::convert_to_ui_amount;
use crate::types::{Decimals, DecodedInitPayload, PoolMetrics};

use super::constants::WSOL_MINT;

/// `quote_raw * base_raw / 10^(base_decimals + quote_decimals)`, truncated
/// toward zero.
///
/// The product of two u64 always fits in u128. A scale that overflows u128
/// exceeds every possible product, so the quotient is exactly zero.
pub fn constant_product(amounts: &DecodedInitPayload, decimals: &Decimals) -> u128 {
    let product = u128::from(amounts.quote_amount_raw) * u128::from(amounts.base_amount_raw);
    let exponent = u32::from(decimals.base_decimals) + u32::from(decimals.quote_decimals);
    match 10u128.checked_pow(exponent) {
        Some(scale) => product / scale,
        None => 0,
    }
}

/// Quote per base in UI units.
pub fn launch_price(amounts: &DecodedInitPayload, decimals: &Decimals) -> Result<f64, ScanError> {
    if amounts.base_amount_raw == 0 {
        return Err(ScanError::PriceUndefined);
    }
    let quote = convert_to_ui_amount(amounts.quote_amount_raw, decimals.quote_decimals);
    let base = convert_to_ui_amount(amounts.base_amount_raw, decimals.base_decimals);
    Ok(quote / base)
}

pub fn compute_metrics(
    amounts: &DecodedInitPayload,
    decimals: &Decimals,
    quote_mint: &str,
) -> Result<PoolMetrics, ScanError> {
    let v = launch_price(amounts, decimals)?;
    let is_wsol_swap = quote_mint == WSOL_MINT;

    Ok(PoolMetrics {
        k: constant_product(amounts, decimals),
        v,
        is_wsol_swap,
        wrapped_sol_amount: is_wsol_swap.then_some(amounts.quote_amount_raw),
    })
}
