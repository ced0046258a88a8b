use crate::core::error::ScanError;
use crate::source::ChainSource;
use crate::types::Decimals;

/// Looks up both mints' decimals concurrently. The first failure wins; no
/// partial result is returned.
pub async fn resolve_decimals<S>(
    source: &S,
    base_mint: &str,
    quote_mint: &str,
) -> Result<Decimals, ScanError>
where
    S: ChainSource + ?Sized,
{
    let (base_decimals, quote_decimals) = tokio::try_join!(
        mint_decimals(source, base_mint),
        mint_decimals(source, quote_mint),
    )?;

    Ok(Decimals {
        base_decimals,
        quote_decimals,
    })
}

async fn mint_decimals<S>(source: &S, mint: &str) -> Result<u8, ScanError>
where
    S: ChainSource + ?Sized,
{
    source
        .fetch_mint_decimals(mint)
        .await
        .map_err(|source| ScanError::DecimalsLookupFailed {
            mint: mint.to_string(),
            source,
        })
}
