use anyhow::Result;
use raydium_lp_decoder::{
    Commitment, MemoryPoolStore, PoolScanner, RpcChainSource, ScannerConfig,
};

#[tokio::test]
#[ignore]
async fn fetch_and_decode_live_initialize2() -> Result<()> {
    let rpc_url = std::env::var("SOLANA_RPC_URL")
        .unwrap_or_else(|_| "https://api.mainnet-beta.solana.com".to_string());
    let Ok(signature) = std::env::var("RAYDIUM_INIT_SIGNATURE") else {
        println!("RAYDIUM_INIT_SIGNATURE not set, nothing to decode");
        return Ok(());
    };

    let config = ScannerConfig {
        rpc_url,
        commitment: Commitment::Confirmed,
        ..ScannerConfig::default()
    };
    let scanner = PoolScanner::new(
        RpcChainSource::from_config(&config),
        MemoryPoolStore::new(),
        &config,
    );

    let stored = scanner.process_signature(&signature).await?;
    println!(
        "Decoded pool: {}",
        serde_json::to_string_pretty(&stored)?
    );

    // Live pools vary; only check the invariants that hold for any of them.
    assert_eq!(stored.record.signature, signature);
    assert_eq!(stored.record.fee, "0.003");
    assert_ne!(stored.record.accounts.base_mint, stored.record.accounts.quote_mint);
    assert_eq!(
        stored.record.is_wsol_swap,
        stored.record.wrapped_sol_amount.is_some()
    );

    Ok(())
}
