pub use crate::core::constants::dex_programs::RAYDIUM as RAYDIUM_AMM_PROGRAM_ID;
pub use crate::core::constants::sysvars::CLOCK as CLOCK_SYSVAR;

pub const RAYDIUM_PROGRAM_NAME: &str = "Raydium";

pub const WSOL_MINT: &str = crate::core::constants::TOKENS.SOL;

pub const POOL_FEE: &str = "0.003";
pub const POOL_VERSION: &str = "V2";
pub const MARKET_VERSION: &str = "V2";

pub mod initialize2 {
    /// u64 LE, pc (quote) side.
    pub const INIT_PC_AMOUNT_OFFSET: usize = 10;
    /// u64 LE, coin (base) side.
    pub const INIT_COIN_AMOUNT_OFFSET: usize = 18;
    pub const MIN_DATA_LEN: usize = 26;

    /// Highest position read from the instruction's account index list.
    pub const MAX_ACCOUNT_POSITION: usize = 20;

    pub mod accounts {
        pub const AMM_ID: usize = 4;
        pub const AUTHORITY: usize = 5;
        pub const OPEN_ORDERS: usize = 6;
        pub const LP_MINT: usize = 7;
        pub const BASE_MINT: usize = 8;
        pub const QUOTE_MINT: usize = 9;
        pub const BASE_VAULT: usize = 10;
        pub const QUOTE_VAULT: usize = 11;
        pub const TARGET_ORDERS: usize = 13;
        pub const MARKET_PROGRAM_ID: usize = 15;
        pub const MARKET_ID: usize = 16;
        pub const MARKET_BASE_VAULT: usize = 18;
        pub const MARKET_QUOTE_VAULT: usize = 19;
        pub const MARKET_AUTHORITY: usize = 20;
    }
}

pub mod market {
    pub const EVENT_QUEUE_OFFSET: usize = 245;
    pub const BIDS_OFFSET: usize = 277;
    pub const ASKS_OFFSET: usize = 309;
    pub const MIN_DATA_LEN: usize = 341;
}
