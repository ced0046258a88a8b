pub mod dex_programs {
    pub const RAYDIUM: &str = "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8";
}

pub mod sysvars {
    pub const CLOCK: &str = "SysvarC1ock11111111111111111111111111111111";
}

#[allow(non_snake_case)]
pub struct Tokens {
    pub SOL: &'static str,
    pub USDC: &'static str,
}

pub const TOKENS: Tokens = Tokens {
    SOL: "So11111111111111111111111111111111111111112",
    USDC: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
};
