//! Raydium AMM v4 `initialize2` decoding.

pub mod account_roles;
pub mod constants;
pub mod decimals;
pub mod init_payload;
pub mod market;
pub mod metrics;
pub mod pair;

pub use account_roles::resolve_account_roles;
pub use decimals::resolve_decimals;
pub use init_payload::decode_init_payload;
pub use market::decode_market_sides;
pub use metrics::{compute_metrics, constant_product, launch_price};
pub use pair::{normalize_pair, NormalizedPair};
