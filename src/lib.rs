pub mod client;
pub mod config;
pub mod error;
pub mod rest;
pub mod solana;
pub mod types;
pub mod utils;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use client::SanctumClient;
pub use config::{SanctumConfig, DEFAULT_API_URL, DEFAULT_EXTRA_API_URL};
pub use error::{Result, SanctumError};

// REST client
pub use rest::{Host, SanctumHttpClient};

// Core enums
pub use types::{ApyWindow, QuoteMode, SwapSource};

// Response envelopes
pub use types::{ApyResponse, PriceEntry, PriceResponse, SolValueResponse, TvlResponse};

// Aggregate info
pub use types::LstInfo;

// Liquidity
pub use types::{AddLiquidityRequest, AddLiquidityResponse, PriorityFee, WSOL_MINT};

// Unit conversion
pub use utils::{from_solami, to_solami, SOLAMI_PER_SOL};
