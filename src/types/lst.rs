use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// APY query response: per-LST annualized yield as a fraction (0.0734 = 7.34%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApyResponse {
    pub apys: HashMap<String, f64>,
    #[serde(default)]
    pub errs: HashMap<String, Value>,
}

/// SOL-value query response: per-LST value of one token, in solami.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolValueResponse {
    pub sol_values: HashMap<String, u64>,
    #[serde(default)]
    pub errs: HashMap<String, Value>,
}

/// TVL query response: per-LST total value locked, in solami.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvlResponse {
    pub tvls: HashMap<String, u64>,
    #[serde(default)]
    pub errs: HashMap<String, Value>,
}

/// Price query response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    pub prices: Vec<PriceEntry>,
}

/// A single price entry. The server emits `amount` either as a JSON number
/// or as a decimal string; both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEntry {
    #[serde(default)]
    pub mint: Option<String>,
    #[serde(deserialize_with = "solami_amount")]
    pub amount: u64,
}

/// Merged per-LST summary returned by the aggregate info accessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LstInfo {
    /// APY as a percentage, rounded to 2 decimals.
    pub apy: f64,
    /// SOL value of one token.
    pub sol_value: f64,
    /// Total value locked in SOL, rounded to 2 decimals.
    pub tvl: f64,
}

fn solami_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrU64 {
        Num(u64),
        Str(String),
    }

    match StringOrU64::deserialize(deserializer)? {
        StringOrU64::Num(n) => Ok(n),
        StringOrU64::Str(s) => s.parse::<u64>().map_err(serde::de::Error::custom),
    }
}
