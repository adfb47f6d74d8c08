use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wrapped-SOL mint, the default liquidity target.
pub const WSOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Body of `POST /v1/liquidity/add`.
///
/// Amounts are solami quantities serialized as decimal strings, matching the
/// server's expectation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLiquidityRequest {
    pub amount: String,
    pub dst_lp_acc: Option<String>,
    pub lst_mint: String,
    pub priority_fee: PriorityFee,
    pub quoted_amount: String,
    pub signer: String,
    pub src_lst_acc: Option<String>,
}

impl AddLiquidityRequest {
    pub fn new(amount_solami: u64, lst_mint: &str, signer: &str) -> Self {
        Self {
            amount: amount_solami.to_string(),
            dst_lp_acc: None,
            lst_mint: lst_mint.to_string(),
            priority_fee: PriorityFee::default(),
            quoted_amount: amount_solami.to_string(),
            signer: signer.to_string(),
            src_lst_acc: None,
        }
    }
}

/// Priority-fee selector. The `Auto` variant's field names are snake_case on
/// the wire, unlike the camelCase request envelope around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PriorityFee {
    Auto {
        max_unit_price_micro_lamports: u64,
        unit_limit: u32,
    },
}

impl Default for PriorityFee {
    fn default() -> Self {
        PriorityFee::Auto {
            max_unit_price_micro_lamports: 3000,
            unit_limit: 300_000,
        }
    }
}

/// Response of `POST /v1/liquidity/add`: the partially-built transaction,
/// base64-encoded, plus whatever else the server includes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLiquidityResponse {
    pub tx: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
