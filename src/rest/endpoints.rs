use serde_json::Value;

use crate::error::{Result, SanctumError};
use crate::rest::{check_errs, Host, SanctumHttpClient};
use crate::types::*;
use crate::utils::{from_solami, round2};

impl SanctumHttpClient {
    // --- Infinity ---

    /// GET /v1/infinity/allocation/current - Current INF pool allocation.
    pub async fn get_infinity_infos(&self) -> Result<Value> {
        self.get(Host::Extra, "/v1/infinity/allocation/current", &[])
            .await
    }

    // --- LST stats ---

    /// GET /v1/apy/{latest,epochs,inception} - APY for an LST, as a
    /// percentage rounded to 2 decimals.
    pub async fn get_lst_apy(&self, lst: &str, window: ApyWindow) -> Result<f64> {
        let mut query = vec![("lst", lst)];
        let epochs_str;
        let path = match window {
            ApyWindow::Latest => "/v1/apy/latest",
            ApyWindow::Epochs(epochs) => {
                epochs_str = epochs.to_string();
                query.push(("epochs", epochs_str.as_str()));
                "/v1/apy/epochs"
            }
            ApyWindow::Inception => "/v1/apy/inception",
        };

        let resp: ApyResponse = self.get(Host::Extra, path, &query).await?;
        check_errs(&resp.errs)?;
        let apy = resp
            .apys
            .get(lst)
            .copied()
            .ok_or_else(|| SanctumError::LstNotFound(lst.to_string()))?;
        Ok(round2(apy * 100.0))
    }

    /// GET /v1/sol-value/current - SOL value of one LST token.
    pub async fn get_lst_sol_value(&self, lst: &str) -> Result<f64> {
        let resp: SolValueResponse = self
            .get(Host::Extra, "/v1/sol-value/current", &[("lst", lst)])
            .await?;
        check_errs(&resp.errs)?;
        let value = resp
            .sol_values
            .get(lst)
            .copied()
            .ok_or_else(|| SanctumError::LstNotFound(lst.to_string()))?;
        Ok(from_solami(value))
    }

    /// GET /v1/tvl/current - TVL of an LST in SOL, rounded to 2 decimals.
    pub async fn get_lst_tvl(&self, lst: &str) -> Result<f64> {
        let resp: TvlResponse = self
            .get(Host::Extra, "/v1/tvl/current", &[("lst", lst)])
            .await?;
        check_errs(&resp.errs)?;
        let tvl = resp
            .tvls
            .get(lst)
            .copied()
            .ok_or_else(|| SanctumError::LstNotFound(lst.to_string()))?;
        Ok(round2(from_solami(tvl)))
    }

    // --- Price + metadata ---

    /// GET /v1/price - Price of an LST mint in SOL.
    pub async fn get_price(&self, lst_mint: &str) -> Result<f64> {
        let resp: PriceResponse = self
            .get(Host::Primary, "/v1/price", &[("input", lst_mint)])
            .await?;
        let entry = resp
            .prices
            .first()
            .ok_or_else(|| SanctumError::LstNotFound(lst_mint.to_string()))?;
        Ok(from_solami(entry.amount))
    }

    /// GET /v1/metadata/{mint} - Token metadata, passed through as-is.
    pub async fn get_metadata(&self, lst_mint: &str) -> Result<Value> {
        self.get(Host::Primary, &format!("/v1/metadata/{lst_mint}"), &[])
            .await
    }

    // --- Swap ---

    /// GET /v1/swap/quote - Quote for a swap between two tokens. `amount`
    /// is in solami.
    pub async fn get_swap_quote(
        &self,
        input: &str,
        output_lst_mint: &str,
        amount: u64,
        mode: QuoteMode,
        swap_src: Option<SwapSource>,
    ) -> Result<Value> {
        let amount_str = amount.to_string();
        let mode_str = mode.to_string();
        let mut query = vec![
            ("input", input),
            ("outputLstMint", output_lst_mint),
            ("amount", amount_str.as_str()),
            ("mode", mode_str.as_str()),
        ];
        let src_str;
        if let Some(src) = swap_src {
            src_str = src.to_string();
            query.push(("swapSrc", src_str.as_str()));
        }
        self.get(Host::Primary, "/v1/swap/quote", &query).await
    }

    // --- Liquidity ---

    /// POST /v1/liquidity/add - Build an add-liquidity transaction. The
    /// response carries the base64-encoded transaction to sign and submit.
    pub async fn post_add_liquidity(
        &self,
        request: &AddLiquidityRequest,
    ) -> Result<AddLiquidityResponse> {
        self.post(Host::Primary, "/v1/liquidity/add", request).await
    }
}
