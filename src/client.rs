use serde_json::Value;
use solana_client::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer as _;

use crate::config::SanctumConfig;
use crate::error::{Result, SanctumError};
use crate::rest::SanctumHttpClient;
use crate::solana;
use crate::types::*;
use crate::utils::to_solami;

/// Main client for the Sanctum Trade API and the Solana transaction relay.
///
/// The HTTP session and the optional wallet are built once at construction
/// and read-only afterwards.
pub struct SanctumClient {
    /// HTTP client for both API hosts.
    pub http_client: SanctumHttpClient,
    wallet: Option<Wallet>,
}

struct Wallet {
    keypair: Keypair,
    rpc_client: RpcClient,
}

impl SanctumClient {
    /// Create a new Sanctum client. A wallet (keypair + RPC client) is set
    /// up only when the configuration carries a non-empty private key.
    pub fn new(config: SanctumConfig) -> Result<Self> {
        let http_client = SanctumHttpClient::new(
            &config.api_key,
            &config.api_url,
            &config.extra_api_url,
            config.verbose_logging,
        )?;

        let wallet = match config.private_key.as_deref() {
            Some(key) if !key.is_empty() => Some(Wallet {
                keypair: solana::keypair_from_base58_secret(key)?,
                rpc_client: solana::create_rpc_client(config.rpc_url()),
            }),
            _ => None,
        };

        Ok(Self {
            http_client,
            wallet,
        })
    }

    /// Public key of the configured wallet, if any.
    pub fn pubkey(&self) -> Option<Pubkey> {
        self.wallet.as_ref().map(|w| w.keypair.pubkey())
    }

    fn wallet(&self) -> Result<&Wallet> {
        self.wallet.as_ref().ok_or(SanctumError::NoWallet)
    }

    // --- REST delegates ---

    /// Get the main information about the INF token.
    pub async fn get_infinity_infos(&self) -> Result<Value> {
        self.http_client.get_infinity_infos().await
    }

    /// Get the APY of an LST as a percentage, rounded to 2 decimals.
    pub async fn get_lst_apy(&self, lst: &str, window: ApyWindow) -> Result<f64> {
        self.http_client.get_lst_apy(lst, window).await
    }

    /// Get the SOL value of one LST token.
    pub async fn get_lst_sol_value(&self, lst: &str) -> Result<f64> {
        self.http_client.get_lst_sol_value(lst).await
    }

    /// Get the TVL of an LST in SOL, rounded to 2 decimals.
    pub async fn get_lst_tvl(&self, lst: &str) -> Result<f64> {
        self.http_client.get_lst_tvl(lst).await
    }

    /// Get the price of an LST mint in SOL.
    pub async fn get_price(&self, lst_mint: &str) -> Result<f64> {
        self.http_client.get_price(lst_mint).await
    }

    /// Get the metadata of an LST mint.
    pub async fn get_metadata(&self, lst_mint: &str) -> Result<Value> {
        self.http_client.get_metadata(lst_mint).await
    }

    /// Get a swap quote. `amount` is the decimal amount of the input token,
    /// converted to solami before the query.
    pub async fn get_quote(
        &self,
        from_token: &str,
        to_token: &str,
        amount: f64,
        mode: QuoteMode,
        swap_src: Option<SwapSource>,
    ) -> Result<Value> {
        self.http_client
            .get_swap_quote(from_token, to_token, to_solami(amount), mode, swap_src)
            .await
    }

    // --- Aggregates ---

    /// Get the latest APY, SOL value and TVL of an LST in one merged result.
    ///
    /// Three sequential calls; the first failure aborts the whole operation.
    pub async fn get_lst_infos(&self, lst: &str) -> Result<LstInfo> {
        let apy = self.get_lst_apy(lst, ApyWindow::Latest).await?;
        let sol_value = self.get_lst_sol_value(lst).await?;
        let tvl = self.get_lst_tvl(lst).await?;
        Ok(LstInfo {
            apy,
            sol_value,
            tvl,
        })
    }

    // --- Liquidity + transaction relay ---

    /// Build an add-liquidity transaction for `amount` SOL worth of the
    /// given LST mint. Requires a wallet; the returned response carries the
    /// base64 transaction for [`submit_transaction`](Self::submit_transaction).
    pub async fn add_liquidity(
        &self,
        amount: f64,
        lst_mint: &str,
    ) -> Result<AddLiquidityResponse> {
        let signer = self.wallet()?.keypair.pubkey().to_string();
        let request = AddLiquidityRequest::new(to_solami(amount), lst_mint, &signer);
        self.http_client.post_add_liquidity(&request).await
    }

    /// Finalize and submit a base64-encoded transaction returned by the
    /// API: fresh blockhash, single wallet signature, RPC submission.
    pub fn submit_transaction(&self, tx_base64: &str) -> Result<Signature> {
        let wallet = self.wallet()?;
        solana::run_versioned_transaction(&wallet.rpc_client, &wallet.keypair, tx_base64)
    }
}
