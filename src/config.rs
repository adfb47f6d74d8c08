/// Default base URL for the Sanctum Trade API.
pub const DEFAULT_API_URL: &str = "https://sanctum-s-api.fly.dev";

/// Default base URL for the extra (stats) API.
pub const DEFAULT_EXTRA_API_URL: &str = "https://sanctum-extra-api.ngrok.dev";

/// Configuration for the Sanctum client.
#[derive(Debug, Clone)]
pub struct SanctumConfig {
    /// Sanctum Trade API authentication key, sent on every request.
    pub api_key: String,
    /// Wallet keypair secret, base58-encoded. Liquidity operations and
    /// transaction submission require it; read-only accessors do not.
    pub private_key: Option<String>,
    /// Solana network: a named cluster (e.g. `devnet`, `mainnet-beta`) or a
    /// literal RPC URL (detected by an `http` prefix).
    pub network: String,
    /// Echo raw response bodies at debug level before decoding.
    pub verbose_logging: bool,
    /// Base URL for the main API host.
    pub api_url: String,
    /// Base URL for the extra API host.
    pub extra_api_url: String,
}

impl SanctumConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            private_key: None,
            network: "devnet".to_string(),
            verbose_logging: false,
            api_url: DEFAULT_API_URL.to_string(),
            extra_api_url: DEFAULT_EXTRA_API_URL.to_string(),
        }
    }

    /// Resolve the configured network to a Solana RPC URL.
    pub fn rpc_url(&self) -> String {
        if self.network.starts_with("http") {
            self.network.clone()
        } else {
            format!("https://api.{}.solana.com", self.network)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_url_named_network() {
        let config = SanctumConfig::new("key");
        assert_eq!(config.rpc_url(), "https://api.devnet.solana.com");

        let mut config = SanctumConfig::new("key");
        config.network = "mainnet-beta".to_string();
        assert_eq!(config.rpc_url(), "https://api.mainnet-beta.solana.com");
    }

    #[test]
    fn test_rpc_url_literal_url() {
        let mut config = SanctumConfig::new("key");
        config.network = "http://localhost:8899".to_string();
        assert_eq!(config.rpc_url(), "http://localhost:8899");

        config.network = "https://rpc.example.com".to_string();
        assert_eq!(config.rpc_url(), "https://rpc.example.com");
    }

    #[test]
    fn test_defaults() {
        let config = SanctumConfig::new("key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.extra_api_url, DEFAULT_EXTRA_API_URL);
        assert!(config.private_key.is_none());
        assert!(!config.verbose_logging);
    }
}
