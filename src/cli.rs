use clap::{Parser, Subcommand};

/// sanctum — CLI for the Sanctum LST trading API.
#[derive(Parser, Debug)]
#[command(name = "sanctum", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Echo raw API response bodies at debug level
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve information about the Infinity pool
    InfinityInfos,

    /// Get the APY for an LST token
    LstApy {
        /// Name or symbol of the LST token (e.g. JupSOL)
        token: String,
    },

    /// Get the SOL value for an LST token
    LstSolValue {
        /// Name or symbol of the LST token (e.g. JupSOL)
        token: String,
    },

    /// Get the total value locked (TVL) for an LST token
    LstTvl {
        /// Name or symbol of the LST token (e.g. JupSOL)
        token: String,
    },

    /// Retrieve APY, SOL value and TVL for an LST token
    LstInfos {
        /// Name or symbol of the LST token (e.g. JupSOL)
        token: String,
    },

    /// Get the current price of a token
    Price {
        /// Mint address of the token
        token: String,
    },

    /// Retrieve metadata for a token
    Metadata {
        /// Mint address of the token
        token: String,
    },

    /// Get a quote for exchanging between two tokens
    Quote {
        /// Mint address of the token to sell
        token: String,
        /// Mint address of the token to buy
        quote_token: String,
        /// Amount of the selling token to quote
        amount: f64,
    },
}
