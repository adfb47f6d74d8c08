use thiserror::Error;

#[derive(Error, Debug)]
pub enum SanctumError {
    #[error("invalid API key (server returned 403 with a non-JSON body)")]
    WrongApiKey,

    #[error("response body is not valid JSON: {0}")]
    NoJson(String),

    #[error("API reported errors: {0}")]
    Api(serde_json::Value),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("LST not found in response: {0}")]
    LstNotFound(String),

    #[error("no wallet keypair configured")]
    NoWallet,

    #[error("signing error: {0}")]
    Signing(String),

    #[error("transaction decode error: {0}")]
    TransactionDecode(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SanctumError>;
