use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use solana_client::rpc_client::RpcClient;
use solana_sdk::hash::Hash;
use solana_sdk::message::{v0, VersionedMessage};
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer as _;
use solana_sdk::transaction::VersionedTransaction;

use crate::error::{Result, SanctumError};

const RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Create an RPC client for the given endpoint.
pub fn create_rpc_client(url: impl Into<String>) -> RpcClient {
    RpcClient::new_with_timeout(url.into(), RPC_TIMEOUT)
}

/// Parse a keypair from a base58-encoded 64-byte secret.
pub fn keypair_from_base58_secret(secret: &str) -> Result<Keypair> {
    let bytes = bs58::decode(secret)
        .into_vec()
        .map_err(|e| SanctumError::Signing(format!("bs58 decode error: {e}")))?;
    Keypair::from_bytes(&bytes)
        .map_err(|e| SanctumError::Signing(format!("invalid keypair: {e}")))
}

/// Decode a base64-encoded versioned transaction.
pub fn decode_transaction(tx_base64: &str) -> Result<VersionedTransaction> {
    let bytes = BASE64_STANDARD
        .decode(tx_base64)
        .map_err(|e| SanctumError::TransactionDecode(format!("invalid base64: {e}")))?;
    bincode::deserialize(&bytes)
        .map_err(|e| SanctumError::TransactionDecode(format!("invalid transaction bytes: {e}")))
}

/// Rebuild a message around a fresh blockhash.
///
/// Keeps the original header, account keys and instructions; the
/// address-table-lookup list is emptied, so every referenced account must
/// already be in the static key list.
fn rebind_blockhash(message: &VersionedMessage, blockhash: Hash) -> v0::Message {
    match message {
        VersionedMessage::V0(m) => v0::Message {
            header: m.header,
            account_keys: m.account_keys.clone(),
            recent_blockhash: blockhash,
            instructions: m.instructions.clone(),
            address_table_lookups: Vec::new(),
        },
        VersionedMessage::Legacy(m) => v0::Message {
            header: m.header,
            account_keys: m.account_keys.clone(),
            recent_blockhash: blockhash,
            instructions: m.instructions.clone(),
            address_table_lookups: Vec::new(),
        },
    }
}

/// Finalize and submit a base64-encoded transaction returned by the API.
///
/// Decodes the blob, substitutes the latest blockhash, signs with `keypair`
/// as the sole signer and submits via RPC. Returns the initial RPC
/// acknowledgment; finalization is not awaited.
pub fn run_versioned_transaction(
    rpc_client: &RpcClient,
    keypair: &Keypair,
    tx_base64: &str,
) -> Result<Signature> {
    let transaction = decode_transaction(tx_base64)?;

    let blockhash = rpc_client
        .get_latest_blockhash()
        .map_err(|e| SanctumError::Rpc(format!("get blockhash: {e}")))?;

    let message = VersionedMessage::V0(rebind_blockhash(&transaction.message, blockhash));
    let signature = keypair.sign_message(&message.serialize());
    let signed = VersionedTransaction {
        signatures: vec![signature],
        message,
    };

    rpc_client
        .send_transaction(&signed)
        .map_err(|e| SanctumError::TransactionFailed(format!("send transaction: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::message::{Message as LegacyMessage, MessageHeader};
    use solana_sdk::pubkey::Pubkey;
    use solana_sdk::signer::Signer;

    fn sample_v0_transaction() -> VersionedTransaction {
        let message = v0::Message {
            header: MessageHeader {
                num_required_signatures: 1,
                num_readonly_signed_accounts: 0,
                num_readonly_unsigned_accounts: 0,
            },
            account_keys: vec![Pubkey::new_unique(), Pubkey::new_unique()],
            recent_blockhash: Hash::new_unique(),
            instructions: vec![],
            address_table_lookups: vec![],
        };
        VersionedTransaction {
            signatures: vec![Signature::default()],
            message: VersionedMessage::V0(message),
        }
    }

    // ---- keypair_from_base58_secret ----

    #[test]
    fn test_keypair_round_trip() {
        let keypair = Keypair::new();
        let encoded = bs58::encode(keypair.to_bytes()).into_string();
        let parsed = keypair_from_base58_secret(&encoded).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_keypair_invalid_bs58() {
        let err = keypair_from_base58_secret("!!!not-bs58!!!").unwrap_err();
        assert!(matches!(err, SanctumError::Signing(_)));
    }

    #[test]
    fn test_keypair_bad_length() {
        let encoded = bs58::encode([7u8; 16]).into_string();
        assert!(keypair_from_base58_secret(&encoded).is_err());
    }

    // ---- decode_transaction ----

    #[test]
    fn test_decode_transaction_round_trip() {
        let tx = sample_v0_transaction();
        let encoded = BASE64_STANDARD.encode(bincode::serialize(&tx).unwrap());
        let decoded = decode_transaction(&encoded).unwrap();
        assert_eq!(decoded.message, tx.message);
        assert_eq!(decoded.signatures.len(), 1);
    }

    #[test]
    fn test_decode_transaction_malformed_base64() {
        let err = decode_transaction("not//valid@@base64!!").unwrap_err();
        assert!(matches!(err, SanctumError::TransactionDecode(_)));
    }

    #[test]
    fn test_decode_transaction_malformed_bytes() {
        let encoded = BASE64_STANDARD.encode(b"definitely not a transaction");
        let err = decode_transaction(&encoded).unwrap_err();
        assert!(matches!(err, SanctumError::TransactionDecode(_)));
    }

    // ---- rebind_blockhash ----

    #[test]
    fn test_rebind_replaces_blockhash_and_drops_lookups() {
        let tx = sample_v0_transaction();
        let fresh = Hash::new_unique();
        let rebound = rebind_blockhash(&tx.message, fresh);

        let VersionedMessage::V0(original) = &tx.message else {
            unreachable!()
        };
        assert_eq!(rebound.recent_blockhash, fresh);
        assert_ne!(rebound.recent_blockhash, original.recent_blockhash);
        assert_eq!(rebound.header, original.header);
        assert_eq!(rebound.account_keys, original.account_keys);
        assert!(rebound.address_table_lookups.is_empty());
    }

    #[test]
    fn test_rebind_legacy_message() {
        let legacy = LegacyMessage {
            header: MessageHeader {
                num_required_signatures: 1,
                num_readonly_signed_accounts: 0,
                num_readonly_unsigned_accounts: 1,
            },
            account_keys: vec![Pubkey::new_unique()],
            recent_blockhash: Hash::new_unique(),
            instructions: vec![],
        };
        let fresh = Hash::new_unique();
        let rebound = rebind_blockhash(&VersionedMessage::Legacy(legacy.clone()), fresh);

        assert_eq!(rebound.header, legacy.header);
        assert_eq!(rebound.account_keys, legacy.account_keys);
        assert_eq!(rebound.recent_blockhash, fresh);
        assert!(rebound.address_table_lookups.is_empty());
    }
}
