//! Unsigned fee-transfer transaction construction.
//!
//! Pure assembly: exactly one system transfer from the payer to the
//! fee collector, compiled into a v0 message against a fresh blockhash.
//! Nothing here signs or submits; the signature slot is left zeroed for
//! the client's wallet to fill.

use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use solana_sdk::hash::Hash;
use solana_sdk::message::{v0, VersionedMessage};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::system_instruction;
use solana_sdk::transaction::VersionedTransaction;

use crate::error::AppError;

/// Parse an untrusted account string into a public key.
pub fn parse_pubkey(account: &str) -> Result<Pubkey, AppError> {
    Pubkey::from_str(account.trim()).map_err(|_| AppError::InvalidAccount)
}

/// Build the unsigned fee-transfer transaction for one flow step.
pub fn build_fee_transfer(
    payer: &Pubkey,
    fee_collector: &Pubkey,
    lamports: u64,
    recent_blockhash: Hash,
) -> Result<VersionedTransaction, AppError> {
    let transfer = system_instruction::transfer(payer, fee_collector, lamports);
    let message = v0::Message::try_compile(payer, &[transfer], &[], recent_blockhash)
        .map_err(|e| AppError::internal(format!("failed to compile transfer message: {e}")))?;
    let message = VersionedMessage::V0(message);

    let signatures = vec![Signature::default(); message.header().num_required_signatures as usize];
    Ok(VersionedTransaction {
        signatures,
        message,
    })
}

/// Serialize a transaction to the base64 wire form action clients expect.
pub fn encode_transaction(tx: &VersionedTransaction) -> Result<String, AppError> {
    let bytes = bincode::serialize(tx)
        .map_err(|e| AppError::internal(format!("failed to serialize transaction: {e}")))?;
    Ok(STANDARD.encode(bytes))
}
