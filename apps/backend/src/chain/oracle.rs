//! Ledger status oracle interface.
//!
//! The ledger is an external collaborator: given a signature it reports
//! the current commitment status, and it hands out fresh blockhashes to
//! anchor new transactions. One query per call, no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_sdk::hash::Hash;

use crate::error::AppError;

/// Commitment level the ledger reports for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentTier {
    Processed,
    Confirmed,
    Finalized,
}

impl CommitmentTier {
    /// Only confirmed and finalized authorize resolution.
    pub fn authorizes_resolution(self) -> bool {
        matches!(self, CommitmentTier::Confirmed | CommitmentTier::Finalized)
    }
}

/// Status of a looked-up signature, as reported by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatus {
    #[serde(default)]
    pub confirmation_status: Option<CommitmentTier>,
    #[serde(default)]
    pub err: Option<serde_json::Value>,
}

#[async_trait]
pub trait LedgerOracle: Send + Sync {
    /// Fetch a fresh reference blockhash for transaction construction.
    async fn latest_blockhash(&self) -> Result<Hash, AppError>;

    /// Look up the commitment status of a signature.
    ///
    /// `None` means the ledger has no record of the signature.
    async fn signature_status(
        &self,
        signature: &str,
    ) -> Result<Option<SignatureStatus>, AppError>;
}
