//! Confirmation gate shared by both flows.
//!
//! Resolution (record creation, answer comparison) happens strictly
//! after the gate reaches `Confirmed`. A rejected gate surfaces a
//! client-visible error and no resolution action runs. The gate does a
//! single oracle query per confirm call; re-invoking confirm for a
//! still-pending transaction is the client's responsibility.

use crate::chain::oracle::{LedgerOracle, SignatureStatus};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unsubmitted,
    AwaitingStatus,
    Confirmed,
    Rejected,
}

#[derive(Debug)]
pub struct ConfirmationGate {
    state: GateState,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Unsubmitted,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Accept a signature from the client.
    ///
    /// An empty or whitespace-only signature leaves the gate
    /// unsubmitted and fails validation.
    pub fn submit(&mut self, signature: &str) -> Result<(), AppError> {
        debug_assert_eq!(self.state, GateState::Unsubmitted);
        if signature.trim().is_empty() {
            return Err(AppError::validation("`signature` field is required"));
        }
        self.state = GateState::AwaitingStatus;
        Ok(())
    }

    /// Feed the oracle's answer into the gate.
    ///
    /// Absent status or a commitment tier below `confirmed` rejects;
    /// `confirmed` and `finalized` authorize resolution. Both outcomes
    /// are terminal.
    pub fn observe(&mut self, status: Option<&SignatureStatus>) -> Result<(), AppError> {
        debug_assert_eq!(self.state, GateState::AwaitingStatus);
        let Some(status) = status else {
            self.state = GateState::Rejected;
            return Err(AppError::UnknownSignature);
        };

        match status.confirmation_status {
            Some(tier) if tier.authorizes_resolution() => {
                self.state = GateState::Confirmed;
                Ok(())
            }
            _ => {
                self.state = GateState::Rejected;
                Err(AppError::Unconfirmed)
            }
        }
    }
}

impl Default for ConfirmationGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive one signature through the gate with a single oracle query.
pub async fn confirm_signature(
    oracle: &dyn LedgerOracle,
    signature: &str,
) -> Result<(), AppError> {
    let mut gate = ConfirmationGate::new();
    gate.submit(signature)?;
    let status = oracle.signature_status(signature.trim()).await?;
    gate.observe(status.as_ref())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use solana_sdk::hash::Hash;

    use crate::chain::oracle::CommitmentTier;

    use super::*;

    fn status(tier: CommitmentTier) -> SignatureStatus {
        SignatureStatus {
            confirmation_status: Some(tier),
            err: None,
        }
    }

    #[test]
    fn empty_signature_keeps_gate_unsubmitted() {
        let mut gate = ConfirmationGate::new();
        assert!(gate.submit("   ").is_err());
        assert_eq!(gate.state(), GateState::Unsubmitted);
    }

    #[test]
    fn non_empty_signature_moves_to_awaiting_status() {
        let mut gate = ConfirmationGate::new();
        gate.submit("5sig").unwrap();
        assert_eq!(gate.state(), GateState::AwaitingStatus);
    }

    #[test]
    fn absent_status_rejects_with_unknown_signature() {
        let mut gate = ConfirmationGate::new();
        gate.submit("5sig").unwrap();
        let err = gate.observe(None).unwrap_err();
        assert!(matches!(err, AppError::UnknownSignature));
        assert_eq!(gate.state(), GateState::Rejected);
    }

    #[test]
    fn processed_tier_rejects_with_unconfirmed() {
        let mut gate = ConfirmationGate::new();
        gate.submit("5sig").unwrap();
        let err = gate
            .observe(Some(&status(CommitmentTier::Processed)))
            .unwrap_err();
        assert!(matches!(err, AppError::Unconfirmed));
        assert_eq!(gate.state(), GateState::Rejected);
    }

    #[test]
    fn missing_tier_rejects_with_unconfirmed() {
        let mut gate = ConfirmationGate::new();
        gate.submit("5sig").unwrap();
        let no_tier = SignatureStatus {
            confirmation_status: None,
            err: None,
        };
        assert!(gate.observe(Some(&no_tier)).is_err());
        assert_eq!(gate.state(), GateState::Rejected);
    }

    #[test]
    fn confirmed_and_finalized_reach_the_confirmed_state() {
        for tier in [CommitmentTier::Confirmed, CommitmentTier::Finalized] {
            let mut gate = ConfirmationGate::new();
            gate.submit("5sig").unwrap();
            gate.observe(Some(&status(tier))).unwrap();
            assert_eq!(gate.state(), GateState::Confirmed);
        }
    }

    struct FixedOracle {
        statuses: HashMap<String, SignatureStatus>,
    }

    #[async_trait]
    impl LedgerOracle for FixedOracle {
        async fn latest_blockhash(&self) -> Result<Hash, AppError> {
            Ok(Hash::new_unique())
        }

        async fn signature_status(
            &self,
            signature: &str,
        ) -> Result<Option<SignatureStatus>, AppError> {
            Ok(self.statuses.get(signature).cloned())
        }
    }

    #[tokio::test]
    async fn confirm_signature_runs_one_query_and_trims() {
        let oracle = FixedOracle {
            statuses: HashMap::from([("5sig".to_string(), status(CommitmentTier::Finalized))]),
        };
        confirm_signature(&oracle, " 5sig ").await.unwrap();
    }

    #[tokio::test]
    async fn confirm_signature_propagates_rejection() {
        let oracle = FixedOracle {
            statuses: HashMap::new(),
        };
        let err = confirm_signature(&oracle, "missing").await.unwrap_err();
        assert!(matches!(err, AppError::UnknownSignature));
    }
}
