#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Two Truths and One Lie: a Solana Actions backend.
//!
//! Stateless, link-driven action flows: discovery describes an action,
//! build returns an unsigned fee-transfer transaction, and confirm
//! gates the domain effect (persist a game, or judge a guess) on
//! on-chain commitment of the client-signed transaction.

pub mod chain;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod protocol;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

// Re-exports for public API
pub use chain::confirm::{confirm_signature, ConfirmationGate, GateState};
pub use chain::oracle::{CommitmentTier, LedgerOracle, SignatureStatus};
pub use config::ActionConfig;
pub use error::AppError;
pub use middleware::cors::cors_middleware;
pub use state::AppState;
pub use store::{GameStore, MemoryGameStore, RedisGameStore};
