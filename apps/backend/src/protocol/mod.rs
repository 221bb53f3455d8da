//! Solana Actions wire protocol: JSON shapes and headers.

pub mod actions;

/// Actions spec version advertised on every response.
pub const ACTION_VERSION: &str = "2.2";

pub const HEADER_ACTION_VERSION: &str = "x-action-version";
pub const HEADER_BLOCKCHAIN_IDS: &str = "x-blockchain-ids";
