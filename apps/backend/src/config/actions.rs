//! Process-wide action configuration.
//!
//! Built once at startup from environment variables and passed into the
//! flow services and transaction builder as an explicit dependency.
//! Nothing here is mutated after construction.

use std::str::FromStr;

use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;

use crate::error::AppError;

/// Path prefix for the machine-facing action API.
pub const ACTIONS_API_PATH: &str = "/api/actions";

/// Icon referenced by every action payload, relative to the request origin.
pub const ICON_PATH: &str = "/twotruthonelie.jpg";

/// 0.05 SOL, charged when minting a new game.
pub const DEFAULT_MINT_FEE_LAMPORTS: u64 = LAMPORTS_PER_SOL / 20;

/// 0.0005 SOL, charged per guess.
pub const DEFAULT_PROCESSING_FEE_LAMPORTS: u64 = LAMPORTS_PER_SOL / 2000;

const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
const DEFAULT_CLUSTER: &str = "devnet";

// CAIP-2 chain ids advertised via the x-blockchain-ids header.
const BLOCKCHAIN_ID_DEVNET: &str = "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1";
const BLOCKCHAIN_ID_MAINNET: &str = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";

#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// JSON-RPC endpoint of the ledger status oracle.
    pub rpc_url: String,
    /// Cluster name forwarded to the action launcher (`devnet` or `mainnet`).
    pub cluster: String,
    /// CAIP-2 id matching `cluster`.
    pub blockchain_id: String,
    /// Fixed destination account credited by every fee transfer.
    pub fee_collector: Pubkey,
    pub mint_fee_lamports: u64,
    pub processing_fee_lamports: u64,
}

impl ActionConfig {
    /// Build the configuration from the environment.
    ///
    /// `FEE_COLLECTOR` is required; everything else has devnet defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let raw_collector = std::env::var("FEE_COLLECTOR")
            .map_err(|_| AppError::config("FEE_COLLECTOR must be set".to_string()))?;
        let fee_collector = Pubkey::from_str(raw_collector.trim()).map_err(|_| {
            AppError::config(format!(
                "FEE_COLLECTOR is not a valid public key: `{raw_collector}`"
            ))
        })?;

        let rpc_url =
            std::env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let cluster =
            std::env::var("CLUSTER").unwrap_or_else(|_| DEFAULT_CLUSTER.to_string());
        let blockchain_id = blockchain_id_for(&cluster)?.to_string();

        Ok(Self {
            rpc_url,
            cluster,
            blockchain_id,
            fee_collector,
            mint_fee_lamports: lamports_from_env(
                "MINT_FEE_LAMPORTS",
                DEFAULT_MINT_FEE_LAMPORTS,
            )?,
            processing_fee_lamports: lamports_from_env(
                "PROCESSING_FEE_LAMPORTS",
                DEFAULT_PROCESSING_FEE_LAMPORTS,
            )?,
        })
    }

    /// Devnet defaults with a throwaway fee collector.
    pub fn for_tests() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            cluster: DEFAULT_CLUSTER.to_string(),
            blockchain_id: BLOCKCHAIN_ID_DEVNET.to_string(),
            fee_collector: Pubkey::new_unique(),
            mint_fee_lamports: DEFAULT_MINT_FEE_LAMPORTS,
            processing_fee_lamports: DEFAULT_PROCESSING_FEE_LAMPORTS,
        }
    }
}

fn blockchain_id_for(cluster: &str) -> Result<&'static str, AppError> {
    match cluster {
        "devnet" => Ok(BLOCKCHAIN_ID_DEVNET),
        "mainnet" | "mainnet-beta" => Ok(BLOCKCHAIN_ID_MAINNET),
        other => Err(AppError::config(format!(
            "CLUSTER must be `devnet` or `mainnet`, got `{other}`"
        ))),
    }
}

fn lamports_from_env(var: &str, default: u64) -> Result<u64, AppError> {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::config(format!("{var} must be a lamport amount, got `{raw}`"))
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_defaults_match_protocol_pricing() {
        assert_eq!(DEFAULT_MINT_FEE_LAMPORTS, 50_000_000);
        assert_eq!(DEFAULT_PROCESSING_FEE_LAMPORTS, 500_000);
    }

    #[test]
    fn known_clusters_resolve_to_chain_ids() {
        assert_eq!(blockchain_id_for("devnet").unwrap(), BLOCKCHAIN_ID_DEVNET);
        assert_eq!(blockchain_id_for("mainnet").unwrap(), BLOCKCHAIN_ID_MAINNET);
        assert_eq!(
            blockchain_id_for("mainnet-beta").unwrap(),
            BLOCKCHAIN_ID_MAINNET
        );
    }

    #[test]
    fn unknown_cluster_is_a_config_error() {
        assert!(blockchain_id_for("testnet-2").is_err());
    }
}
