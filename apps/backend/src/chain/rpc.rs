//! JSON-RPC implementation of the ledger oracle.

use std::str::FromStr;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use solana_sdk::hash::Hash;

use crate::chain::oracle::{LedgerOracle, SignatureStatus};
use crate::error::AppError;

pub struct RpcLedgerOracle {
    http: reqwest::Client,
    rpc_url: String,
}

impl RpcLedgerOracle {
    pub fn new(rpc_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            rpc_url,
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, AppError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: RpcResponse<T> = response.json().await?;
        if let Some(err) = body.error {
            return Err(AppError::rpc(format!(
                "{method} failed: {} (code {})",
                err.message, err.code
            )));
        }
        body.result
            .ok_or_else(|| AppError::rpc(format!("{method} returned no result")))
    }
}

#[async_trait]
impl LedgerOracle for RpcLedgerOracle {
    async fn latest_blockhash(&self) -> Result<Hash, AppError> {
        let result: WithContext<BlockhashValue> = self
            .call("getLatestBlockhash", json!([{"commitment": "finalized"}]))
            .await?;

        Hash::from_str(&result.value.blockhash).map_err(|e| {
            AppError::rpc(format!(
                "invalid blockhash `{}`: {e}",
                result.value.blockhash
            ))
        })
    }

    async fn signature_status(
        &self,
        signature: &str,
    ) -> Result<Option<SignatureStatus>, AppError> {
        let result: WithContext<Vec<Option<SignatureStatus>>> = self
            .call(
                "getSignatureStatuses",
                json!([[signature], {"searchTransactionHistory": true}]),
            )
            .await?;

        Ok(result.value.into_iter().next().flatten())
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
struct BlockhashValue {
    blockhash: String,
}

#[cfg(test)]
mod tests {
    use crate::chain::oracle::CommitmentTier;

    use super::*;

    #[test]
    fn blockhash_response_parses() {
        let body: RpcResponse<WithContext<BlockhashValue>> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":100},
                "value":{"blockhash":"9sHcv6xwn9YkB8nxTUGKDwPwNnmqVp5oAXxU8Fdkm4J6",
                "lastValidBlockHeight":3090}}}"#,
        )
        .unwrap();
        let value = body.result.unwrap().value;
        assert!(Hash::from_str(&value.blockhash).is_ok());
    }

    #[test]
    fn status_response_parses_found_and_missing_entries() {
        let body: RpcResponse<WithContext<Vec<Option<SignatureStatus>>>> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":100},"value":[
                {"slot":72,"confirmations":10,"err":null,"confirmationStatus":"confirmed"},
                null]}}"#,
        )
        .unwrap();
        let statuses = body.result.unwrap().value;
        assert_eq!(
            statuses[0].as_ref().unwrap().confirmation_status,
            Some(CommitmentTier::Confirmed)
        );
        assert!(statuses[1].is_none());
    }

    #[test]
    fn error_response_parses() {
        let body: RpcResponse<WithContext<BlockhashValue>> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32005,"message":"node is behind"}}"#,
        )
        .unwrap();
        assert!(body.result.is_none());
        assert_eq!(body.error.unwrap().code, -32005);
    }
}
