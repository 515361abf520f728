//! Todo contract binding over Ethereum JSON-RPC.

use super::abi;
use crate::task::{
    domain::{
        AccountAddress, ChainTaskRecord, ContentPath, TaskId, TransactionHash, TransactionReceipt,
    },
    ports::{ChainError, ChainReader, ChainResult, ChainWriter},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// EIP-1193 code for a request the user rejected.
const USER_REJECTED_REQUEST: i64 = 4001;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcReceipt {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    block_number: Option<String>,
}

/// Contract binding that talks to a node's JSON-RPC endpoint.
///
/// Reads go through `eth_call`. Writes go through `eth_sendTransaction`
/// with `from` set to the active account, leaving signing to the wallet or
/// node behind the endpoint. Confirmation polls `eth_getTransactionReceipt`
/// until a receipt appears.
pub struct JsonRpcTodoContract {
    client: reqwest::Client,
    rpc_url: String,
    contract: AccountAddress,
    poll_interval: Duration,
    request_id: AtomicU64,
}

impl JsonRpcTodoContract {
    /// Creates a binding for the contract at `contract`.
    #[must_use]
    pub fn new(
        rpc_url: impl Into<String>,
        contract: AccountAddress,
        poll_interval: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            rpc_url: rpc_url.into(),
            contract,
            poll_interval,
            request_id: AtomicU64::new(1),
        }
    }

    async fn call(&self, method: &str, params: Value) -> ChainResult<Value> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: self.request_id.fetch_add(1, Ordering::Relaxed),
        };
        debug!(method, id = request.id, "sending rpc request");

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(ChainError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChainError::Rpc {
                code: i64::from(status.as_u16()),
                message,
            });
        }

        let body: RpcResponse = response.json().await.map_err(ChainError::transport)?;
        if let Some(error) = body.error {
            return Err(classify_rpc_error(error));
        }
        Ok(body.result.unwrap_or(Value::Null))
    }

    async fn send_transaction(
        &self,
        from: AccountAddress,
        calldata: &[u8],
    ) -> ChainResult<TransactionHash> {
        let params = json!([{
            "from": from.to_string(),
            "to": self.contract.to_string(),
            "data": to_hex_data(calldata),
        }]);
        let result = self.call("eth_sendTransaction", params).await?;
        let hash = result
            .as_str()
            .ok_or_else(|| ChainError::Decode(format!("expected transaction hash, got {result}")))?;
        TransactionHash::parse(hash).map_err(|err| ChainError::Decode(err.to_string()))
    }
}

fn classify_rpc_error(error: RpcErrorBody) -> ChainError {
    if error.code == USER_REJECTED_REQUEST {
        return ChainError::SignatureRejected;
    }
    ChainError::Rpc {
        code: error.code,
        message: error.message,
    }
}

fn to_hex_data(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn from_hex_data(value: &str) -> ChainResult<Vec<u8>> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(digits).map_err(|err| ChainError::Decode(err.to_string()))
}

fn parse_quantity(value: &str) -> ChainResult<u64> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    u64::from_str_radix(digits, 16).map_err(|err| ChainError::Decode(err.to_string()))
}

fn receipt_from_rpc(
    transaction_hash: TransactionHash,
    receipt: &RpcReceipt,
) -> ChainResult<TransactionReceipt> {
    let block_number = receipt
        .block_number
        .as_deref()
        .map(parse_quantity)
        .transpose()?;
    // Receipts without a status field predate status codes; inclusion is
    // the only signal available there.
    let reverted = receipt
        .status
        .as_deref()
        .map(parse_quantity)
        .transpose()?
        .is_some_and(|status| status == 0);
    if reverted {
        return Ok(TransactionReceipt::reverted(transaction_hash, block_number));
    }
    Ok(TransactionReceipt::succeeded(transaction_hash, block_number))
}

#[async_trait]
impl ChainReader for JsonRpcTodoContract {
    async fn fetch_tasks(&self) -> ChainResult<Vec<ChainTaskRecord>> {
        let params = json!([
            {
                "to": self.contract.to_string(),
                "data": to_hex_data(&abi::encode_fetch_tasks()),
            },
            "latest"
        ]);
        let result = self.call("eth_call", params).await?;
        let data = result
            .as_str()
            .ok_or_else(|| ChainError::Decode(format!("expected call data, got {result}")))?;
        abi::decode_task_records(&from_hex_data(data)?)
            .map_err(|err| ChainError::Decode(err.to_string()))
    }
}

#[async_trait]
impl ChainWriter for JsonRpcTodoContract {
    async fn submit_create_task(
        &self,
        from: AccountAddress,
        title: &str,
        content_path: &ContentPath,
    ) -> ChainResult<TransactionHash> {
        let calldata = abi::encode_create_task(title, content_path.as_str());
        self.send_transaction(from, &calldata).await
    }

    async fn submit_delete_task(
        &self,
        from: AccountAddress,
        id: TaskId,
    ) -> ChainResult<TransactionHash> {
        let calldata = abi::encode_delete_task(id);
        self.send_transaction(from, &calldata).await
    }

    async fn wait_for_confirmation(
        &self,
        transaction_hash: TransactionHash,
    ) -> ChainResult<TransactionReceipt> {
        loop {
            let result = self
                .call(
                    "eth_getTransactionReceipt",
                    json!([transaction_hash.to_string()]),
                )
                .await?;
            if result.is_null() {
                tokio::time::sleep(self.poll_interval).await;
                continue;
            }
            let receipt: RpcReceipt = serde_json::from_value(result)
                .map_err(|err| ChainError::Decode(err.to_string()))?;
            return receipt_from_rpc(transaction_hash, &receipt);
        }
    }
}
