pub mod models;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use self::models::{
    ParamsOfEncodeMessage, ParamsOfProcessMessage, ResultOfEncodeMessage, ResultOfProcessMessage,
};
use crate::error::{ClientError, DeployerResult};

const ENCODE_MESSAGE_METHOD: &str = "abi.encode_message";
const PROCESS_MESSAGE_METHOD: &str = "processing.process_message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub server_address: String,
}

/// Node operations the deploy workflow relies on. `TonClient` is the wire
/// implementation; tests substitute their own.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn encode_message(
        &self,
        params: &ParamsOfEncodeMessage,
    ) -> DeployerResult<ResultOfEncodeMessage, ClientError>;

    async fn process_message(
        &self,
        params: &ParamsOfProcessMessage,
    ) -> DeployerResult<ResultOfProcessMessage, ClientError>;
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

/// JSON-RPC client bound to a single node. Connections are pooled inside the
/// inner `reqwest::Client` and released when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct TonClient {
    server_address: Url,
    client: reqwest::Client,
}

impl TonClient {
    pub fn new(config: ClientConfig) -> DeployerResult<Self, ClientError> {
        let server_address = Url::parse(&config.network.server_address).map_err(|err| {
            ClientError::InvalidServerAddress {
                url: config.network.server_address.clone(),
                origin: err.to_string(),
            }
        })?;

        Ok(Self { server_address, client: reqwest::Client::new() })
    }

    async fn post_rpc<TParam, TResponse>(
        &self,
        method: &str,
        params: &TParam,
    ) -> DeployerResult<TResponse, ClientError>
    where
        TParam: Serialize + Sync,
        TResponse: DeserializeOwned,
    {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 0,
            "method": method,
            "params": params,
        });

        tracing::debug!(method, server_address = %self.server_address, "Sending request");
        let resp = self
            .client
            .post(self.server_address.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let rpc_response: RpcResponse = resp.json().await?;
        match (rpc_response.result, rpc_response.error) {
            (_, Some(error)) => Err(ClientError::Node {
                code: error.code,
                message: error.message,
                data: error.data,
            }),
            (Some(result), None) => Ok(serde_json::from_value(result)?),
            (None, None) => Err(ClientError::UnexpectedResponse {
                msg: format!("neither result nor error in response to {method}"),
            }),
        }
    }
}

#[async_trait]
impl Provider for TonClient {
    async fn encode_message(
        &self,
        params: &ParamsOfEncodeMessage,
    ) -> DeployerResult<ResultOfEncodeMessage, ClientError> {
        self.post_rpc(ENCODE_MESSAGE_METHOD, params).await
    }

    async fn process_message(
        &self,
        params: &ParamsOfProcessMessage,
    ) -> DeployerResult<ResultOfProcessMessage, ClientError> {
        self.post_rpc(PROCESS_MESSAGE_METHOD, params).await
    }
}
