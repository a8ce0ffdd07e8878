use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::abi::AbiContract;
use crate::address::Address;
use crate::keys::KeyPair;

/// Interface descriptor attached to every encode/process call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Abi {
    Contract(AbiContract),
}

/// Credential authorizing a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Signer {
    None,
    Keys { keys: KeyPair },
}

/// Code image and initial state for a deploy message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploySet {
    pub tvc: String,
    pub initial_data: Value,
}

/// Function invocation carried by a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSet {
    pub function_name: String,
    pub input: Value,
}

/// Parameter set of `abi.encode_message`. A deploy message carries a
/// `deploy_set` and no `address`; a call into an existing account carries an
/// `address` and no `deploy_set`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfEncodeMessage {
    pub abi: Abi,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_set: Option<DeploySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_set: Option<CallSet>,
    pub signer: Signer,
}

/// Result of `abi.encode_message`: the encoded payload and the address it is
/// bound to. For a deploy message this is the future address of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultOfEncodeMessage {
    pub address: Address,
    pub message: String,
}

/// Parameter set of `processing.process_message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsOfProcessMessage {
    pub message_encode_params: ParamsOfEncodeMessage,
    pub send_events: bool,
}

/// Result of `processing.process_message`; the transaction content is opaque
/// to this workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultOfProcessMessage {
    pub transaction: Value,
    #[serde(default)]
    pub out_messages: Vec<String>,
}
