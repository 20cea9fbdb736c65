use serde::{Deserialize, Serialize};

use crate::http::StackValue;

use super::BlockId;

/// Request body for `/getTransactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionsRequest {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_lt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_only: Option<bool>,
}

/// A message attached to a transaction, inbound or outbound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub source: String,
    pub destination: String,
    pub value: String,
    pub fwd_fee: String,
    pub ihr_fee: String,
    pub created_lt: String,
    pub body_hash: String,
    pub msg_type: String,
    pub msg_data: MessageData,
}

/// Payload of a [`Message`]; the body is an opaque base64 BOC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageData {
    pub text: String,
    pub init_state: String,
    pub body: String,
}

/// A fully described transaction as returned by `/getTransactions` and the
/// `/tryLocate*Tx` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDetails {
    pub data: String,
    pub fee: String,
    pub other_fee: String,
    pub storage_fee: String,
    pub gas_fee: String,
    pub fwd_fee: String,
    pub total_fees: String,
    pub in_msg: Message,
    pub out_msgs: Vec<Message>,
    pub block_id: BlockId,
    pub prev_trans_hash: String,
    pub prev_trans_lt: String,
    pub now: i64,
    #[serde(rename = "outmsg_cnt")]
    pub out_msg_count: i32,
    pub orig_status: String,
    pub end_status: String,
    pub account_addr: String,
    pub lt: String,
    pub hash: String,
    pub description: String,
    #[serde(rename = "compute_ph")]
    pub compute_phase: ComputePhase,
    #[serde(rename = "action")]
    pub action_phase: ActionPhase,
    #[serde(rename = "credit_ph")]
    pub credit_phase: CreditPhase,
    #[serde(rename = "storage_ph")]
    pub storage_phase: StoragePhase,
    #[serde(rename = "bounce")]
    pub bounce_phase: BouncePhase,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputePhase {
    pub skipped_reason: String,
    pub success: bool,
    pub gas_used: String,
    pub vm_steps: i64,
    pub exit_code: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionPhase {
    pub success: bool,
    pub valid: bool,
    pub no_funds: bool,
    pub status_change: String,
    pub total_fwd_fees: String,
    pub total_action_fees: String,
    pub result_code: i32,
    #[serde(rename = "tot_actions")]
    pub total_actions: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditPhase {
    pub due_fees_collected: String,
    pub credit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoragePhase {
    pub storage_fees_collected: String,
    pub status_change: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BouncePhase {
    pub bounce_type: String,
    pub fwd_fees: String,
    pub msg_fees: String,
    pub req_fwd_fees: String,
}

/// Request body for `/estimateFee`.
///
/// `body`, `init_code` and `init_data` are opaque base64 BOC strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateFeeRequest {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_chksig: Option<bool>,
}

/// Fee breakdown returned by `/estimateFee`; every component is a nano-TON
/// decimal string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeEstimate {
    pub dest_fee: String,
    pub fwd_fee: String,
    pub gas_fee: String,
    pub in_fwd_fee: String,
    pub storage_fee: String,
    pub source: FeeSource,
}

/// Source account echo inside a [`FeeEstimate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSource {
    pub address: String,
    #[serde(rename = "wc")]
    pub workchain: i32,
}

/// Request body for `/sendQuery`: an unsigned external message given as
/// its separate parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendQueryRequest {
    pub address: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<String>,
}

/// Broadcast acknowledgement from `/sendBoc` and `/sendQuery`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendResult {
    pub status: i32,
    pub hash: String,
}

/// Request body for `/runGetMethod`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunGetMethodRequest {
    pub address: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stack: Vec<Vec<StackValue>>,
}

/// Result of `/runGetMethod`: the TVM exit code and result stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunGetMethodResult {
    pub gas_used: i64,
    pub stack: Vec<Vec<StackValue>>,
    pub exit_code: i32,
}

/// Request body shared by `/tryLocateResultTx` and `/tryLocateSourceTx`:
/// identifies the message whose adjacent transaction is wanted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjacentTxRequest {
    pub source: String,
    pub destination: String,
    pub created_lt: String,
}
