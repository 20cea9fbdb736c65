use serde::{Deserialize, Serialize};

/// Full identifier of a block: chain coordinates plus content hashes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockId {
    pub workchain: i32,
    pub shard: String,
    pub seqno: u32,
    pub root_hash: String,
    pub file_hash: String,
}

/// Result of `/getBlockHeader`.
///
/// `start_lt`/`end_lt` are logical-time values and stay decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockHeader {
    pub global_id: i32,
    pub version: u32,
    pub after_merge: bool,
    pub before_split: bool,
    pub want_merge: bool,
    pub want_split: bool,
    pub validator_list_hash_short: i64,
    pub catchain_seqno: u32,
    pub min_ref_mc_seqno: u32,
    pub is_key_block: bool,
    pub prev_key_block_seqno: u32,
    pub start_lt: String,
    pub end_lt: String,
    pub gen_utime: i64,
    pub vert_seqno: u32,
    pub gen_software_version: u32,
    pub gen_software_capabilities: String,
}

/// Abbreviated transaction record inside a block listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortTransaction {
    pub account: String,
    pub hash: String,
    pub lt: String,
    pub prev_trans: PrevTransaction,
}

/// Back-reference to the account's previous transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrevTransaction {
    pub hash: String,
    pub lt: String,
}

/// Result of `/getBlockTransactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockTransactions {
    /// True when the listing was truncated by the requested count.
    pub incomplete: bool,
    pub transactions: Vec<ShortTransaction>,
}

/// One of the two block pointers returned by `/getConsensusBlock`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusBlockInfo {
    pub seq_no: u32,
    pub root_hash: String,
    pub file_hash: String,
    pub timestamp: i64,
}

/// Result of `/getConsensusBlock`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusBlock {
    pub consensus: ConsensusBlockInfo,
    pub pending: ConsensusBlockInfo,
}

/// Result of `/getMasterchainInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterchainInfo {
    #[serde(rename = "last")]
    pub last_block: BlockId,
    pub state_root_hash: String,
    pub init_seq_no: u32,
}

/// Validator signature over a masterchain block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    pub node_id: String,
    pub r: String,
    pub s: String,
    pub signature_id: i64,
}

/// One proof link in a shard block proof chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShardBlockLink {
    pub to_key_block: bool,
    pub from: BlockId,
    pub to: BlockId,
    pub dest_proof: String,
    pub proof: String,
    pub state_proof: String,
}

/// Result of `/getShardBlockProof`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShardBlockProof {
    pub masterchain_id: BlockId,
    pub links: Vec<ShardBlockLink>,
}

/// Request body for `/getBlockTransactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockTransactionsRequest {
    pub workchain: i32,
    pub shard: String,
    pub seqno: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_lt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_hash: Option<String>,
}

/// Request body for `/lookupBlock`: any one of seqno, lt or unixtime
/// selects the block within the given chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupBlockRequest {
    pub workchain: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seqno: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unixtime: Option<i64>,
}

/// Request body for `/getShardBlockProof`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShardBlockProofRequest {
    pub workchain: i32,
    pub shard: String,
    pub seqno: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_seqno: Option<u32>,
}
