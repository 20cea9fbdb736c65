//! Data-transfer shapes mirroring the remote API's JSON.
//!
//! These are pure serde structs: no invariants are enforced beyond the type
//! shape. Amounts, fees and logical-time (`lt`) values are kept as decimal
//! strings to avoid precision loss, never parsed into fixed-width integers.
//! Response structs use `#[serde(default)]` so fields the gateway omits
//! decode to their zero values, the way the original API behaves.

mod address;
mod block;
mod transaction;

pub use address::{
    AddressForms, AddressInformation, DetectedAddress, ExtendedAddressInformation,
    ParsedAddressState, TokenData, UnpackedAddress, WalletInformation,
};
pub use block::{
    BlockHeader, BlockId, BlockTransactions, BlockTransactionsRequest, ConsensusBlock,
    ConsensusBlockInfo, LookupBlockRequest, MasterchainInfo, PrevTransaction, ShardBlockLink,
    ShardBlockProof, ShardBlockProofRequest, ShortTransaction, Signature,
};
pub use transaction::{
    ActionPhase, AdjacentTxRequest, BouncePhase, ComputePhase, CreditPhase, EstimateFeeRequest,
    FeeEstimate, FeeSource, Message, MessageData, RunGetMethodRequest, RunGetMethodResult,
    SendQueryRequest, SendResult, StoragePhase, TransactionDetails, TransactionsRequest,
};
