use serde::{Deserialize, Serialize};

/// The two textual renderings of one address form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressForms {
    pub b64: String,
    pub b64url: String,
}

/// Result of `/detectAddress`: every representation of the given address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedAddress {
    pub bounceable: AddressForms,
    pub non_bounceable: AddressForms,
    pub given_type: String,
    pub raw_form: String,
    pub test_only: bool,
    pub workchain: i32,
}

/// Account state returned by `/getAddressInformation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInformation {
    pub address: String,
    pub balance: String,
    pub code: String,
    pub data: String,
    pub last_trans_lt: String,
    pub last_trans_hash: String,
    pub frozen_hash: String,
    pub sync_utime: i64,
    pub state: String,
    pub account_status: String,
    pub account_storage: String,
    pub account_code: String,
    pub account_data: String,
    pub proof_of_state_val: String,
}

/// Account state plus the block it was read at and a parsed wallet view,
/// returned by `/getExtendedAddressInformation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedAddressInformation {
    pub address: String,
    pub balance: String,
    pub code: String,
    pub data: String,
    pub last_trans_lt: String,
    pub last_trans_hash: String,
    pub frozen_hash: String,
    pub sync_utime: i64,
    pub state: String,
    pub account_status: String,
    pub account_storage: String,
    pub account_code: String,
    pub account_data: String,
    pub proof_of_state_val: String,
    pub block_id: super::BlockId,
    pub parsed: ParsedAddressState,
}

/// Wallet-contract interpretation of an account's state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedAddressState {
    pub status: String,
    pub timestamp: i64,
    pub is_wallet: bool,
    pub wallet_type: String,
    pub seqno: u32,
    pub public_key: String,
    pub wallet_id: i64,
}

/// Result of `/getWalletInformation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletInformation {
    pub wallet: bool,
    pub balance: String,
    pub account: String,
    pub wallet_type: String,
    pub seqno: u32,
    pub last_trans_lt: String,
    pub last_trans_hash: String,
    pub wallet_id: i64,
    pub public_key: String,
}

/// Token (jetton) metadata from `/getTokenData`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenData {
    pub name: String,
    pub symbol: String,
    pub decimals: i32,
    pub address: String,
}

/// Result of `/unpackAddress`: the raw components of a packed address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnpackedAddress {
    pub raw_form: String,
    pub test_only: bool,
    pub bounceable: bool,
    pub workchain: i32,
    pub hash: String,
}
