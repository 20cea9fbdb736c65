//! High-level typed client for the TON HTTP API.
//!
//! [`TonClient`] wraps the low-level transport and exposes one method per
//! remote operation. Every REST binding goes through the same generic call
//! helper: encode the request, delegate to the transport, decode the
//! `{ok, result}` envelope, and turn `ok: false` into an
//! [`ClientError::Api`] even when the HTTP call itself succeeded.

use log::{debug, info, warn};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{
    AddressInformation, AdjacentTxRequest, BlockHeader, BlockId, BlockTransactions,
    BlockTransactionsRequest, ConsensusBlock, DetectedAddress, EstimateFeeRequest,
    ExtendedAddressInformation, FeeEstimate, LookupBlockRequest, MasterchainInfo,
    RunGetMethodRequest, RunGetMethodResult, SendQueryRequest, SendResult, ShardBlockProof,
    ShardBlockProofRequest, Signature, TokenData, TransactionDetails, TransactionsRequest,
    UnpackedAddress, WalletInformation,
};

use super::http_client::HttpClient;
use super::types::{ApiResponse, JsonRpcRequest, JsonRpcResponse, StackValue};

/// Typed client for the TON blockchain HTTP API.
///
/// The client holds its configuration and one HTTP connection pool; it is
/// safe to share across tasks and issue concurrent calls from. Each call is
/// a single synchronous attempt with no retained state between calls, so
/// resilience policies belong to the caller.
///
/// # Example
///
/// ```rust,no_run
/// use toncenter_client::TonClient;
///
/// # async fn example() -> Result<(), toncenter_client::ClientError> {
/// let client = TonClient::new("my-api-key-here")?;
///
/// let info = client.get_masterchain_info().await?;
/// println!("masterchain tip: {}", info.last_block.seqno);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TonClient {
    http_client: HttpClient,
}

impl TonClient {
    /// Creates a client for the default mainnet gateway.
    ///
    /// Construction validates the configuration and performs no network
    /// I/O.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the API key fails the length
    /// sanity check.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::new(api_key)?)
    }

    /// Creates a client from an explicit configuration.
    ///
    /// ```rust,no_run
    /// use std::time::Duration;
    /// use url::Url;
    /// use toncenter_client::{ClientConfig, TonClient};
    ///
    /// # fn example() -> Result<(), toncenter_client::ClientError> {
    /// let config = ClientConfig::with_options(
    ///     "my-api-key-here",
    ///     Url::parse("https://ton.getblock.io/testnet/").unwrap(),
    ///     Duration::from_secs(10),
    /// )?;
    /// let client = TonClient::with_config(config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Returns the configured gateway base URL.
    pub fn base_url(&self) -> &Url {
        self.http_client.base_url()
    }

    // Address operations ----------------------------------------------------

    /// Detects the form of the given address and returns all of its
    /// textual representations.
    pub async fn detect_address(&self, address: &str) -> Result<DetectedAddress, ClientError> {
        self.get_api(&format!("/detectAddress?address={address}"))
            .await
    }

    /// Returns the balance of an address as a nano-TON decimal string.
    ///
    /// See [`format_nano_ton`](crate::utils::format_nano_ton) for rendering
    /// the value in whole TON.
    pub async fn get_address_balance(&self, address: &str) -> Result<String, ClientError> {
        self.get_api(&format!("/getAddressBalance?address={address}"))
            .await
    }

    /// Returns the full on-chain state of an address.
    pub async fn get_address_information(
        &self,
        address: &str,
    ) -> Result<AddressInformation, ClientError> {
        self.get_api(&format!("/getAddressInformation?address={address}"))
            .await
    }

    /// Returns the state of an address: `uninitialized`, `active` or
    /// `frozen`.
    pub async fn get_address_state(&self, address: &str) -> Result<String, ClientError> {
        self.get_api(&format!("/getAddressState?address={address}"))
            .await
    }

    /// Returns the on-chain state of an address together with the block it
    /// was read at and a parsed wallet-contract view.
    pub async fn get_extended_address_information(
        &self,
        address: &str,
    ) -> Result<ExtendedAddressInformation, ClientError> {
        self.get_api(&format!("/getExtendedAddressInformation?address={address}"))
            .await
    }

    /// Returns wallet-contract details (type, seqno, public key) for an
    /// address.
    pub async fn get_wallet_information(
        &self,
        address: &str,
    ) -> Result<WalletInformation, ClientError> {
        self.get_api(&format!("/getWalletInformation?address={address}"))
            .await
    }

    /// Returns token (jetton) metadata for a contract address.
    pub async fn get_token_data(&self, address: &str) -> Result<TokenData, ClientError> {
        self.get_api(&format!("/getTokenData?address={address}"))
            .await
    }

    /// Converts an address to its raw `workchain:hex` form.
    pub async fn pack_address(&self, address: &str) -> Result<String, ClientError> {
        let packed: PackedForm = self
            .get_api(&format!("/packAddress?address={address}"))
            .await?;
        Ok(packed.raw_form)
    }

    /// Splits a packed address into its raw components.
    pub async fn unpack_address(&self, address: &str) -> Result<UnpackedAddress, ClientError> {
        self.get_api(&format!("/unpackAddress?address={address}"))
            .await
    }

    /// Estimates the fees a message would incur without sending it.
    pub async fn estimate_fee(&self, req: EstimateFeeRequest) -> Result<FeeEstimate, ClientError> {
        self.post_api("/estimateFee", &req).await
    }

    // Block operations ------------------------------------------------------

    /// Returns the current masterchain tip and state root.
    pub async fn get_masterchain_info(&self) -> Result<MasterchainInfo, ClientError> {
        self.get_api("/getMasterchainInfo").await
    }

    /// Returns the validator signatures over a masterchain block.
    pub async fn get_masterchain_block_signatures(
        &self,
        seqno: u32,
    ) -> Result<Vec<Signature>, ClientError> {
        let list: SignatureList = self
            .post_api("/getMasterchainBlockSignatures", &json!({ "seqno": seqno }))
            .await?;
        Ok(list.signatures)
    }

    /// Returns the header of the block at the given chain coordinates.
    pub async fn get_block_header(
        &self,
        workchain: i32,
        shard: &str,
        seqno: u32,
    ) -> Result<BlockHeader, ClientError> {
        let body = json!({ "workchain": workchain, "shard": shard, "seqno": seqno });
        self.post_api("/getBlockHeader", &body).await
    }

    /// Lists the transactions included in a block.
    pub async fn get_block_transactions(
        &self,
        req: BlockTransactionsRequest,
    ) -> Result<BlockTransactions, ClientError> {
        self.post_api("/getBlockTransactions", &req).await
    }

    /// Returns the consensus and pending block pointers.
    pub async fn get_consensus_block(
        &self,
        block_id: Option<i64>,
    ) -> Result<ConsensusBlock, ClientError> {
        let body = match block_id {
            Some(id) => json!({ "block_id": id }),
            None => json!({}),
        };
        self.post_api("/getConsensusBlock", &body).await
    }

    /// Returns the proof chain linking a shard block to the masterchain.
    pub async fn get_shard_block_proof(
        &self,
        req: ShardBlockProofRequest,
    ) -> Result<ShardBlockProof, ClientError> {
        self.post_api("/getShardBlockProof", &req).await
    }

    /// Lists the shard blocks referenced by the masterchain block with the
    /// given seqno.
    pub async fn shards(&self, seqno: u32) -> Result<Vec<BlockId>, ClientError> {
        let list: ShardList = self.get_api(&format!("/shards?seqno={seqno}")).await?;
        Ok(list.shards)
    }

    /// Looks up a block by seqno, logical time or unix time.
    pub async fn lookup_block(&self, req: LookupBlockRequest) -> Result<BlockId, ClientError> {
        self.post_api("/lookupBlock", &req).await
    }

    // Transaction operations ------------------------------------------------

    /// Returns the transaction history of an address, newest first.
    pub async fn get_transactions(
        &self,
        req: TransactionsRequest,
    ) -> Result<Vec<TransactionDetails>, ClientError> {
        let list: TransactionList = self.post_api("/getTransactions", &req).await?;
        Ok(list.transactions)
    }

    /// Locates a transaction by its hash.
    pub async fn try_locate_tx(&self, hash: &str) -> Result<TransactionDetails, ClientError> {
        let located: LocatedTransaction = self
            .post_api("/tryLocateTx", &json!({ "hash": hash }))
            .await?;
        Ok(located.transaction)
    }

    /// Locates the transaction that received the identified message.
    pub async fn try_locate_result_tx(
        &self,
        req: AdjacentTxRequest,
    ) -> Result<TransactionDetails, ClientError> {
        let located: LocatedTransaction = self.post_api("/tryLocateResultTx", &req).await?;
        Ok(located.transaction)
    }

    /// Locates the transaction that sent the identified message.
    pub async fn try_locate_source_tx(
        &self,
        req: AdjacentTxRequest,
    ) -> Result<TransactionDetails, ClientError> {
        let located: LocatedTransaction = self.post_api("/tryLocateSourceTx", &req).await?;
        Ok(located.transaction)
    }

    // Send operations -------------------------------------------------------

    /// Broadcasts a serialized bag of cells to the network.
    ///
    /// The BOC is an opaque base64 string; the client forwards it without
    /// validating its contents.
    pub async fn send_boc(&self, boc: &str) -> Result<SendResult, ClientError> {
        info!(target: "audit", "Broadcasting BOC to the network");
        self.post_api("/sendBoc", &json!({ "boc": boc })).await
    }

    /// Broadcasts a serialized bag of cells and returns its message hash.
    pub async fn send_boc_return_hash(&self, boc: &str) -> Result<String, ClientError> {
        info!(target: "audit", "Broadcasting BOC to the network");
        self.post_api("/sendBocReturnHash", &json!({ "boc": boc }))
            .await
    }

    /// Broadcasts an unsigned external message given as its separate parts.
    pub async fn send_query(&self, req: SendQueryRequest) -> Result<SendResult, ClientError> {
        info!(target: "audit", "Broadcasting external message query");
        self.post_api("/sendQuery", &req).await
    }

    // Contract execution ----------------------------------------------------

    /// Runs a read-only get-method on a contract without creating a network
    /// transaction.
    ///
    /// Stack entries use the API's ad hoc pair encoding, for example
    /// `[["num", "0x1"]]`; see [`StackValue`].
    pub async fn run_get_method(
        &self,
        req: RunGetMethodRequest,
    ) -> Result<RunGetMethodResult, ClientError> {
        self.post_api("/runGetMethod", &req).await
    }

    /// Dispatches an arbitrary method through the `/jsonRPC` endpoint and
    /// returns the raw `result` member.
    ///
    /// A populated JSON-RPC `error` member is reported as
    /// [`ClientError::Api`] with the RPC error code.
    pub async fn json_rpc(
        &self,
        method: &str,
        params: Option<StackValue>,
    ) -> Result<serde_json::Value, ClientError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method: method.to_string(),
            params,
            id: 1,
        };
        let body = serde_json::to_value(&request).map_err(ClientError::Encoding)?;

        debug!(method = request.method.as_str(); "Dispatching JSON-RPC request");
        let bytes = self
            .http_client
            .send_request(Method::POST, "/jsonRPC", Some(&body))
            .await?;

        let response: JsonRpcResponse<serde_json::Value> =
            serde_json::from_slice(&bytes).map_err(ClientError::Decode)?;
        if let Some(error) = response.error {
            warn!(method = request.method.as_str(), code = error.code; "JSON-RPC call failed");
            return Err(ClientError::Api {
                message: error.message,
                code: Some(error.code),
                http_status: None,
            });
        }
        response.result.ok_or_else(missing_result)
    }

    // Shared plumbing -------------------------------------------------------

    async fn get_api<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.call(Method::GET, path, None).await
    }

    async fn post_api<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_value(body).map_err(ClientError::Encoding)?;
        self.call(Method::POST, path, Some(body)).await
    }

    /// One REST round trip: transport, envelope decode, `ok` check.
    ///
    /// Transport failures propagate unchanged; they are never reinterpreted
    /// as decode or API errors.
    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        debug!(method:% = method, path = path; "Issuing API request");
        let bytes = self
            .http_client
            .send_request(method, path, body.as_ref())
            .await?;

        let envelope: ApiResponse<T> =
            serde_json::from_slice(&bytes).map_err(ClientError::Decode)?;
        if !envelope.ok {
            warn!(path = path, code:? = envelope.code; "API returned non-OK status");
            return Err(ClientError::Api {
                message: envelope
                    .error
                    .unwrap_or_else(|| "API returned non-OK status".to_string()),
                code: envelope.code,
                http_status: None,
            });
        }
        envelope.result.ok_or_else(missing_result)
    }
}

fn missing_result() -> ClientError {
    ClientError::Api {
        message: "API response is missing the result field".to_string(),
        code: None,
        http_status: None,
    }
}

// Single-field result wrappers the bindings unwrap before returning.

#[derive(serde::Deserialize)]
struct PackedForm {
    raw_form: String,
}

#[derive(serde::Deserialize)]
struct SignatureList {
    signatures: Vec<Signature>,
}

#[derive(serde::Deserialize)]
struct ShardList {
    shards: Vec<BlockId>,
}

#[derive(serde::Deserialize)]
struct TransactionList {
    transactions: Vec<TransactionDetails>,
}

#[derive(serde::Deserialize)]
struct LocatedTransaction {
    transaction: TransactionDetails,
}
